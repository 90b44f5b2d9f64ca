use tauri::{AppHandle, WebviewWindow};

use crate::{
    main_window,
    shell_backend::{ShellBackend, TraySpec, WindowSpec},
    shell_controller::ShellController,
    tray_setup::{self, TauriTray},
    ShellError,
};

/// The controller type kept in Tauri managed state.
pub type AppShell = ShellController<TauriBackend>;

pub struct TauriBackend {
    app_handle: AppHandle,
}

impl TauriBackend {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl ShellBackend for TauriBackend {
    type Window = WebviewWindow;
    type Tray = TauriTray;

    fn create_window(&self, spec: &WindowSpec) -> Result<WebviewWindow, ShellError> {
        main_window::build_main_window(&self.app_handle, spec)
    }

    fn create_tray(&self, spec: &TraySpec) -> Result<TauriTray, ShellError> {
        tray_setup::setup_tray(&self.app_handle, spec)
    }

    // The inspector ships with the webview; it only has to be compiled in.
    fn prepare_devtools(&self) -> Result<(), ShellError> {
        if cfg!(any(debug_assertions, feature = "devtools")) {
            Ok(())
        } else {
            Err(ShellError::Devtools(
                "webview inspector is not compiled into this build; enable the `devtools` feature"
                    .to_string(),
            ))
        }
    }

    fn exit(&self) {
        self.app_handle.exit(0);
    }
}
