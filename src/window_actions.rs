use tauri::WebviewWindow;

use crate::{shell_backend::ShellWindow, ShellError};

impl ShellWindow for WebviewWindow {
    fn show(&self) -> Result<(), ShellError> {
        WebviewWindow::show(self).map_err(|error| ShellError::window_op("show", error))
    }

    fn hide(&self) -> Result<(), ShellError> {
        WebviewWindow::hide(self).map_err(|error| ShellError::window_op("hide", error))
    }

    fn minimize(&self) -> Result<(), ShellError> {
        WebviewWindow::minimize(self).map_err(|error| ShellError::window_op("minimize", error))
    }

    fn unminimize(&self) -> Result<(), ShellError> {
        WebviewWindow::unminimize(self).map_err(|error| ShellError::window_op("unminimize", error))
    }

    fn set_focus(&self) -> Result<(), ShellError> {
        WebviewWindow::set_focus(self).map_err(|error| ShellError::window_op("set_focus", error))
    }

    fn open_devtools(&self) {
        #[cfg(any(debug_assertions, feature = "devtools"))]
        WebviewWindow::open_devtools(self);

        #[cfg(not(any(debug_assertions, feature = "devtools")))]
        tracing::warn!("devtools requested but not compiled into this build");
    }

    fn destroy(&self) -> Result<(), ShellError> {
        WebviewWindow::destroy(self).map_err(|error| ShellError::window_op("destroy", error))
    }
}
