use tauri::{
    menu::{IsMenuItem, Menu, MenuItem},
    tray::{MouseButton, TrayIcon, TrayIconBuilder, TrayIconEvent},
    AppHandle, Wry,
};
use tauri_plugin_notification::NotificationExt;

use crate::{
    shell_backend::{ShellTray, TraySpec},
    tray_menu_handler, ShellError,
};

#[derive(Clone)]
pub struct TauriTray {
    _tray: TrayIcon,
    app_handle: AppHandle,
}

impl ShellTray for TauriTray {
    fn display_balloon(&self, title: &str, body: &str) -> Result<(), ShellError> {
        self.app_handle
            .notification()
            .builder()
            .title(title)
            .body(body)
            .show()
            .map_err(|error| ShellError::Notification(error.to_string()))
    }
}

pub fn setup_tray(app_handle: &AppHandle, spec: &TraySpec) -> Result<TauriTray, ShellError> {
    let items = spec
        .entries
        .iter()
        .map(|entry| {
            MenuItem::with_id(
                app_handle,
                entry.action.menu_id(),
                entry.label,
                true,
                None::<&str>,
            )
            .map_err(|error| {
                ShellError::TrayCreate(format!(
                    "failed to create tray menu item {}: {error}",
                    entry.action.menu_id()
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let menu_items: Vec<&dyn IsMenuItem<Wry>> = items
        .iter()
        .map(|item| item as &dyn IsMenuItem<Wry>)
        .collect();
    let menu = Menu::with_items(app_handle, &menu_items)
        .map_err(|error| ShellError::TrayCreate(format!("failed to build tray menu: {error}")))?;

    let tray_builder = TrayIconBuilder::with_id(spec.id)
        .menu(&menu)
        .tooltip(spec.tooltip)
        .icon(tauri::include_image!("./icons/tray.png"))
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            tray_menu_handler::handle_tray_menu_event(app, event.id().as_ref())
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::DoubleClick {
                button: MouseButton::Left,
                ..
            } = event
            {
                tray_menu_handler::handle_tray_double_click(tray.app_handle());
            }
        });

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    let tray = tray_builder
        .build(app_handle)
        .map_err(|error| ShellError::TrayCreate(error.to_string()))?;

    Ok(TauriTray {
        _tray: tray,
        app_handle: app_handle.clone(),
    })
}
