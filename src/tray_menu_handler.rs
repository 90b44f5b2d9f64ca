use tauri::{AppHandle, Manager};

use crate::{tauri_backend::AppShell, tray_actions};

pub fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    let Some(action) = tray_actions::action_from_menu_id(menu_id) else {
        tracing::debug!(menu_id, "ignoring unknown tray menu id");
        return;
    };
    let Some(shell) = app_handle.try_state::<AppShell>() else {
        tracing::warn!(?action, "tray menu event before shell was ready");
        return;
    };

    shell.handle_tray_action(action);
}

pub fn handle_tray_double_click(app_handle: &AppHandle) {
    if let Some(shell) = app_handle.try_state::<AppShell>() {
        shell.handle_tray_double_click();
    }
}
