use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder, WindowEvent};

use crate::{
    app_protocol,
    shell_backend::{WindowId, WindowSpec},
    shell_config::ContentSource,
    tauri_backend::AppShell,
    ShellError,
};

fn webview_url_for(content: &ContentSource) -> Result<WebviewUrl, ShellError> {
    match content {
        ContentSource::DevServer(url) => Ok(WebviewUrl::External(url.clone())),
        ContentSource::Packaged => app_protocol::packaged_entry_url()
            .map(WebviewUrl::CustomProtocol)
            .map_err(|error| ShellError::WindowCreate(format!("invalid packaged entry url: {error}"))),
    }
}

pub fn build_main_window(
    app_handle: &AppHandle,
    spec: &WindowSpec,
) -> Result<WebviewWindow, ShellError> {
    let window = WebviewWindowBuilder::new(app_handle, spec.label, webview_url_for(&spec.content)?)
        .title(spec.title)
        .inner_size(spec.width, spec.height)
        .build()
        .map_err(|error| ShellError::WindowCreate(error.to_string()))?;

    if let Err(error) = window.remove_menu() {
        tracing::warn!("failed to remove main window menu bar: {error}");
    }

    let window_id = spec.id;
    let event_app = app_handle.clone();
    window.on_window_event(move |event| handle_main_window_event(&event_app, window_id, event));

    Ok(window)
}

fn handle_main_window_event(app_handle: &AppHandle, window_id: WindowId, event: &WindowEvent) {
    let Some(shell) = app_handle.try_state::<AppShell>() else {
        return;
    };

    match event {
        WindowEvent::CloseRequested { api, .. } => {
            if shell.handle_close_requested(window_id).prevents_close() {
                api.prevent_close();
            }
        }
        WindowEvent::Destroyed => shell.handle_window_destroyed(window_id),
        _ => {}
    }
}
