//! Development-mode shutdown requests from the parent dev tool.

use std::io::BufRead;

use tauri::{AppHandle, Manager};

use crate::{tauri_backend::AppShell, ui_dispatch, GRACEFUL_EXIT_MESSAGE};

pub fn is_graceful_exit_message(line: &str) -> bool {
    line.trim() == GRACEFUL_EXIT_MESSAGE
}

/// Blocks until a graceful-exit line arrives. Returns false when the stream ends first.
#[cfg_attr(unix, allow(dead_code))]
pub fn wait_for_graceful_exit_message<R: BufRead>(reader: R) -> bool {
    for line in reader.lines() {
        match line {
            Ok(line) if is_graceful_exit_message(&line) => return true,
            Ok(_) => {}
            Err(error) => {
                tracing::warn!("stopped reading graceful-exit channel: {error}");
                return false;
            }
        }
    }
    false
}

fn request_quit(app_handle: &AppHandle, source: &'static str) {
    tracing::info!(source, "graceful exit requested");
    if let Err(error) = ui_dispatch::run_on_main_thread_dispatch(app_handle, "graceful exit", |app| {
        match app.try_state::<AppShell>() {
            Some(shell) => shell.quit(),
            None => app.exit(0),
        }
    }) {
        tracing::error!("{error}");
    }
}

#[cfg(unix)]
pub fn spawn_graceful_exit_listener(app_handle: AppHandle) {
    use tokio::signal::unix::{signal, SignalKind};

    tauri::async_runtime::spawn(async move {
        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(stream) => stream,
            Err(error) => {
                tracing::warn!("failed to listen for SIGTERM: {error}");
                return;
            }
        };
        if terminate.recv().await.is_some() {
            request_quit(&app_handle, "SIGTERM");
        }
    });
}

#[cfg(not(unix))]
pub fn spawn_graceful_exit_listener(app_handle: AppHandle) {
    tauri::async_runtime::spawn_blocking(move || {
        if wait_for_graceful_exit_message(std::io::stdin().lock()) {
            request_quit(&app_handle, GRACEFUL_EXIT_MESSAGE);
        }
    });
}
