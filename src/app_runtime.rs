use tauri::{Manager, RunEvent};

use crate::{
    app_protocol, graceful_exit, logging, runtime_paths,
    shell_config::ShellConfig,
    shell_controller::ShellController,
    shell_locale,
    tauri_backend::{AppShell, TauriBackend},
    APP_SCHEME, DEFAULT_SHELL_LOCALE, DESKTOP_LOG_FILE,
};

pub(crate) fn run() {
    let mut log_guard = logging::init(&logging::resolve_desktop_log_path(
        runtime_paths::default_root_dir(),
        DESKTOP_LOG_FILE,
    ));

    let config = ShellConfig::from_env();
    let texts = shell_locale::shell_texts_for_locale(shell_locale::resolve_shell_locale(
        DEFAULT_SHELL_LOCALE,
    ));
    tracing::info!(
        run_mode = ?config.run_mode,
        content = ?config.content_source(),
        "desktop process starting"
    );

    let mut builder = tauri::Builder::default();
    if config.enforces_single_instance() {
        // A second process exits inside this plugin before `setup` runs.
        builder = builder.plugin(tauri_plugin_single_instance::init(|app, argv, cwd| {
            match app.try_state::<AppShell>() {
                Some(shell) => shell.handle_second_instance(&argv, &cwd),
                None => tracing::warn!("second instance forwarded before shell was ready"),
            }
        }));
    }

    let listens_for_graceful_exit = config.listens_for_graceful_exit();
    builder
        .plugin(tauri_plugin_notification::init())
        .register_uri_scheme_protocol(APP_SCHEME, app_protocol::serve_bundled_asset)
        .setup(move |app| {
            let app_handle = app.handle().clone();
            app.manage(ShellController::new(
                TauriBackend::new(app_handle.clone()),
                config,
                texts,
            ));

            if listens_for_graceful_exit {
                graceful_exit::spawn_graceful_exit_listener(app_handle.clone());
            }

            app.state::<AppShell>().handle_ready();
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(move |app_handle, event| match event {
            RunEvent::ExitRequested { api, code, .. } => {
                if code.is_some() {
                    return;
                }
                let Some(shell) = app_handle.try_state::<AppShell>() else {
                    return;
                };
                if !shell.handle_all_windows_closed(cfg!(target_os = "macos")) {
                    api.prevent_exit();
                }
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen { .. } => {
                if let Some(shell) = app_handle.try_state::<AppShell>() {
                    shell.handle_activate();
                }
            }
            RunEvent::Exit => {
                tracing::info!("desktop process exiting");
                drop(log_guard.take());
            }
            _ => {}
        });
}
