#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_protocol;
mod app_runtime;
mod error;
mod graceful_exit;
mod logging;
mod main_window;
mod runtime_paths;
mod shell_backend;
mod shell_config;
mod shell_controller;
mod shell_locale;
mod tauri_backend;
mod tray_actions;
mod tray_menu_handler;
mod tray_setup;
mod ui_dispatch;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use error::ShellError;

fn main() {
    app_runtime::run();
}
