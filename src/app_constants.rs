pub const APP_NAME: &str = "NukeBatchRender";
pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_WIDTH: f64 = 800.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 600.0;
pub const TRAY_ID: &str = "main-tray";

pub const APP_SCHEME: &str = "app";
pub const PACKAGED_ENTRY_PATH: &str = "index.html";

pub const DEFAULT_SHELL_LOCALE: &str = "zh-CN";
pub const DESKTOP_LOG_FILE: &str = "desktop.log";

pub const NODE_ENV_ENV: &str = "NODE_ENV";
pub const DEV_SERVER_URL_ENV: &str = "WEBPACK_DEV_SERVER_URL";
pub const IS_TEST_ENV: &str = "IS_TEST";
pub const LOCALE_ENV: &str = "NUKEBATCHRENDER_LOCALE";
pub const ROOT_DIR_ENV: &str = "NUKEBATCHRENDER_ROOT";

pub const GRACEFUL_EXIT_MESSAGE: &str = "graceful-exit";
