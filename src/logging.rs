use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";

pub fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => env::temp_dir().join("nukebatchrender").join(file_name),
    }
}

fn prepare_log_file(log_path: &Path) -> io::Result<(PathBuf, String)> {
    let parent = log_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("log path {} has no parent directory", log_path.display()),
            )
        })?;
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("log path {} has no file name", log_path.display()),
            )
        })?;

    fs::create_dir_all(parent)?;
    Ok((parent.to_path_buf(), file_name.to_string()))
}

/// Installs the global subscriber: stderr plus a daily rolling file.
///
/// The returned guard flushes the file writer on drop and must live until exit.
pub fn init(log_path: &Path) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let file_appender = prepare_log_file(log_path)
        .map_err(|error| error.to_string())
        .and_then(|(dir, file_name)| {
            RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(file_name)
                .build(dir)
                .map_err(|error| error.to_string())
        });
    let (file_layer, guard, file_error) = match file_appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Err(error) => (None, None, Some(error)),
    };

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(file_layer)
        .try_init();
    if let Err(error) = installed {
        eprintln!("failed to install log subscriber: {error}");
        return guard;
    }

    match file_error {
        Some(error) => tracing::warn!(
            "desktop log file {} unavailable, logging to stderr only: {error}",
            log_path.display()
        ),
        None => tracing::info!("desktop log path: {}", log_path.display()),
    }
    guard
}
