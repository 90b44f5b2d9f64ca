use thiserror::Error;

/// Failures surfaced by the window/tray shell.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("failed to create main window: {0}")]
    WindowCreate(String),

    /// A call on an existing window handle failed.
    #[error("main window `{op}` failed: {reason}")]
    WindowOp { op: &'static str, reason: String },

    #[error("failed to create tray icon: {0}")]
    TrayCreate(String),

    #[error("failed to show tray notification: {0}")]
    Notification(String),

    #[error("devtools unavailable: {0}")]
    Devtools(String),
}

impl ShellError {
    pub(crate) fn window_op(op: &'static str, error: impl std::fmt::Display) -> Self {
        Self::WindowOp {
            op,
            reason: error.to_string(),
        }
    }
}
