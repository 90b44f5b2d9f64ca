//! Seams between the shell controller and the windowing toolkit.
//!
//! The controller only talks to these traits; `tauri_backend` provides the real
//! implementation and the controller tests provide a recording one.

use crate::{shell_config::ContentSource, tray_actions::TrayMenuAction, ShellError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

#[derive(Debug, Clone)]
pub struct WindowSpec {
    pub id: WindowId,
    pub label: &'static str,
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    pub content: ContentSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrayMenuEntry {
    pub action: TrayMenuAction,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct TraySpec {
    pub id: &'static str,
    pub tooltip: &'static str,
    pub entries: Vec<TrayMenuEntry>,
}

pub trait ShellWindow: Clone {
    fn show(&self) -> Result<(), ShellError>;
    fn hide(&self) -> Result<(), ShellError>;
    fn minimize(&self) -> Result<(), ShellError>;
    fn unminimize(&self) -> Result<(), ShellError>;
    fn set_focus(&self) -> Result<(), ShellError>;
    fn open_devtools(&self);
    /// Tears the window down without emitting a close request.
    fn destroy(&self) -> Result<(), ShellError>;
}

pub trait ShellTray: Clone {
    fn display_balloon(&self, title: &str, body: &str) -> Result<(), ShellError>;
}

pub trait ShellBackend {
    type Window: ShellWindow;
    type Tray: ShellTray;

    /// Builds a window and wires its `close`/`closed` events back to the controller.
    fn create_window(&self, spec: &WindowSpec) -> Result<Self::Window, ShellError>;
    /// Builds the tray icon and wires its menu and double-click events back to the controller.
    fn create_tray(&self, spec: &TraySpec) -> Result<Self::Tray, ShellError>;
    fn prepare_devtools(&self) -> Result<(), ShellError>;
    fn exit(&self);
}
