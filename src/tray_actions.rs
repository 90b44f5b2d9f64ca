pub const TRAY_MENU_SHOW_WINDOW: &str = "tray_show_window";
pub const TRAY_MENU_QUIT: &str = "tray_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayMenuAction {
    ShowWindow,
    Quit,
}

/// Context menu entries in display order.
pub const TRAY_MENU_ACTIONS: [TrayMenuAction; 2] = [TrayMenuAction::ShowWindow, TrayMenuAction::Quit];

impl TrayMenuAction {
    pub fn menu_id(self) -> &'static str {
        match self {
            TrayMenuAction::ShowWindow => TRAY_MENU_SHOW_WINDOW,
            TrayMenuAction::Quit => TRAY_MENU_QUIT,
        }
    }
}

pub fn action_from_menu_id(menu_id: &str) -> Option<TrayMenuAction> {
    match menu_id {
        TRAY_MENU_SHOW_WINDOW => Some(TrayMenuAction::ShowWindow),
        TRAY_MENU_QUIT => Some(TrayMenuAction::Quit),
        _ => None,
    }
}
