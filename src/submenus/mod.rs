use crate::display::MonitorInfo;
use ratios::types::{Orientation, Resolution};

pub(crate) mod orientation_menu;
pub(crate) mod resolution_menu;

/// What clicking a menu entry does
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MenuAction {
    SetResolution {
        monitor: MonitorInfo,
        resolution: Resolution,
    },
    SetOrientation {
        monitor: MonitorInfo,
        orientation: Orientation,
    },
    Exit,
}

/// Toolkit independent menu tree, rendered by the tray
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum MenuEntry {
    /// Disabled line of text
    Header(String),
    /// Radio style entry
    Choice {
        label: String,
        checked: bool,
        action: MenuAction,
    },
    Action {
        label: String,
        action: MenuAction,
    },
    Submenu {
        label: String,
        entries: Vec<MenuEntry>,
    },
    Separator,
}

impl MenuEntry {
    pub(crate) fn label(&self) -> Option<&str> {
        match self {
            MenuEntry::Header(label)
            | MenuEntry::Choice { label, .. }
            | MenuEntry::Action { label, .. }
            | MenuEntry::Submenu { label, .. } => Some(label.as_str()),
            MenuEntry::Separator => None,
        }
    }
}
