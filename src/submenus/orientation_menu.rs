use crate::display::MonitorInfo;
use crate::submenus::{MenuAction, MenuEntry};
use ratios::types::Orientation;

#[derive(Debug, Clone)]
pub(crate) struct OrientationMenu {
    monitor: MonitorInfo,
}

impl OrientationMenu {
    pub(crate) fn new(monitor: MonitorInfo) -> Self {
        Self { monitor }
    }

    pub(crate) fn build_orientation_entries(&self, current: Orientation) -> Vec<MenuEntry> {
        Orientation::LIST
            .iter()
            .map(|orientation| MenuEntry::Choice {
                label: orientation.to_string(),
                checked: *orientation == current,
                action: MenuAction::SetOrientation {
                    monitor: self.monitor.clone(),
                    orientation: *orientation,
                },
            })
            .collect()
    }
}
