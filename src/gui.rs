use crate::display::{DisplayBackend, DisplayMode, DisplayResult, MonitorInfo};
use crate::settings::SavedSettings;
use crate::submenus::orientation_menu::OrientationMenu;
use crate::submenus::resolution_menu::ResolutionMenu;
use crate::submenus::{MenuAction, MenuEntry};
use crate::utils::describe_mode;
use itertools::Itertools;
use log::{debug, error, info, warn};
use ratios::types::{AspectRatio, COMMON_RATIOS};

const APP_NAME: &str = "res-switch";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum AppFlow {
    Continue,
    Exit,
}

/// Builds the tray menu from live display state and carries out what was clicked
#[derive(Debug)]
pub(crate) struct TrayApp<B> {
    backend: B,
    settings: SavedSettings,
}

impl<B: DisplayBackend> TrayApp<B> {
    pub(crate) fn new(backend: B, settings: SavedSettings) -> Self {
        Self { backend, settings }
    }

    pub(crate) fn settings(&self) -> &SavedSettings {
        &self.settings
    }

    /// Monitors, then Exit. A single monitor is listed inline, several get a submenu each
    pub(crate) fn main_menu(&self) -> Vec<MenuEntry> {
        let mut entries = match self.backend.monitors() {
            Ok(monitors) => self.monitor_entries(&monitors),
            Err(e) => {
                error!("Failed to enumerate displays: {}", e);
                vec![MenuEntry::Header(e.to_string())]
            }
        };
        entries.push(MenuEntry::Separator);
        entries.push(MenuEntry::Action {
            label: "Exit".to_string(),
            action: MenuAction::Exit,
        });
        entries
    }

    fn monitor_entries(&self, monitors: &[MonitorInfo]) -> Vec<MenuEntry> {
        match monitors {
            [] => vec![MenuEntry::Header("No displays found".to_string())],
            [monitor] => self.monitor_menu_or_error(monitor),
            _ => monitors
                .iter()
                .map(|monitor| MenuEntry::Submenu {
                    label: monitor.to_string(),
                    entries: self.monitor_menu_or_error(monitor),
                })
                .collect(),
        }
    }

    fn monitor_menu_or_error(&self, monitor: &MonitorInfo) -> Vec<MenuEntry> {
        self.monitor_menu(monitor).unwrap_or_else(|e| {
            warn!("Skipping menu of {}: {}", monitor, e);
            vec![MenuEntry::Header(e.to_string())]
        })
    }

    pub(crate) fn monitor_menu(&self, monitor: &MonitorInfo) -> DisplayResult<Vec<MenuEntry>> {
        let mode = self.backend.current_mode(monitor)?;
        let available = self.backend.available_resolutions(monitor)?;
        debug!(
            "{} is at {}, supports {}",
            monitor,
            describe_mode(&mode),
            available.iter().join(", ")
        );

        let mut resolution_menu = ResolutionMenu::new(monitor.clone());
        resolution_menu.hide_unknown = self.settings.hide_unknown_ratios;
        let mut entries = resolution_menu.build_resolution_entries(available, &mode.resolution);

        let mut extras = Vec::new();
        if self.settings.show_orientation_menu {
            extras.push(MenuEntry::Submenu {
                label: "Orientation".to_string(),
                entries: OrientationMenu::new(monitor.clone())
                    .build_orientation_entries(mode.orientation),
            });
        }
        if self.settings.show_refresh_rate {
            extras.push(MenuEntry::Header(format!(
                "Refresh rate: {} Hz",
                mode.refresh_rate
            )));
        }
        if !extras.is_empty() {
            if !entries.is_empty() {
                entries.push(MenuEntry::Separator);
            }
            entries.extend(extras);
        }
        Ok(entries)
    }

    pub(crate) fn apply(&self, action: &MenuAction) -> DisplayResult<AppFlow> {
        match action {
            MenuAction::SetResolution {
                monitor,
                resolution,
            } => {
                self.backend.set_resolution(monitor, *resolution)?;
                info!("Changed resolution of {} to {}", monitor, resolution);
                Ok(AppFlow::Continue)
            }
            MenuAction::SetOrientation {
                monitor,
                orientation,
            } => {
                self.backend.set_orientation(monitor, *orientation)?;
                info!("Changed orientation of {} to {}", monitor, orientation);
                Ok(AppFlow::Continue)
            }
            MenuAction::Exit => Ok(AppFlow::Exit),
        }
    }

    fn primary_mode(&self) -> Option<DisplayMode> {
        let monitors = self.backend.monitors().ok()?;
        let monitor = monitors.first()?;
        self.backend.current_mode(monitor).ok()
    }

    pub(crate) fn tooltip(&self) -> String {
        if let Some(tooltip) = &self.settings.tooltip {
            return tooltip.clone();
        }
        match self.primary_mode() {
            Some(mode) => format!("{}: {}", APP_NAME, describe_mode(&mode)),
            None => APP_NAME.to_string(),
        }
    }

    /// Shape of the first monitor's screen as it currently stands
    pub(crate) fn icon_ratio(&self) -> AspectRatio {
        let mode = match self.primary_mode() {
            Some(mode) => mode,
            // 16:9
            None => return COMMON_RATIOS[4],
        };
        let ratio = mode
            .resolution
            .closest_common_ratio()
            .unwrap_or_else(|| mode.resolution.aspect_ratio());
        match mode.orientation.is_rotated() {
            false => ratio,
            true => ratio.flipped(),
        }
    }
}
