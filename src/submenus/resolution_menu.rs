use crate::display::MonitorInfo;
use crate::submenus::{MenuAction, MenuEntry};
use ratios::types::Resolution;
use ratios::{sort_resolutions, RatioBucket};

#[derive(Debug, Clone)]
pub(crate) struct ResolutionMenu {
    monitor: MonitorInfo,
    pub(crate) hide_unknown: bool,
}

impl ResolutionMenu {
    pub(crate) fn new(monitor: MonitorInfo) -> Self {
        Self {
            monitor,
            hide_unknown: false,
        }
    }

    /// One header per non-empty ratio group followed by its resolutions,
    /// groups separated from each other
    pub(crate) fn build_resolution_entries<I>(
        &self,
        available: I,
        current: &Resolution,
    ) -> Vec<MenuEntry>
    where
        I: IntoIterator<Item = Resolution>,
    {
        let hide_unknown = self.hide_unknown;
        sort_resolutions(available)
            .into_iter()
            .filter(|(bucket, resolutions)| {
                !resolutions.is_empty() && !(hide_unknown && *bucket == RatioBucket::Unknown)
            })
            .fold(Vec::new(), |mut entries, (bucket, resolutions)| {
                if !entries.is_empty() {
                    entries.push(MenuEntry::Separator);
                }
                entries.push(MenuEntry::Header(bucket.to_string()));
                entries.extend(resolutions.into_iter().map(|resolution| MenuEntry::Choice {
                    label: resolution.to_string(),
                    checked: resolution == *current,
                    action: MenuAction::SetResolution {
                        monitor: self.monitor.clone(),
                        resolution,
                    },
                }));
                entries
            })
    }
}
