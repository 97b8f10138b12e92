use crate::utils::display_number;
use ratios::types::{Orientation, Resolution};
use ratios::RatioError;
use std::fmt;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Display settings of {0} could not be read")]
    QueryFailed(String),
    #[error("{device} rejected the display change with status {status}")]
    ChangeRejected { device: String, status: i32 },
    #[error("Driver reported an invalid display mode")]
    InvalidMode(#[from] RatioError),
}

pub type DisplayResult<T> = Result<T, DisplayError>;

/// A monitor attached to the desktop
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MonitorInfo {
    /// Position among the attached monitors
    pub(crate) index: usize,
    /// Device name as the OS knows it, e.g. `\\.\DISPLAY1`
    pub(crate) device_name: String,
}

impl MonitorInfo {
    pub(crate) fn name(&self) -> String {
        match display_number(&self.device_name) {
            Some(number) => format!("Display {}", number),
            None => self.device_name.clone(),
        }
    }
}

impl Display for MonitorInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.index + 1, self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct DisplayMode {
    pub(crate) resolution: Resolution,
    pub(crate) orientation: Orientation,
    /// Hz, as reported by the driver
    pub(crate) refresh_rate: u32,
}

/// Access to the OS display configuration
pub(crate) trait DisplayBackend {
    /// Monitors attached to the desktop, in enumeration order
    fn monitors(&self) -> DisplayResult<Vec<MonitorInfo>>;

    fn current_mode(&self, monitor: &MonitorInfo) -> DisplayResult<DisplayMode>;

    /// Every resolution the monitor supports, first occurrence order, without duplicates
    fn available_resolutions(&self, monitor: &MonitorInfo) -> DisplayResult<Vec<Resolution>>;

    fn set_resolution(&self, monitor: &MonitorInfo, resolution: Resolution) -> DisplayResult<()>;

    fn set_orientation(&self, monitor: &MonitorInfo, orientation: Orientation)
        -> DisplayResult<()>;
}
