use crate::display::DisplayMode;
use log::error;
use std::fmt::Debug;

/// Pulls the number out of a device name such as `\\.\DISPLAY12`
pub(crate) fn display_number(device_name: &str) -> Option<u32> {
    let (_, number) = device_name.rsplit_once("DISPLAY")?;
    number.parse().ok()
}

/// Describes a mode as `1920x1080 (16:9)`.
/// Falls back to the exact reduced ratio when no common ratio is close
pub(crate) fn describe_mode(mode: &DisplayMode) -> String {
    let resolution = mode.resolution;
    let ratio = resolution
        .closest_common_ratio()
        .unwrap_or_else(|| resolution.aspect_ratio().reduced());
    format!("{} ({}) {} Hz", resolution, ratio, mode.refresh_rate)
}

/// Keeps `previous` when rebuilding it failed, logging the failure
pub(crate) fn or_previous<T, E: Debug>(fresh: Result<T, E>, previous: T) -> T {
    match fresh {
        Ok(fresh) => fresh,
        Err(e) => {
            error!("Keeping the previous menu: {:?}", e);
            previous
        }
    }
}
