use crate::display::{DisplayBackend, DisplayError, DisplayMode, DisplayResult, MonitorInfo};
use itertools::Itertools;
use log::{debug, trace};
use ratios::types::{Orientation, Resolution};
use std::mem;
use std::ptr;
use winapi::shared::minwindef::DWORD;
use winapi::um::wingdi::{
    DEVMODEW, DISPLAY_DEVICEW, DISPLAY_DEVICE_ATTACHED_TO_DESKTOP, DM_DISPLAYORIENTATION,
    DM_PELSHEIGHT, DM_PELSWIDTH,
};
use winapi::um::winuser::{
    ChangeDisplaySettingsExW, EnumDisplayDevicesW, EnumDisplaySettingsW, DISP_CHANGE_SUCCESSFUL,
    ENUM_CURRENT_SETTINGS,
};

/// Display configuration through the Win32 GDI display functions
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Win32Display;

fn to_wide(value: &str) -> Vec<u16> {
    value.encode_utf16().chain(std::iter::once(0)).collect()
}

fn from_wide(value: &[u16]) -> String {
    let end = value.iter().position(|c| *c == 0).unwrap_or(value.len());
    String::from_utf16_lossy(&value[..end])
}

/// Display device at `index`, `None` once the index is past the last device
fn display_device(index: DWORD) -> Option<DISPLAY_DEVICEW> {
    let mut device: DISPLAY_DEVICEW = unsafe { mem::zeroed() };
    device.cb = mem::size_of::<DISPLAY_DEVICEW>() as DWORD;
    let found = unsafe { EnumDisplayDevicesW(ptr::null(), index, &mut device, 0) };
    if found == 0 {
        None
    } else {
        Some(device)
    }
}

/// Mode number `mode` of a device, `None` once the number is past the last mode
fn display_settings(device_name: &[u16], mode: DWORD) -> Option<DEVMODEW> {
    let mut devmode: DEVMODEW = unsafe { mem::zeroed() };
    devmode.dmSize = mem::size_of::<DEVMODEW>() as u16;
    let found = unsafe { EnumDisplaySettingsW(device_name.as_ptr(), mode, &mut devmode) };
    if found == 0 {
        None
    } else {
        Some(devmode)
    }
}

fn orientation_of(devmode: &DEVMODEW) -> Orientation {
    let index = unsafe { devmode.u1.s2().dmDisplayOrientation };
    Orientation::from_index(index).unwrap_or_default()
}

impl Win32Display {
    fn current_settings(&self, monitor: &MonitorInfo) -> DisplayResult<(Vec<u16>, DEVMODEW)> {
        let device_name = to_wide(&monitor.device_name);
        let devmode = display_settings(&device_name, ENUM_CURRENT_SETTINGS)
            .ok_or_else(|| DisplayError::QueryFailed(monitor.device_name.clone()))?;
        Ok((device_name, devmode))
    }

    fn change_settings(
        &self,
        monitor: &MonitorInfo,
        device_name: &[u16],
        mut devmode: DEVMODEW,
    ) -> DisplayResult<()> {
        let status = unsafe {
            ChangeDisplaySettingsExW(
                device_name.as_ptr(),
                &mut devmode,
                ptr::null_mut(),
                0,
                ptr::null_mut(),
            )
        };
        if status == DISP_CHANGE_SUCCESSFUL {
            Ok(())
        } else {
            Err(DisplayError::ChangeRejected {
                device: monitor.device_name.clone(),
                status,
            })
        }
    }
}

impl DisplayBackend for Win32Display {
    fn monitors(&self) -> DisplayResult<Vec<MonitorInfo>> {
        let monitors: Vec<MonitorInfo> = (0..)
            .map_while(display_device)
            .filter(|device| device.StateFlags & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP != 0)
            .enumerate()
            .map(|(index, device)| MonitorInfo {
                index,
                device_name: from_wide(&device.DeviceName),
            })
            .collect();
        debug!("Found displays {}", monitors.iter().join(", "));
        Ok(monitors)
    }

    fn current_mode(&self, monitor: &MonitorInfo) -> DisplayResult<DisplayMode> {
        let (_, devmode) = self.current_settings(monitor)?;
        Ok(DisplayMode {
            resolution: Resolution::try_from((devmode.dmPelsWidth, devmode.dmPelsHeight))?,
            orientation: orientation_of(&devmode),
            refresh_rate: devmode.dmDisplayFrequency,
        })
    }

    fn available_resolutions(&self, monitor: &MonitorInfo) -> DisplayResult<Vec<Resolution>> {
        let device_name = to_wide(&monitor.device_name);
        let resolutions: Vec<Resolution> = (0..)
            .map_while(|mode| display_settings(&device_name, mode))
            .filter_map(|devmode| {
                Resolution::try_from((devmode.dmPelsWidth, devmode.dmPelsHeight))
                    .map_err(|e| trace!("Skipping mode of {}: {}", monitor, e))
                    .ok()
            })
            .unique()
            .collect();
        Ok(resolutions)
    }

    fn set_resolution(&self, monitor: &MonitorInfo, resolution: Resolution) -> DisplayResult<()> {
        let (device_name, mut devmode) = self.current_settings(monitor)?;
        let (width, height) = resolution.oriented(orientation_of(&devmode));
        devmode.dmPelsWidth = width;
        devmode.dmPelsHeight = height;
        devmode.dmFields = DM_PELSWIDTH | DM_PELSHEIGHT;
        debug!("Requesting {}x{} on {}", width, height, monitor);
        self.change_settings(monitor, &device_name, devmode)
    }

    fn set_orientation(
        &self,
        monitor: &MonitorInfo,
        orientation: Orientation,
    ) -> DisplayResult<()> {
        let (device_name, mut devmode) = self.current_settings(monitor)?;
        let (width, height) = orientation_of(&devmode).rotate_dimensions(
            orientation,
            devmode.dmPelsWidth,
            devmode.dmPelsHeight,
        );
        devmode.dmPelsWidth = width;
        devmode.dmPelsHeight = height;
        unsafe {
            devmode.u1.s2_mut().dmDisplayOrientation = orientation.index();
        }
        devmode.dmFields = DM_PELSWIDTH | DM_PELSHEIGHT | DM_DISPLAYORIENTATION;
        debug!("Requesting {} at {}x{} on {}", orientation, width, height, monitor);
        self.change_settings(monitor, &device_name, devmode)
    }
}
