// Tray only, no console window in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
// Only the tray glue is Windows specific, everything else is still built and tested elsewhere
#![cfg_attr(not(windows), allow(dead_code))]

mod display;
mod gui;
mod icon;
mod settings;
mod submenus;
#[cfg(windows)]
mod tray;
mod utils;
#[cfg(windows)]
mod win32;

use crate::settings::SavedSettings;
use anyhow::Result;

fn main() -> Result<()> {
    pretty_env_logger::init();
    run(SavedSettings::load_settings())
}

#[cfg(windows)]
fn run(settings: SavedSettings) -> Result<()> {
    let app = gui::TrayApp::new(win32::Win32Display, settings);
    tray::run(app)
}

#[cfg(not(windows))]
fn run(_settings: SavedSettings) -> Result<()> {
    log::error!("Display configuration is only available on Windows");
    anyhow::bail!("unsupported platform")
}
