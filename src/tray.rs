use crate::display::DisplayBackend;
use crate::gui::{AppFlow, TrayApp};
use crate::icon::ratio_icon;
use crate::submenus::{MenuAction, MenuEntry};
use crate::utils::or_previous;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, error, info};
use std::ptr;
use tray_icon::menu::{
    CheckMenuItem, IsMenuItem, Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem, Submenu,
};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder, TrayIconEvent};
use winapi::um::winuser::{DispatchMessageW, GetMessageW, TranslateMessage, MSG};

type Actions = IndexMap<MenuId, MenuAction>;
type AppendFn<'a> = dyn Fn(&dyn IsMenuItem) -> tray_icon::menu::Result<()> + 'a;

fn append_entries(entries: &[MenuEntry], append: &AppendFn, actions: &mut Actions) -> Result<()> {
    for entry in entries {
        match entry {
            MenuEntry::Header(label) => append(&MenuItem::new(label, false, None))?,
            MenuEntry::Separator => append(&PredefinedMenuItem::separator())?,
            MenuEntry::Choice {
                label,
                checked,
                action,
            } => {
                let item = CheckMenuItem::new(label, true, *checked, None);
                actions.insert(item.id().clone(), action.clone());
                append(&item)?;
            }
            MenuEntry::Action { label, action } => {
                let item = MenuItem::new(label, true, None);
                actions.insert(item.id().clone(), action.clone());
                append(&item)?;
            }
            MenuEntry::Submenu { label, entries } => {
                let submenu = Submenu::new(label, true);
                append_entries(entries, &|item: &dyn IsMenuItem| submenu.append(item), actions)?;
                append(&submenu)?;
            }
        }
    }
    Ok(())
}

/// Turns the menu model into tray menu items, remembering which id triggers which action
fn render_menu(entries: &[MenuEntry]) -> Result<(Menu, Actions)> {
    let menu = Menu::new();
    let mut actions = Actions::new();
    append_entries(entries, &|item: &dyn IsMenuItem| menu.append(item), &mut actions)
        .context("Failed to build tray menu")?;
    debug!(
        "Menu rebuilt: {}",
        entries.iter().filter_map(MenuEntry::label).join(" | ")
    );
    Ok((menu, actions))
}

fn render_icon<B: DisplayBackend>(app: &TrayApp<B>) -> Result<Icon> {
    let size = app.settings().icon_size();
    let image = ratio_icon(app.icon_ratio(), size);
    Icon::from_rgba(image.into_raw(), size, size).context("Failed to create tray icon image")
}

/// Replaces menu, tooltip and icon with the current display state
fn refresh<B: DisplayBackend>(app: &TrayApp<B>, tray: &TrayIcon) -> Result<Actions> {
    let (menu, actions) = render_menu(&app.main_menu())?;
    tray.set_menu(Some(Box::new(menu)));
    tray.set_tooltip(Some(app.tooltip()))
        .context("Failed to update tooltip")?;
    tray.set_icon(Some(render_icon(app)?))
        .context("Failed to update tray icon")?;
    Ok(actions)
}

/// Shows the tray icon and runs the Win32 message loop until Exit is chosen
pub(crate) fn run<B: DisplayBackend>(app: TrayApp<B>) -> Result<()> {
    let (menu, mut actions) = render_menu(&app.main_menu())?;
    let tray = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_tooltip(app.tooltip())
        .with_icon(render_icon(&app)?)
        .build()
        .context("Failed to create tray icon")?;
    info!("Tray icon created");

    let mut msg: MSG = unsafe { std::mem::zeroed() };
    while unsafe { GetMessageW(&mut msg, ptr::null_mut(), 0, 0) } > 0 {
        unsafe {
            TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        let mut stale = false;
        while let Ok(event) = TrayIconEvent::receiver().try_recv() {
            // hovering happens before the menu opens, rebuild so checks are current
            if let TrayIconEvent::Enter { .. } = event {
                stale = true;
            }
        }
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            let action = match actions.get(&event.id) {
                Some(action) => action.clone(),
                None => {
                    debug!("Ignoring event of unknown menu item {:?}", event.id);
                    continue;
                }
            };
            match app.apply(&action) {
                Ok(AppFlow::Exit) => {
                    info!("Exiting");
                    return Ok(());
                }
                Ok(AppFlow::Continue) => stale = true,
                Err(e) => {
                    error!("{}", e);
                    stale = true;
                }
            }
        }
        if stale {
            actions = or_previous(refresh(&app, &tray), actions);
        }
    }
    Ok(())
}
