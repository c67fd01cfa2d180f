//! Native menu support for Luny Text
//!
//! This module binds the declarative [`MenuTemplate`] to the native menu
//! using the `muda` crate.
//! - macOS: Global application menu bar
//! - Windows: Per-window menu bar
//! - Linux: not attached (winit windows are not GTK windows); the documents
//!   forward their shortcuts instead, see [`shortcuts`]

mod accelerator;
pub mod shortcuts;

pub use accelerator::to_muda;

use luny_text_menu::{MenuAction, MenuEntry, MenuTemplate, Role, RoleItem};
use muda::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem, Submenu};
use std::collections::HashMap;
use std::sync::Arc;
use winit::window::Window;

/// Manages the native menu system
pub struct MenuManager {
    /// The root menu
    #[cfg_attr(not(any(target_os = "macos", target_os = "windows")), allow(dead_code))]
    menu: Menu,
    /// Mapping from menu item IDs to actions
    action_map: HashMap<MenuId, MenuAction>,
}

impl MenuManager {
    /// Create the native menu by walking `template` once
    pub fn new(template: &MenuTemplate) -> Result<Self, muda::Error> {
        let menu = Menu::new();
        let mut action_map = HashMap::new();

        for entry in &template.entries {
            match entry {
                MenuEntry::Submenu { label, entries } => {
                    let submenu = build_submenu(label, entries, &mut action_map)?;
                    menu.append(&submenu)?;
                }
                other => {
                    log::warn!(
                        "Skipping top-level menu entry {:?}: only submenus belong in the menu bar",
                        other.label()
                    );
                }
            }
        }

        log::info!("Built native menu with {} actions", action_map.len());
        Ok(Self { menu, action_map })
    }

    /// Action bound to a native menu item id
    pub fn action_for(&self, id: &MenuId) -> Option<MenuAction> {
        self.action_map.get(id).copied()
    }

    /// Initialize the menu for a window
    ///
    /// On macOS, this initializes the global application menu (only needs to be called once).
    /// On Windows, this attaches a menu bar to the specific window.
    pub fn init_for_window(&self, window: &Arc<Window>) -> Result<(), crate::error::AppError> {
        #[cfg(target_os = "macos")]
        {
            let _ = window;
            self.menu.init_for_nsapp();
            log::info!("Initialized macOS global menu bar");
            Ok(())
        }

        #[cfg(target_os = "windows")]
        {
            use raw_window_handle::{HasWindowHandle, RawWindowHandle};
            let handle = window.window_handle()?;
            if let RawWindowHandle::Win32(win32_handle) = handle.as_raw() {
                // SAFETY: the hwnd belongs to a live winit window owned by the caller
                unsafe { self.menu.init_for_hwnd(win32_handle.hwnd.get() as _)? };
                log::info!("Initialized Windows menu bar for window {:?}", window.id());
            }
            Ok(())
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            log::info!(
                "Menu bar not attached to window {:?}: shortcuts come from the document",
                window.id()
            );
            Ok(())
        }
    }

    /// Poll for menu events and return any triggered actions
    pub fn poll_events(&self) -> impl Iterator<Item = MenuAction> + '_ {
        std::iter::from_fn(|| MenuEvent::receiver().try_recv().ok()).filter_map(|event| {
            let action = self.action_for(&event.id);
            if action.is_none() {
                log::trace!("Menu event {:?} has no bound action", event.id);
            }
            action
        })
    }
}

fn build_submenu(
    label: &str,
    entries: &[MenuEntry],
    action_map: &mut HashMap<MenuId, MenuAction>,
) -> Result<Submenu, muda::Error> {
    let submenu = Submenu::new(label, true);

    for entry in entries {
        match entry {
            MenuEntry::Action(item) => {
                let accelerator = match item.parsed_accelerator() {
                    Some(Ok(parsed)) => to_muda(&parsed),
                    Some(Err(e)) => {
                        log::warn!("Ignoring accelerator of '{}': {}", item.label, e);
                        None
                    }
                    None => None,
                };
                let menu_item = MenuItem::with_id(item.id, item.label, true, accelerator);
                action_map.insert(menu_item.id().clone(), item.action);
                submenu.append(&menu_item)?;
            }
            MenuEntry::Role(item) => {
                let predefined = predefined_item(item);
                submenu.append(&predefined)?;
            }
            MenuEntry::Submenu { label, entries } => {
                let child = build_submenu(label, entries, action_map)?;
                submenu.append(&child)?;
            }
            MenuEntry::Separator => {
                submenu.append(&PredefinedMenuItem::separator())?;
            }
        }
    }

    Ok(submenu)
}

/// Map a role onto the toolkit's predefined item, which brings its own
/// platform accelerator.
fn predefined_item(item: &RoleItem) -> PredefinedMenuItem {
    let text = Some(item.label);
    match item.role {
        Role::Undo => PredefinedMenuItem::undo(text),
        Role::Redo => PredefinedMenuItem::redo(text),
        Role::Cut => PredefinedMenuItem::cut(text),
        Role::Copy => PredefinedMenuItem::copy(text),
        Role::Paste => PredefinedMenuItem::paste(text),
        Role::SelectAll => PredefinedMenuItem::select_all(text),
    }
}
