//! Declarative application menu.
//!
//! The menu is plain data: a tree of [`MenuEntry`] values built once at
//! startup and walked by the host to create native menu items. Nothing in
//! here touches a UI toolkit.

use crate::accelerator::{Accelerator, ParseError, parse_accelerator};
use crate::action::{Encoding, MenuAction, Role};
use std::collections::{HashMap, HashSet};

/// A leaf entry bound to a direct action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionItem {
    /// Stable identifier, used as the native menu item id
    pub id: &'static str,
    pub label: &'static str,
    /// Accelerator in portable notation, e.g. "CmdOrCtrl+Shift+S"
    pub accelerator: Option<&'static str>,
    pub action: MenuAction,
}

impl ActionItem {
    /// Parse the accelerator string, if any.
    pub fn parsed_accelerator(&self) -> Option<Result<Accelerator, ParseError>> {
        self.accelerator.map(parse_accelerator)
    }
}

/// A leaf entry delegated to a host-provided role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleItem {
    pub label: &'static str,
    pub accelerator: Option<&'static str>,
    pub role: Role,
}

/// One node of the menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Action(ActionItem),
    Role(RoleItem),
    Submenu {
        label: &'static str,
        entries: Vec<MenuEntry>,
    },
    Separator,
}

impl MenuEntry {
    fn action(
        id: &'static str,
        label: &'static str,
        accelerator: Option<&'static str>,
        action: MenuAction,
    ) -> Self {
        MenuEntry::Action(ActionItem {
            id,
            label,
            accelerator,
            action,
        })
    }

    fn role(label: &'static str, accelerator: &'static str, role: Role) -> Self {
        MenuEntry::Role(RoleItem {
            label,
            accelerator: Some(accelerator),
            role,
        })
    }

    fn submenu(label: &'static str, entries: Vec<MenuEntry>) -> Self {
        MenuEntry::Submenu { label, entries }
    }

    /// Label shown for this entry (`None` for separators)
    pub fn label(&self) -> Option<&'static str> {
        match self {
            MenuEntry::Action(item) => Some(item.label),
            MenuEntry::Role(item) => Some(item.label),
            MenuEntry::Submenu { label, .. } => Some(*label),
            MenuEntry::Separator => None,
        }
    }
}

/// The complete application menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTemplate {
    pub entries: Vec<MenuEntry>,
}

impl MenuTemplate {
    /// Build the Luny Text application menu: File, Edit, View, Help.
    pub fn application() -> Self {
        use MenuEntry as E;

        let file = E::submenu(
            "File",
            vec![
                E::action("new_file", "New File", Some("CmdOrCtrl+N"), MenuAction::NewFile),
                E::action("open_file", "Open File", Some("CmdOrCtrl+O"), MenuAction::OpenFile),
                E::action(
                    "open_folder",
                    "Open Folder",
                    Some("CmdOrCtrl+Shift+O"),
                    MenuAction::OpenFolder,
                ),
                E::submenu(
                    "Open Recent",
                    vec![
                        E::action("open_recent_1", "File 1", None, MenuAction::OpenRecent(1)),
                        E::action("open_recent_2", "File 2", None, MenuAction::OpenRecent(2)),
                    ],
                ),
                E::submenu(
                    "Reopen with Encoding",
                    vec![
                        E::action(
                            "reopen_utf8",
                            Encoding::Utf8.label(),
                            None,
                            MenuAction::ReopenWithEncoding(Encoding::Utf8),
                        ),
                        E::action(
                            "reopen_iso_8859_1",
                            Encoding::Iso8859_1.label(),
                            None,
                            MenuAction::ReopenWithEncoding(Encoding::Iso8859_1),
                        ),
                    ],
                ),
                E::Separator,
                E::action("save_as", "Save As", Some("CmdOrCtrl+Shift+S"), MenuAction::SaveAs),
                E::action("save_all", "Save All", Some("CmdOrCtrl+Shift+A"), MenuAction::SaveAll),
                E::Separator,
                E::action("print", "Print...", Some("CmdOrCtrl+P"), MenuAction::Print),
                E::Separator,
                E::action(
                    "new_window",
                    "New Window",
                    Some("CmdOrCtrl+Shift+N"),
                    MenuAction::NewWindow,
                ),
                E::action(
                    "close_window",
                    "Close Window",
                    Some("CmdOrCtrl+Shift+W"),
                    MenuAction::CloseWindow,
                ),
                E::action("close_file", "Close File", Some("CmdOrCtrl+W"), MenuAction::CloseFile),
                E::action(
                    "revert_file",
                    "Revert File",
                    Some("CmdOrCtrl+Alt+Z"),
                    MenuAction::RevertFile,
                ),
                E::action(
                    "close_all_files",
                    "Close All Files",
                    Some("CmdOrCtrl+Shift+Q"),
                    MenuAction::CloseAllFiles,
                ),
                E::Separator,
                E::action("quit", "Exit", Some("CmdOrCtrl+Q"), MenuAction::Quit),
            ],
        );

        let edit = E::submenu(
            "Edit",
            vec![
                E::role("Undo", "CmdOrCtrl+Z", Role::Undo),
                E::role("Redo", "CmdOrCtrl+Shift+Z", Role::Redo),
                E::Separator,
                E::role("Cut", "CmdOrCtrl+X", Role::Cut),
                E::role("Copy", "CmdOrCtrl+C", Role::Copy),
                E::role("Paste", "CmdOrCtrl+V", Role::Paste),
                E::role("Select All", "CmdOrCtrl+A", Role::SelectAll),
            ],
        );

        let view = E::submenu(
            "View",
            vec![
                E::action("reload", "Reload", Some("CmdOrCtrl+R"), MenuAction::Reload),
                E::action(
                    "toggle_devtools",
                    "Toggle DevTools",
                    Some("CmdOrCtrl+Shift+I"),
                    MenuAction::ToggleDevTools,
                ),
                E::Separator,
                E::action("zoom_in", "Zoom In", Some("CmdOrCtrl+="), MenuAction::ZoomIn),
                E::action("zoom_out", "Zoom Out", Some("CmdOrCtrl+-"), MenuAction::ZoomOut),
                E::action("reset_zoom", "Reset Zoom", Some("CmdOrCtrl+0"), MenuAction::ResetZoom),
            ],
        );

        let help = E::submenu(
            "Help",
            vec![E::action("about", "About Luny Text", None, MenuAction::About)],
        );

        Self {
            entries: vec![file, edit, view, help],
        }
    }

    /// All action leaves, depth-first in menu order.
    pub fn actions(&self) -> Vec<&ActionItem> {
        fn collect<'a>(entries: &'a [MenuEntry], out: &mut Vec<&'a ActionItem>) {
            for entry in entries {
                match entry {
                    MenuEntry::Action(item) => out.push(item),
                    MenuEntry::Submenu { entries, .. } => collect(entries, out),
                    MenuEntry::Role(_) | MenuEntry::Separator => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.entries, &mut out);
        out
    }

    /// All role leaves, depth-first in menu order.
    pub fn roles(&self) -> Vec<&RoleItem> {
        fn collect<'a>(entries: &'a [MenuEntry], out: &mut Vec<&'a RoleItem>) {
            for entry in entries {
                match entry {
                    MenuEntry::Role(item) => out.push(item),
                    MenuEntry::Submenu { entries, .. } => collect(entries, out),
                    MenuEntry::Action(_) | MenuEntry::Separator => {}
                }
            }
        }

        let mut out = Vec::new();
        collect(&self.entries, &mut out);
        out
    }

    /// Find the leaf bound to `action`.
    pub fn find_action(&self, action: MenuAction) -> Option<&ActionItem> {
        self.actions().into_iter().find(|item| item.action == action)
    }

    /// Check the template for problems a host would otherwise hit while
    /// binding it: unparseable accelerators, accelerators bound twice, and
    /// duplicate item ids. Every problem is logged and returned.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut seen_accels: HashMap<Accelerator, &'static str> = HashMap::new();
        let mut seen_ids: HashSet<&'static str> = HashSet::new();

        let mut check_accel = |label: &'static str, accel: Option<&'static str>| {
            let Some(raw) = accel else { return };
            match parse_accelerator(raw) {
                Ok(parsed) => {
                    if let Some(previous) = seen_accels.insert(parsed, label) {
                        problems.push(format!(
                            "accelerator {} bound to both '{}' and '{}'",
                            parsed, previous, label
                        ));
                    }
                }
                Err(e) => problems.push(format!("'{}': {}", label, e)),
            }
        };

        let actions = self.actions();
        for item in &actions {
            check_accel(item.label, item.accelerator);
        }
        for item in self.roles() {
            check_accel(item.label, item.accelerator);
        }
        for item in &actions {
            if !seen_ids.insert(item.id) {
                problems.push(format!("duplicate menu id '{}'", item.id));
            }
        }

        for problem in &problems {
            log::warn!("Menu template: {}", problem);
        }
        problems
    }
}

impl Default for MenuTemplate {
    fn default() -> Self {
        Self::application()
    }
}
