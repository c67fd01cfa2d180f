//! Menu action definitions for Luny Text
//!
//! This module defines the `MenuAction` enum that represents every action
//! the application menu can trigger, plus the native roles that are
//! delegated to the host toolkit.

use std::fmt;

/// Encodings offered by the "Reopen with Encoding" submenu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Utf8,
    Iso8859_1,
}

impl Encoding {
    pub fn label(self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Iso8859_1 => "ISO-8859-1",
        }
    }
}

/// Actions that can be triggered from the menu system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    // File menu
    /// Ask the renderer for an empty untitled document
    NewFile,
    /// Pick a text/markdown file, read it and hand it to the renderer
    OpenFile,
    /// Pick a directory and hand its path to the renderer
    OpenFolder,
    /// Open a recent file by 1-based slot (not yet implemented)
    OpenRecent(usize),
    /// Reopen the current file with another encoding (not yet implemented)
    ReopenWithEncoding(Encoding),
    /// Pick a save target and ask the renderer to write to it
    SaveAs,
    /// Ask the renderer to persist every open document
    SaveAll,
    /// Print the active window
    Print,
    /// Create another editor window
    NewWindow,
    /// Close the active window
    CloseWindow,
    /// Ask the renderer to close the active document
    CloseFile,
    /// Discard unsaved changes (not yet implemented)
    RevertFile,
    /// Ask the renderer to close every document
    CloseAllFiles,
    /// Quit the application
    Quit,

    // View menu
    Reload,
    ToggleDevTools,
    ZoomIn,
    ZoomOut,
    ResetZoom,

    // Help menu
    /// Show the about window
    About,
}

impl MenuAction {
    /// Whether this action is an inert placeholder that only emits a trace.
    pub fn is_stub(&self) -> bool {
        matches!(
            self,
            MenuAction::OpenRecent(_) | MenuAction::ReopenWithEncoding(_) | MenuAction::RevertFile
        )
    }

    /// Diagnostic line emitted when a stub action fires.
    pub fn stub_trace(&self) -> Option<String> {
        match self {
            MenuAction::OpenRecent(slot) => Some(format!("Open Recent File {}", slot)),
            MenuAction::ReopenWithEncoding(encoding) => {
                Some(format!("Reopen with Encoding: {}", encoding.label()))
            }
            MenuAction::RevertFile => Some("Revert File".to_string()),
            _ => None,
        }
    }
}

/// Built-in editing capabilities provided by the host toolkit.
///
/// These are never reimplemented; the host maps each role onto its own
/// predefined menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    SelectAll,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Undo => "undo",
            Role::Redo => "redo",
            Role::Cut => "cut",
            Role::Copy => "copy",
            Role::Paste => "paste",
            Role::SelectAll => "selectAll",
        };
        f.write_str(name)
    }
}
