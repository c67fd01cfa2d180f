//! Application menu model for Luny Text.
//!
//! This crate describes the editor's menu as plain data so it can be built,
//! inspected and tested without a UI toolkit.
//!
//! Features:
//! - Declarative menu tree (actions, roles, submenus, separators)
//! - Typed menu actions, including the inert stub entries
//! - Portable accelerator notation ("CmdOrCtrl+Shift+S")
//! - Shortcut lookup for hosts without a native menu bar

pub mod accelerator;
mod action;
mod shortcuts;
mod template;

pub use accelerator::{Accelerator, Key, Modifiers, ParseError, parse_accelerator};
pub use action::{Encoding, MenuAction, Role};
pub use shortcuts::{KeyChord, ShortcutMap};
pub use template::{ActionItem, MenuEntry, MenuTemplate, RoleItem};
