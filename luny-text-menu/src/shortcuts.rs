//! Keyboard shortcuts resolved from the menu template.
//!
//! Hosts that cannot attach a native menu still need the template's
//! accelerators to work. [`ShortcutMap`] resolves every action accelerator
//! against the platform's `CmdOrCtrl` meaning and looks up key presses
//! reported as [`KeyChord`]s.

use crate::accelerator::{Accelerator, Key};
use crate::action::MenuAction;
use crate::template::MenuTemplate;
use std::collections::HashMap;

/// A concrete key press: the modifiers actually held plus the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    /// Cmd on macOS, the Windows/Super key elsewhere
    pub meta: bool,
    pub key: Key,
}

impl Accelerator {
    /// The key press that triggers this accelerator. `cmd_is_meta` picks
    /// what `CmdOrCtrl` means: Meta on macOS, Ctrl elsewhere.
    pub fn resolve(&self, cmd_is_meta: bool) -> KeyChord {
        let m = self.modifiers;
        KeyChord {
            ctrl: m.ctrl || (m.cmd_or_ctrl && !cmd_is_meta),
            alt: m.alt,
            shift: m.shift,
            meta: m.super_key || (m.cmd_or_ctrl && cmd_is_meta),
            key: self.key,
        }
    }
}

impl Key {
    /// Parse a physical key code as reported by DOM `KeyboardEvent.code`
    /// (`KeyS`, `Digit0`, `Equal`, `Minus`, `F12`).
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "Equal" => return Some(Key::Equal),
            "Minus" => return Some(Key::Minus),
            _ => {}
        }
        if let Some(letter) = code.strip_prefix("Key") {
            let mut chars = letter.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => {
                    Some(Key::Letter(c.to_ascii_uppercase()))
                }
                _ => None,
            };
        }
        if let Some(digit) = code.strip_prefix("Digit") {
            return digit.parse::<u8>().ok().filter(|d| *d <= 9).map(Key::Digit);
        }
        code.strip_prefix('F')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=24).contains(n))
            .map(Key::Function)
    }
}

/// Action accelerators of a template, keyed by the key press that fires them.
///
/// Role accelerators are left out: roles are carried out by the document
/// itself.
#[derive(Debug, Default)]
pub struct ShortcutMap {
    bindings: HashMap<KeyChord, MenuAction>,
}

impl ShortcutMap {
    /// Resolve every action accelerator in `template`.
    ///
    /// Unparseable accelerators are logged and skipped; when two entries
    /// share a key press the first one in menu order wins.
    pub fn from_template(template: &MenuTemplate, cmd_is_meta: bool) -> Self {
        let mut bindings = HashMap::new();
        for item in template.actions() {
            match item.parsed_accelerator() {
                Some(Ok(accel)) => {
                    bindings.entry(accel.resolve(cmd_is_meta)).or_insert(item.action);
                }
                Some(Err(e)) => {
                    log::warn!("Skipping shortcut of '{}': {}", item.label, e);
                }
                None => {}
            }
        }
        log::debug!("Resolved {} keyboard shortcuts", bindings.len());
        Self { bindings }
    }

    /// Action fired by `chord`, if any
    pub fn lookup(&self, chord: &KeyChord) -> Option<MenuAction> {
        self.bindings.get(chord).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
