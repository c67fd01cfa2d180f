//! Accelerator parser.
//!
//! Parses portable accelerator strings like "CmdOrCtrl+Shift+S" into
//! [`Accelerator`] values. The notation matches what menu templates are
//! written in; conversion to a concrete toolkit type happens in the host.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for accelerator parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty accelerator")]
    Empty,
    #[error("accelerator '{0}' ends with a modifier, no key specified")]
    MissingKey(String),
    #[error("multiple keys specified in accelerator '{0}'")]
    MultipleKeys(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Set of modifiers held for an accelerator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Cmd on macOS, Ctrl everywhere else
    pub cmd_or_ctrl: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !(self.cmd_or_ctrl || self.ctrl || self.alt || self.shift || self.super_key)
    }
}

/// The non-modifier part of an accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `A`-`Z`, always stored uppercase
    Letter(char),
    /// `0`-`9`
    Digit(u8),
    Equal,
    Minus,
    /// `F1`-`F24`
    Function(u8),
}

/// A parsed accelerator (modifiers + key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accelerator {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Letter(c) => write!(f, "{}", c),
            Key::Digit(d) => write!(f, "{}", d),
            Key::Equal => write!(f, "="),
            Key::Minus => write!(f, "-"),
            Key::Function(n) => write!(f, "F{}", n),
        }
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.cmd_or_ctrl {
            parts.push("CmdOrCtrl".to_string());
        }
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.super_key {
            parts.push("Super".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        parts.push(self.key.to_string());

        write!(f, "{}", parts.join("+"))
    }
}

impl FromStr for Accelerator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_accelerator(s)
    }
}

/// Parse an accelerator string.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers (case-insensitive):
/// - `CmdOrCtrl`, `CommandOrControl` - Cmd on macOS, Ctrl on other platforms
/// - `Ctrl`, `Control`
/// - `Alt`, `Option`
/// - `Shift`
/// - `Super`, `Cmd`, `Command`, `Meta`
///
/// Keys: single letters and digits, `=`, `-`, and `F1`-`F24`.
pub fn parse_accelerator(s: &str) -> Result<Accelerator, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = s.split('+').map(str::trim).collect();
    let mut modifiers = Modifiers::default();
    let mut key_part = None;

    for part in &parts {
        let is_modifier = match part.to_lowercase().as_str() {
            "cmdorctrl" | "commandorcontrol" => {
                modifiers.cmd_or_ctrl = true;
                true
            }
            "ctrl" | "control" => {
                modifiers.ctrl = true;
                true
            }
            "alt" | "option" => {
                modifiers.alt = true;
                true
            }
            "shift" => {
                modifiers.shift = true;
                true
            }
            "super" | "cmd" | "command" | "meta" => {
                modifiers.super_key = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError::MultipleKeys(s.to_string()));
            }
            key_part = Some(*part);
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError::MissingKey(s.to_string()))?;
    let key = parse_key(key_str)?;

    Ok(Accelerator { modifiers, key })
}

fn parse_key(s: &str) -> Result<Key, ParseError> {
    match s {
        "=" => return Ok(Key::Equal),
        "-" => return Ok(Key::Minus),
        _ => {}
    }

    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() {
            return Ok(Key::Letter(c.to_ascii_uppercase()));
        }
        if let Some(d) = c.to_digit(10) {
            return Ok(Key::Digit(d as u8));
        }
    }

    if let Some(n) = s
        .strip_prefix('F')
        .or_else(|| s.strip_prefix('f'))
        .and_then(|n| n.parse::<u8>().ok())
        && (1..=24).contains(&n)
    {
        return Ok(Key::Function(n));
    }

    Err(ParseError::UnknownKey(s.to_string()))
}
