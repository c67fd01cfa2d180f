//! Keyboard shortcuts forwarded by the editor document.
//!
//! Where the native menu bar cannot be attached, the document posts every
//! modified keydown over the webview IPC channel. The message is decoded
//! into a [`KeyChord`] here and looked up in the template's
//! [`ShortcutMap`](luny_text_menu::ShortcutMap) on the event-loop thread.

use luny_text_menu::{Key, KeyChord};
use serde::Deserialize;

/// `CmdOrCtrl` means Cmd on macOS
pub const CMD_IS_META: bool = cfg!(target_os = "macos");

/// Whether documents forward their shortcuts. Where the menu bar is
/// attached, the native menu fires accelerators itself.
pub const DOCUMENT_SHORTCUTS: bool = !cfg!(any(target_os = "macos", target_os = "windows"));

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum IpcMessage {
    Keydown {
        code: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        meta: bool,
    },
}

/// Decode an IPC message body into a key press.
///
/// Returns `None` for malformed messages and keys no accelerator can use.
pub fn parse_keydown(body: &str) -> Option<KeyChord> {
    let message: IpcMessage = match serde_json::from_str(body) {
        Ok(message) => message,
        Err(e) => {
            log::debug!("Ignoring IPC message {:?}: {}", body, e);
            return None;
        }
    };
    match message {
        IpcMessage::Keydown {
            code,
            ctrl,
            alt,
            shift,
            meta,
        } => Key::from_code(&code).map(|key| KeyChord {
            ctrl,
            alt,
            shift,
            meta,
            key,
        }),
    }
}
