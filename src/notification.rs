//! One-way notifications from the shell to the renderer.
//!
//! A notification is delivered by evaluating a small script in the window's
//! document that dispatches a DOM `CustomEvent` named [`IPC_EVENT`]. The
//! event detail is `{ "channel": <name>, "args": [<payload>...] }`.
//! There is no reply channel.

use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Name of the DOM event the renderer listens for
pub const IPC_EVENT: &str = "luny-ipc";

/// Messages the renderer understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Create an empty untitled document
    NewFile,
    /// Open a document with the given text
    OpenFile { path: PathBuf, contents: String },
    /// Present the contents of a folder
    OpenFolder { path: PathBuf },
    /// Write the current document to `path`
    SaveFileAs { path: PathBuf },
    /// Persist every open document
    SaveAll,
    /// Close the active document
    CloseFile,
    /// Close every open document
    CloseAllFiles,
}

#[derive(Serialize)]
struct IpcMessage<'a> {
    channel: &'a str,
    args: Vec<Value>,
}

fn path_value(path: &Path) -> Value {
    Value::String(path.to_string_lossy().into_owned())
}

impl Notification {
    /// Channel name seen by the renderer
    pub fn channel(&self) -> &'static str {
        match self {
            Notification::NewFile => "new-file",
            Notification::OpenFile { .. } => "open-file",
            Notification::OpenFolder { .. } => "open-folder",
            Notification::SaveFileAs { .. } => "save-file-as",
            Notification::SaveAll => "save-all",
            Notification::CloseFile => "close-file",
            Notification::CloseAllFiles => "close-all-files",
        }
    }

    /// Positional payload, empty for pass-through notifications
    pub fn args(&self) -> Vec<Value> {
        match self {
            Notification::OpenFile { path, contents } => {
                vec![path_value(path), Value::String(contents.clone())]
            }
            Notification::OpenFolder { path } | Notification::SaveFileAs { path } => {
                vec![path_value(path)]
            }
            Notification::NewFile
            | Notification::SaveAll
            | Notification::CloseFile
            | Notification::CloseAllFiles => Vec::new(),
        }
    }

    /// Path carried by the notification, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Notification::OpenFile { path, .. }
            | Notification::OpenFolder { path }
            | Notification::SaveFileAs { path } => Some(path),
            _ => None,
        }
    }

    /// Script that raises this notification inside the renderer document.
    pub fn to_script(&self) -> Result<String, serde_json::Error> {
        let detail = serde_json::to_string(&IpcMessage {
            channel: self.channel(),
            args: self.args(),
        })?;
        let event = serde_json::to_string(IPC_EVENT)?;
        Ok(format!(
            "window.dispatchEvent(new CustomEvent({}, {{ detail: {} }}));",
            event, detail
        ))
    }
}
