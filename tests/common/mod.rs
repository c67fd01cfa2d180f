//! Shared integration test helpers for luny-text.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{FakeDialogs, DialogCall};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use luny_text::dialogs::{Dialogs, FileFilter};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One call made against [`FakeDialogs`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogCall {
    PickFile {
        filters: Vec<FileFilter>,
    },
    PickFolder,
    SaveFile {
        filters: Vec<FileFilter>,
        default_path: Option<PathBuf>,
    },
    ShowError {
        title: String,
        message: String,
    },
}

/// Scripted dialogs: each picker returns its preset answer (`None` means
/// the user cancelled) and every call is recorded.
#[derive(Default)]
pub struct FakeDialogs {
    file: Option<PathBuf>,
    folder: Option<PathBuf>,
    save_target: Option<PathBuf>,
    calls: Mutex<Vec<DialogCall>>,
}

impl FakeDialogs {
    /// Every dialog is cancelled
    pub fn cancelling() -> Self {
        Self::default()
    }

    pub fn picking_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn picking_folder(path: impl Into<PathBuf>) -> Self {
        Self {
            folder: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn saving_to(path: impl Into<PathBuf>) -> Self {
        Self {
            save_target: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<DialogCall> {
        self.calls.lock().clone()
    }

    /// Error dialogs shown so far as (title, message)
    pub fn errors(&self) -> Vec<(String, String)> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                DialogCall::ShowError { title, message } => Some((title.clone(), message.clone())),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: DialogCall) {
        self.calls.lock().push(call);
    }
}

impl Dialogs for FakeDialogs {
    async fn pick_file(&self, filters: &[FileFilter]) -> Option<PathBuf> {
        self.record(DialogCall::PickFile {
            filters: filters.to_vec(),
        });
        self.file.clone()
    }

    async fn pick_folder(&self) -> Option<PathBuf> {
        self.record(DialogCall::PickFolder);
        self.folder.clone()
    }

    async fn save_file(&self, filters: &[FileFilter], default_path: Option<&Path>) -> Option<PathBuf> {
        self.record(DialogCall::SaveFile {
            filters: filters.to_vec(),
            default_path: default_path.map(Path::to_path_buf),
        });
        self.save_target.clone()
    }

    async fn show_error(&self, title: &str, message: &str) {
        self.record(DialogCall::ShowError {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

/// Write `contents` to `name` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for the duration of the test.
pub fn temp_file(name: &str, contents: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    (temp_dir, path)
}
