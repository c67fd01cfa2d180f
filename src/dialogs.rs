//! Native file and message dialogs.
//!
//! The [`Dialogs`] trait is the seam between the file flows and the OS:
//! [`NativeDialogs`] shows real `rfd` dialogs parented to a window, tests
//! substitute a scripted implementation. Every method resolves when the
//! user closes the dialog; `None` means the dialog was cancelled.

use rfd::{AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageLevel};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use winit::window::Window;

/// A named group of file extensions offered by open/save dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: String,
    /// Extensions without the leading dot
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// The filters used by the editor: plain text and markdown.
    pub fn text_and_markdown() -> Vec<Self> {
        vec![
            Self::new("Text Files", &["txt"]),
            Self::new("Markdown Files", &["md", "markdown"]),
        ]
    }
}

/// Asynchronous dialog provider
pub trait Dialogs: Send + Sync {
    /// Ask for one existing file
    fn pick_file(&self, filters: &[FileFilter]) -> impl Future<Output = Option<PathBuf>> + Send;

    /// Ask for one directory
    fn pick_folder(&self) -> impl Future<Output = Option<PathBuf>> + Send;

    /// Ask for a save target, suggesting `default_path` when given
    fn save_file(
        &self,
        filters: &[FileFilter],
        default_path: Option<&Path>,
    ) -> impl Future<Output = Option<PathBuf>> + Send;

    /// Show a blocking error message with a single OK button
    fn show_error(&self, title: &str, message: &str) -> impl Future<Output = ()> + Send;
}

/// Dialogs backed by the operating system through `rfd`
#[derive(Clone, Default)]
pub struct NativeDialogs {
    parent: Option<Arc<Window>>,
}

impl NativeDialogs {
    /// Dialogs that are modal to `parent` when one is given
    pub fn new(parent: Option<Arc<Window>>) -> Self {
        Self { parent }
    }

    fn file_dialog(&self, filters: &[FileFilter]) -> AsyncFileDialog {
        let mut dialog = AsyncFileDialog::new();
        for filter in filters {
            dialog = dialog.add_filter(filter.name.as_str(), filter.extensions.as_slice());
        }
        if let Some(parent) = &self.parent {
            dialog = dialog.set_parent(parent.as_ref());
        }
        dialog
    }
}

impl Dialogs for NativeDialogs {
    async fn pick_file(&self, filters: &[FileFilter]) -> Option<PathBuf> {
        let handle = self.file_dialog(filters).pick_file().await?;
        Some(handle.path().to_path_buf())
    }

    async fn pick_folder(&self) -> Option<PathBuf> {
        let handle = self.file_dialog(&[]).pick_folder().await?;
        Some(handle.path().to_path_buf())
    }

    async fn save_file(&self, filters: &[FileFilter], default_path: Option<&Path>) -> Option<PathBuf> {
        let mut dialog = self.file_dialog(filters);
        if let Some(path) = default_path {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                dialog = dialog.set_directory(dir);
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                dialog = dialog.set_file_name(name);
            }
        }
        let handle = dialog.save_file().await?;
        Some(handle.path().to_path_buf())
    }

    async fn show_error(&self, title: &str, message: &str) {
        let mut dialog = AsyncMessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok);
        if let Some(parent) = &self.parent {
            dialog = dialog.set_parent(parent.as_ref());
        }
        dialog.show().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters() {
        let filters = FileFilter::text_and_markdown();
        assert_eq!(filters[0].name, "Text Files");
        assert_eq!(filters[0].extensions, vec!["txt"]);
        assert_eq!(filters[1].name, "Markdown Files");
        assert_eq!(filters[1].extensions, vec!["md", "markdown"]);
    }
}
