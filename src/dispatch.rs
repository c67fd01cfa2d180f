//! Menu action dispatch.
//!
//! [`route`] is the static table that decides what a menu action does. File
//! actions become a [`FileFlow`], which runs on the tokio runtime, talks to
//! the user through [`Dialogs`] and ends in an optional [`Completion`]. The
//! completion is applied on the event-loop thread, see
//! [`AppContext::complete`](crate::app::context::AppContext::complete).

use crate::dialogs::{Dialogs, FileFilter};
use crate::notification::Notification;
use luny_text_menu::MenuAction;
use std::path::PathBuf;

/// Title of the dialog shown when a selected file cannot be read
pub const READ_ERROR_TITLE: &str = "Error";
/// Message of the dialog shown when a selected file cannot be read
pub const READ_ERROR_MESSAGE: &str = "Failed to read the file";

/// Calls made against a single window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowCommand {
    Reload,
    ToggleDevTools,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Print,
    Close,
}

/// What a menu action resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Send a notification straight to the active window's renderer
    Notify(Notification),
    /// Show a dialog and act on its result
    FileFlow(FileFlow),
    /// Call into the active window
    Window(WindowCommand),
    NewWindow,
    About,
    Quit,
    /// Placeholder: log the trace line and do nothing else
    Stub(String),
}

/// Resolve a menu action.
pub fn route(action: MenuAction) -> Route {
    match action {
        MenuAction::NewFile => Route::Notify(Notification::NewFile),
        MenuAction::SaveAll => Route::Notify(Notification::SaveAll),
        MenuAction::CloseFile => Route::Notify(Notification::CloseFile),
        MenuAction::CloseAllFiles => Route::Notify(Notification::CloseAllFiles),
        MenuAction::OpenFile => Route::FileFlow(FileFlow::OpenFile),
        MenuAction::OpenFolder => Route::FileFlow(FileFlow::OpenFolder),
        MenuAction::SaveAs => Route::FileFlow(FileFlow::SaveAs),
        MenuAction::Print => Route::Window(WindowCommand::Print),
        MenuAction::CloseWindow => Route::Window(WindowCommand::Close),
        MenuAction::Reload => Route::Window(WindowCommand::Reload),
        MenuAction::ToggleDevTools => Route::Window(WindowCommand::ToggleDevTools),
        MenuAction::ZoomIn => Route::Window(WindowCommand::ZoomIn),
        MenuAction::ZoomOut => Route::Window(WindowCommand::ZoomOut),
        MenuAction::ResetZoom => Route::Window(WindowCommand::ResetZoom),
        MenuAction::NewWindow => Route::NewWindow,
        MenuAction::About => Route::About,
        MenuAction::Quit => Route::Quit,
        MenuAction::OpenRecent(_) | MenuAction::ReopenWithEncoding(_) | MenuAction::RevertFile => {
            Route::Stub(action.stub_trace().unwrap_or_default())
        }
    }
}

/// Result of a file flow that the user did not cancel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// A file was picked and read; invalid UTF-8 is replaced with U+FFFD
    FileOpened { path: PathBuf, contents: String },
    FolderChosen(PathBuf),
    SaveTargetChosen(PathBuf),
}

impl Completion {
    /// Notification the renderer receives for this completion
    pub fn notification(&self) -> Notification {
        match self {
            Completion::FileOpened { path, contents } => Notification::OpenFile {
                path: path.clone(),
                contents: contents.clone(),
            },
            Completion::FolderChosen(path) => Notification::OpenFolder { path: path.clone() },
            Completion::SaveTargetChosen(path) => Notification::SaveFileAs { path: path.clone() },
        }
    }

    /// New value for the current file path, if this completion sets one
    pub fn current_path(&self) -> Option<&PathBuf> {
        match self {
            Completion::FileOpened { path, .. } | Completion::SaveTargetChosen(path) => Some(path),
            Completion::FolderChosen(_) => None,
        }
    }
}

/// Dialog-driven file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFlow {
    OpenFile,
    OpenFolder,
    SaveAs,
}

impl FileFlow {
    /// Run the flow to completion.
    ///
    /// `current` is the current file path at the time the action was
    /// invoked; it only seeds the save dialog. Returns `None` when the user
    /// cancelled or the selected file could not be read. In the latter case
    /// one error dialog has already been shown. Contents that are not valid
    /// UTF-8 are decoded lossily rather than rejected.
    pub async fn run<D: Dialogs>(
        self,
        dialogs: &D,
        filters: &[FileFilter],
        current: Option<PathBuf>,
    ) -> Option<Completion> {
        match self {
            FileFlow::OpenFile => {
                let path = dialogs.pick_file(filters).await?;
                match tokio::fs::read(&path).await {
                    Ok(bytes) => {
                        let contents = decode_utf8_lossy(bytes, &path);
                        Some(Completion::FileOpened { path, contents })
                    }
                    Err(e) => {
                        log::warn!("Failed to read {}: {}", path.display(), e);
                        dialogs.show_error(READ_ERROR_TITLE, READ_ERROR_MESSAGE).await;
                        None
                    }
                }
            }
            FileFlow::OpenFolder => dialogs.pick_folder().await.map(Completion::FolderChosen),
            FileFlow::SaveAs => {
                let path = dialogs.save_file(filters, current.as_deref()).await?;
                if path.as_os_str().is_empty() {
                    log::debug!("Save dialog returned an empty path, treating as cancel");
                    return None;
                }
                Some(Completion::SaveTargetChosen(path))
            }
        }
    }
}

fn decode_utf8_lossy(bytes: Vec<u8>, path: &std::path::Path) -> String {
    match String::from_utf8(bytes) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8, replacing invalid sequences",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luny_text_menu::Encoding;

    #[test]
    fn test_pass_through_routes() {
        assert_eq!(route(MenuAction::NewFile), Route::Notify(Notification::NewFile));
        assert_eq!(route(MenuAction::SaveAll), Route::Notify(Notification::SaveAll));
        assert_eq!(
            route(MenuAction::CloseFile),
            Route::Notify(Notification::CloseFile)
        );
        assert_eq!(
            route(MenuAction::CloseAllFiles),
            Route::Notify(Notification::CloseAllFiles)
        );
    }

    #[test]
    fn test_stub_routes_carry_trace() {
        assert_eq!(
            route(MenuAction::OpenRecent(2)),
            Route::Stub("Open Recent File 2".to_string())
        );
        assert_eq!(
            route(MenuAction::ReopenWithEncoding(Encoding::Iso8859_1)),
            Route::Stub("Reopen with Encoding: ISO-8859-1".to_string())
        );
        assert_eq!(
            route(MenuAction::RevertFile),
            Route::Stub("Revert File".to_string())
        );
    }

    #[test]
    fn test_window_routes() {
        assert_eq!(
            route(MenuAction::Print),
            Route::Window(WindowCommand::Print)
        );
        assert_eq!(
            route(MenuAction::CloseWindow),
            Route::Window(WindowCommand::Close)
        );
        assert_eq!(
            route(MenuAction::ResetZoom),
            Route::Window(WindowCommand::ResetZoom)
        );
    }

    #[test]
    fn test_completion_notifications() {
        let opened = Completion::FileOpened {
            path: PathBuf::from("/tmp/a.md"),
            contents: "hello".to_string(),
        };
        assert_eq!(
            opened.notification(),
            Notification::OpenFile {
                path: PathBuf::from("/tmp/a.md"),
                contents: "hello".to_string(),
            }
        );
        assert_eq!(opened.current_path(), Some(&PathBuf::from("/tmp/a.md")));

        let folder = Completion::FolderChosen(PathBuf::from("/tmp"));
        assert_eq!(folder.current_path(), None);
        assert_eq!(folder.notification().channel(), "open-folder");
    }
}
