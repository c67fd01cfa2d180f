//! Shared application state.
//!
//! `AppContext` is owned by the window manager and only touched on the
//! event-loop thread, so it needs no locking.

use crate::dispatch::Completion;
use crate::notification::Notification;
use std::path::{Path, PathBuf};
use winit::window::WindowId;

#[derive(Debug, Default)]
pub struct AppContext {
    /// Editor window that menu actions target
    active_window: Option<WindowId>,
    /// Last file opened or saved-as; seeds the next save dialog
    current_file_path: Option<PathBuf>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    pub fn set_active_window(&mut self, window_id: WindowId) {
        if self.active_window != Some(window_id) {
            log::debug!("Active window is now {:?}", window_id);
        }
        self.active_window = Some(window_id);
    }

    /// Forget `window_id` if it was the active window
    pub fn window_closed(&mut self, window_id: WindowId) {
        if self.active_window == Some(window_id) {
            self.active_window = None;
        }
    }

    pub fn current_file_path(&self) -> Option<&Path> {
        self.current_file_path.as_deref()
    }

    /// Apply a finished file flow and return the notification to deliver.
    ///
    /// Opening a file or choosing a save target records the path; choosing
    /// a folder leaves it alone.
    pub fn complete(&mut self, completion: Completion) -> Notification {
        if let Some(path) = completion.current_path() {
            log::debug!("Current file path set to {}", path.display());
            self.current_file_path = Some(path.clone());
        }
        completion.notification()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let ctx = AppContext::new();
        assert!(ctx.active_window().is_none());
        assert!(ctx.current_file_path().is_none());
    }

    #[test]
    fn test_closing_other_window_keeps_active() {
        let mut ctx = AppContext::new();
        let first = WindowId::from(1u64);
        let second = WindowId::from(2u64);
        ctx.set_active_window(first);
        ctx.window_closed(second);
        assert_eq!(ctx.active_window(), Some(first));
        ctx.window_closed(first);
        assert_eq!(ctx.active_window(), None);
    }

    #[test]
    fn test_folder_does_not_touch_current_path() {
        let mut ctx = AppContext::new();
        ctx.complete(Completion::SaveTargetChosen(PathBuf::from("/tmp/out.md")));
        let notification = ctx.complete(Completion::FolderChosen(PathBuf::from("/tmp")));
        assert_eq!(
            notification,
            Notification::OpenFolder {
                path: PathBuf::from("/tmp")
            }
        );
        assert_eq!(ctx.current_file_path(), Some(Path::new("/tmp/out.md")));
    }
}
