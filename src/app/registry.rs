//! Window bookkeeping without the windowing system.
//!
//! `WindowRegistry` knows which windows exist, what kind they are, which
//! window each about window belongs to, and which editor is active. The
//! window manager mirrors every change here before touching winit or wry,
//! so lifecycle rules can be exercised without a display.

use crate::app::context::AppContext;
use crate::app::window_spec::WindowKind;
use crate::dispatch::Completion;
use crate::notification::Notification;
use winit::window::WindowId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEntry {
    pub id: WindowId,
    pub kind: WindowKind,
    /// Window this one was opened for; it closes along with it
    pub parent: Option<WindowId>,
}

#[derive(Debug, Default)]
pub struct WindowRegistry {
    /// Open windows in creation order
    entries: Vec<WindowEntry>,
    context: AppContext,
    should_exit: bool,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly opened window. Editor windows become active.
    pub fn insert(&mut self, id: WindowId, kind: WindowKind, parent: Option<WindowId>) {
        self.entries.push(WindowEntry { id, kind, parent });
        if kind == WindowKind::Editor {
            self.context.set_active_window(id);
        }
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A window gained focus; editors become the active window
    pub fn focused(&mut self, id: WindowId) {
        if let Some(entry) = self.get(id)
            && entry.kind == WindowKind::Editor
        {
            self.context.set_active_window(id);
        }
    }

    /// The window menu actions target.
    ///
    /// This is the active window; if none is recorded the oldest remaining
    /// editor window is used.
    pub fn target(&self) -> Option<WindowId> {
        if let Some(id) = self.context.active_window()
            && self.contains(id)
        {
            return Some(id);
        }
        self.entries
            .iter()
            .find(|entry| entry.kind == WindowKind::Editor)
            .map(|entry| entry.id)
    }

    /// The about window already open for `parent`
    pub fn about_for(&self, parent: Option<WindowId>) -> Option<WindowId> {
        self.entries
            .iter()
            .find(|entry| entry.kind == WindowKind::About && entry.parent == parent)
            .map(|entry| entry.id)
    }

    /// Forget `id` and every window opened for it.
    ///
    /// Returns the removed entries, children before their parent. Once the
    /// last window is gone the registry asks the event loop to exit.
    pub fn close(&mut self, id: WindowId) -> Vec<WindowEntry> {
        let mut closed = Vec::new();
        self.close_into(id, &mut closed);
        if self.is_empty() && !self.should_exit {
            log::info!("Last window closed, exiting application");
            self.should_exit = true;
        }
        closed
    }

    fn close_into(&mut self, id: WindowId, closed: &mut Vec<WindowEntry>) {
        let children: Vec<WindowId> = self
            .entries
            .iter()
            .filter(|entry| entry.parent == Some(id))
            .map(|entry| entry.id)
            .collect();
        for child in children {
            self.close_into(child, closed);
        }

        if let Some(pos) = self.entries.iter().position(|entry| entry.id == id) {
            closed.push(self.entries.remove(pos));
        }
        self.context.window_closed(id);
    }

    /// Forget every window and ask the event loop to exit
    pub fn close_all(&mut self) -> Vec<WindowEntry> {
        let mut closed = Vec::new();
        let roots: Vec<WindowId> = self
            .entries
            .iter()
            .filter(|entry| entry.parent.is_none())
            .map(|entry| entry.id)
            .collect();
        for id in roots {
            self.close_into(id, &mut closed);
        }
        // Anything left had a parent that is already gone
        let orphans: Vec<WindowId> = self.entries.iter().map(|entry| entry.id).collect();
        for id in orphans {
            self.close_into(id, &mut closed);
        }
        self.should_exit = true;
        closed
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Apply a finished flow started for `window`.
    ///
    /// The completion always updates the context. The notification comes
    /// back with its recipient, or with `None` when that window has closed
    /// in the meantime.
    pub fn complete(
        &mut self,
        window: WindowId,
        completion: Completion,
    ) -> (Notification, Option<WindowId>) {
        let notification = self.context.complete(completion);
        let recipient = self.contains(window).then_some(window);
        (notification, recipient)
    }
}
