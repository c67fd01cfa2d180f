//! Window creation and destruction.
//!
//! Editor windows become the active window when created. The about window
//! is owned by the active editor window and never becomes active itself.

use std::sync::Arc;

use luny_text_menu::MenuTemplate;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::app::registry::WindowEntry;
use crate::app::window_spec::{WindowKind, WindowSpec};
use crate::app::window_state::WindowState;
use crate::menu::MenuManager;
use crate::menu::shortcuts::DOCUMENT_SHORTCUTS;

use super::WindowManager;

impl WindowManager {
    /// Create a new editor window loading the index document
    pub fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Option<WindowId> {
        let spec = WindowSpec::editor(&self.config);
        let shortcuts = DOCUMENT_SHORTCUTS.then(|| self.proxy.clone());
        let window_state = match WindowState::create(event_loop, &spec, None, shortcuts) {
            Ok(ws) => ws,
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                return None;
            }
        };
        let window_id = window_state.id();

        if spec.attach_menu {
            self.attach_menu(window_state.window());
        }

        self.windows.insert(window_id, window_state);
        self.registry.insert(window_id, WindowKind::Editor, None);

        log::info!(
            "Created new window {:?} (total: {})",
            window_id,
            self.registry.len()
        );
        Some(window_id)
    }

    /// Build the menu on first use, then attach it to `window`
    fn attach_menu(&mut self, window: &Arc<Window>) {
        if self.menu.is_none() {
            let template = MenuTemplate::application();
            template.validate();
            match MenuManager::new(&template) {
                Ok(menu) => self.menu = Some(menu),
                Err(e) => {
                    log::warn!("Failed to create menu: {}", e);
                    return;
                }
            }
        }

        if let Some(menu) = &self.menu
            && let Err(e) = menu.init_for_window(window)
        {
            log::warn!("Failed to initialize menu for window: {}", e);
        }
    }

    /// Open the about window over the target editor window
    pub fn create_about_window(&mut self, event_loop: &ActiveEventLoop) -> Option<WindowId> {
        // Only one about window per owner
        let owner_id = self.registry.target();
        if let Some(existing) = self.registry.about_for(owner_id) {
            if let Some(ws) = self.windows.get(&existing) {
                ws.focus();
            }
            return Some(existing);
        }

        let spec = WindowSpec::about(&self.config);
        let owner = owner_id.and_then(|id| self.windows.get(&id));
        if owner.is_none() {
            log::warn!("No editor window to own the about window, opening it unowned");
        }

        let owner_window = owner.map(|ws| ws.window().as_ref());
        let window_state = match WindowState::create(event_loop, &spec, owner_window, None) {
            Ok(ws) => ws,
            Err(e) => {
                log::error!("Failed to create about window: {}", e);
                return None;
            }
        };
        let window_id = window_state.id();

        // Modal where the platform supports it
        if let Some(owner) = owner {
            owner.set_input_enabled(false);
        }
        self.windows.insert(window_id, window_state);
        self.registry.insert(window_id, WindowKind::About, owner_id);

        log::info!(
            "Opened about window {:?} (owner {:?})",
            window_id,
            owner_id
        );
        Some(window_id)
    }

    /// Close a window along with the windows it owns
    pub fn close_window(&mut self, window_id: WindowId) {
        let closed = self.registry.close(window_id);
        self.destroy(closed);
    }

    /// Close every window
    pub fn close_all_windows(&mut self) {
        let closed = self.registry.close_all();
        self.destroy(closed);
    }

    fn destroy(&mut self, closed: Vec<WindowEntry>) {
        for entry in closed {
            if let Some(owner) = entry.parent.and_then(|id| self.windows.get(&id)) {
                owner.set_input_enabled(true);
            }
            if let Some(window_state) = self.windows.remove(&entry.id) {
                log::info!(
                    "Closing window {:?} (remaining: {})",
                    entry.id,
                    self.windows.len()
                );
                // Hide window immediately for instant visual feedback
                window_state.hide();
                drop(window_state);
            }
        }
    }
}
