//! Multi-window manager for the editor
//!
//! This module contains `WindowManager`, which owns every window, the native
//! menu and the `WindowRegistry` holding the shared `AppContext`.
//!
//! The implementation is split across sub-modules:
//! - `window_lifecycle`: editor/about window creation and destruction
//! - `menu_actions`: menu and shortcut dispatch, file flow completion

mod menu_actions;
mod window_lifecycle;

use crate::app::registry::WindowRegistry;
use crate::app::user_event::UserEvent;
use crate::app::window_state::WindowState;
use crate::config::Config;
use crate::menu::MenuManager;
use crate::menu::shortcuts::CMD_IS_META;
use luny_text_menu::{MenuTemplate, ShortcutMap};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::event_loop::EventLoopProxy;
use winit::window::WindowId;

/// Manages editor windows and shared resources
pub struct WindowManager {
    /// Per-window state indexed by window ID
    pub(crate) windows: HashMap<WindowId, WindowState>,
    /// Window kinds, ownership, active window and exit flag
    pub(crate) registry: WindowRegistry,
    /// Native menu manager
    pub(crate) menu: Option<MenuManager>,
    /// Menu accelerators for keydowns forwarded by documents
    pub(crate) shortcuts: ShortcutMap,
    /// Shared configuration
    pub(crate) config: Config,
    /// Shared async runtime for dialogs and file reads
    pub(crate) runtime: Arc<Runtime>,
    /// Posts flow completions and shortcuts back to the event loop
    pub(crate) proxy: EventLoopProxy<UserEvent>,
    /// Whether the first window has been created
    pub(crate) started: bool,
}

impl WindowManager {
    /// Create a new window manager
    pub fn new(config: Config, runtime: Arc<Runtime>, proxy: EventLoopProxy<UserEvent>) -> Self {
        Self {
            windows: HashMap::new(),
            registry: WindowRegistry::new(),
            menu: None,
            shortcuts: ShortcutMap::from_template(&MenuTemplate::application(), CMD_IS_META),
            config,
            runtime,
            proxy,
            started: false,
        }
    }

    /// Get reference to a window's state
    pub fn get_window(&self, window_id: WindowId) -> Option<&WindowState> {
        self.windows.get(&window_id)
    }

    pub fn should_exit(&self) -> bool {
        self.registry.should_exit()
    }
}
