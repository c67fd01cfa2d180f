//! Application module for Luny Text
//!
//! This module contains the main application logic, including:
//! - `App`: Entry point that initializes and runs the event loop
//! - `WindowManager`: Owns the windows, the menu and the registry
//! - `WindowRegistry`: Window kinds and ownership, active window, `AppContext`
//! - `WindowState`: Per-window state (winit window, webview, zoom)

use crate::cli::RuntimeOptions;
use crate::config::Config;
use crate::error::AppError;
use std::sync::Arc;
use tokio::runtime::Runtime;
use winit::event_loop::{ControlFlow, EventLoop};

pub mod context;
pub mod handler;
pub mod registry;
pub mod user_event;
pub mod window_manager;
pub mod window_spec;
pub mod window_state;
pub mod zoom;

pub use context::AppContext;
pub use registry::WindowRegistry;
pub use user_event::UserEvent;
pub use window_manager::WindowManager;

/// Main application entry point
pub struct App {
    config: Config,
    runtime: Arc<Runtime>,
}

impl App {
    /// Create a new application
    pub fn new(runtime: Arc<Runtime>, runtime_options: RuntimeOptions) -> Self {
        let config = Config::from_runtime_options(&runtime_options);
        Self { config, runtime }
    }

    /// Run the application until the last window closes
    pub fn run(self) -> Result<(), AppError> {
        // wry drives WebKitGTK on Linux, which needs GTK up before any webview
        #[cfg(target_os = "linux")]
        gtk::init()?;

        let event_loop = EventLoop::<UserEvent>::with_user_event().build()?;
        // Use Wait for power-efficient event handling
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut window_manager =
            WindowManager::new(self.config, self.runtime, event_loop.create_proxy());

        event_loop.run_app(&mut window_manager)?;

        Ok(())
    }
}
