//! `ApplicationHandler` impl for `WindowManager`.
//!
//! Implements the winit `ApplicationHandler` trait: `resumed`, `window_event`,
//! `user_event`, and the top-level `about_to_wait` coordinator.

use crate::app::user_event::UserEvent;
use crate::app::window_manager::WindowManager;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

impl ApplicationHandler<UserEvent> for WindowManager {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Create the first window on app start only; closing every window
        // ends the process rather than waiting for a new resume.
        if !self.started {
            self.started = true;
            if self.create_window(event_loop).is_none() {
                log::error!("Could not open the first editor window, exiting");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.close_window(window_id);
            }
            WindowEvent::Focused(true) => {
                self.registry.focused(window_id);
            }
            WindowEvent::Destroyed => {
                // The OS destroyed a window we still track
                if self.get_window(window_id).is_some() {
                    self.close_window(window_id);
                }
            }
            _ => {}
        }

        // Exit if no windows remain
        if self.should_exit() {
            event_loop.exit();
        }
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::FlowCompleted { window, completion } => {
                self.handle_flow_completed(window, completion);
            }
            UserEvent::KeyDown { window, chord } => {
                self.handle_key_down(window, chord, event_loop);
            }
        }

        if self.should_exit() {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Process menu events
        self.process_menu_events(event_loop);

        // GTK backs the webviews on Linux and has its own event queue
        #[cfg(target_os = "linux")]
        {
            while gtk::events_pending() {
                gtk::main_iteration_do(false);
            }
            let next_wake = std::time::Instant::now() + std::time::Duration::from_millis(16);
            event_loop.set_control_flow(ControlFlow::WaitUntil(next_wake));
        }

        #[cfg(not(target_os = "linux"))]
        event_loop.set_control_flow(ControlFlow::Wait);

        // Exit if no windows remain
        if self.should_exit() {
            event_loop.exit();
        }
    }
}
