//! Menu action handling for the window manager.
//!
//! This module processes native menu events and forwarded shortcuts and
//! dispatches them through the routing table: notifications go straight to
//! the target window, file flows are spawned on the runtime and come back as
//! `UserEvent`s.

use std::sync::Arc;

use luny_text_menu::{KeyChord, MenuAction};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use crate::app::user_event::UserEvent;
use crate::dialogs::NativeDialogs;
use crate::dispatch::{Completion, FileFlow, Route, WindowCommand, route};
use crate::notification::Notification;

use super::WindowManager;

impl WindowManager {
    /// Handle a menu action
    pub fn handle_menu_action(&mut self, action: MenuAction, event_loop: &ActiveEventLoop) {
        let target = self.registry.target();
        log::debug!("Menu action {:?} (target window {:?})", action, target);

        match route(action) {
            Route::Notify(notification) => {
                if let Some(window_id) = target {
                    self.send_notification(window_id, &notification);
                } else {
                    log::warn!("No window to receive '{}'", notification.channel());
                }
            }
            Route::FileFlow(flow) => self.spawn_file_flow(flow, target),
            Route::Window(WindowCommand::Close) => {
                if let Some(window_id) = target {
                    self.close_window(window_id);
                }
            }
            Route::Window(command) => {
                if let Some(window_id) = target
                    && let Some(window_state) = self.windows.get_mut(&window_id)
                {
                    window_state.apply(command);
                }
            }
            Route::NewWindow => {
                self.create_window(event_loop);
            }
            Route::About => {
                self.create_about_window(event_loop);
            }
            Route::Quit => {
                self.close_all_windows();
            }
            Route::Stub(trace) => {
                log::info!("{}", trace);
            }
        }
    }

    /// Process any pending menu events
    pub fn process_menu_events(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(menu) = &self.menu {
            // Collect actions to avoid borrow conflicts
            let actions: Vec<_> = menu.poll_events().collect();
            for action in actions {
                self.handle_menu_action(action, event_loop);
            }
        }
    }

    /// Run the menu action bound to a key pressed in `window`'s document
    pub fn handle_key_down(
        &mut self,
        window_id: WindowId,
        chord: KeyChord,
        event_loop: &ActiveEventLoop,
    ) {
        let Some(action) = self.shortcuts.lookup(&chord) else {
            log::trace!("No shortcut bound to {:?}", chord);
            return;
        };
        // The key went to this window, so it is the one to act on
        self.registry.focused(window_id);
        self.handle_menu_action(action, event_loop);
    }

    /// Run a dialog flow on the runtime. The result is posted back as a
    /// `UserEvent::FlowCompleted` addressed to `target`.
    fn spawn_file_flow(&self, flow: FileFlow, target: Option<WindowId>) {
        let Some(window_id) = target else {
            log::warn!("No window to run {:?} against", flow);
            return;
        };

        let parent = self.windows.get(&window_id).map(|ws| Arc::clone(ws.window()));
        let dialogs = NativeDialogs::new(parent);
        let filters = self.config.file_filters.clone();
        let current = self
            .registry
            .context()
            .current_file_path()
            .map(|p| p.to_path_buf());
        let proxy = self.proxy.clone();

        self.runtime.spawn(async move {
            let Some(completion) = flow.run(&dialogs, &filters, current).await else {
                log::debug!("{:?} ended without a result", flow);
                return;
            };
            let event = UserEvent::FlowCompleted {
                window: window_id,
                completion,
            };
            if proxy.send_event(event).is_err() {
                log::warn!("Event loop closed before {:?} completed", flow);
            }
        });
    }

    /// Apply a finished flow on the UI thread and notify its window
    pub fn handle_flow_completed(&mut self, window_id: WindowId, completion: Completion) {
        let (notification, recipient) = self.registry.complete(window_id, completion);
        if let Some(window_id) = recipient {
            self.send_notification(window_id, &notification);
        } else {
            log::warn!(
                "Window {:?} closed before '{}' could be delivered",
                window_id,
                notification.channel()
            );
        }
    }

    fn send_notification(&self, window_id: WindowId, notification: &Notification) {
        if let Some(window_state) = self.windows.get(&window_id) {
            window_state.notify(notification);
        }
    }
}
