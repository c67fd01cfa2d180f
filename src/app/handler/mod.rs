//! Application event handler
//!
//! This module implements the winit `ApplicationHandler` trait for `WindowManager`,
//! routing window events, menu events, forwarded shortcuts and flow completions.
//!
//! ## Sub-modules
//!
//! - `app_handler_impl`: winit event loop entry points (`resumed`, `window_event`,
//!   `user_event`, `about_to_wait`).

mod app_handler_impl;
