//! Typed error types for the Luny Text shell.
//!
//! None of these reach the user: the only user-visible failure is the
//! "file unreadable" dialog raised by the open-file flow. Everything here is
//! logged where it happens, except event-loop failures which end the
//! process.

use thiserror::Error;

/// Top-level error type for the application shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// The winit event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create a window.
    #[error("window creation failed: {0}")]
    WindowCreation(#[from] winit::error::OsError),

    /// A raw window handle was not available (e.g. for parenting).
    #[error("window handle unavailable: {0}")]
    WindowHandle(#[from] raw_window_handle::HandleError),

    /// The webview could not be created or rejected a call.
    #[error("webview error: {0}")]
    Webview(#[from] wry::Error),

    /// The native menu could not be built or attached.
    #[error("menu error: {0}")]
    Menu(#[from] muda::Error),

    /// GTK could not be initialised (Linux only).
    #[cfg(target_os = "linux")]
    #[error("GTK initialisation failed: {0}")]
    Gtk(#[from] gtk::glib::BoolError),
}
