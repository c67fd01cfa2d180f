// Library exports for testing and potential library use
//
// The binary in `main.rs` is a thin wrapper: it parses the command line,
// installs the log bridge and hands control to `app::App`.
//
// Threading: everything that touches a window, the webview or `AppContext`
// runs on the event-loop thread. Dialogs and file reads run on the shared
// tokio runtime and report back through `UserEvent`s.

/// Application version (root crate version).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod config;
pub mod debug;
pub mod dialogs;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod menu;
pub mod notification;
