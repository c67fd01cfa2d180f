//! Per-window state
//!
//! Each `WindowState` owns one winit window and the webview hosting its
//! document, plus the window's zoom level.

use crate::app::user_event::UserEvent;
use crate::app::window_spec::WindowSpec;
use crate::app::zoom::ZoomLevel;
use crate::dispatch::WindowCommand;
use crate::error::AppError;
use crate::menu::shortcuts::parse_keydown;
use crate::notification::Notification;
use std::sync::Arc;
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::window::{Window, WindowAttributes, WindowId};
use wry::{WebView, WebViewBuilder};

pub struct WindowState {
    // Field order matters: the webview must be dropped before its window.
    webview: WebView,
    window: Arc<Window>,
    zoom: ZoomLevel,
}

impl WindowState {
    /// Open a window described by `spec` and load its document.
    ///
    /// `owner` keeps the new window above another one. When `shortcuts` is
    /// given, keydowns the document forwards are posted to the event loop.
    pub fn create(
        event_loop: &ActiveEventLoop,
        spec: &WindowSpec,
        owner: Option<&Window>,
        shortcuts: Option<EventLoopProxy<UserEvent>>,
    ) -> Result<Self, AppError> {
        let mut attrs = spec.attributes();
        if let Some(owner) = owner {
            attrs = owned_by(attrs, owner)?;
        }

        let window = Arc::new(event_loop.create_window(attrs)?);

        let mut builder = WebViewBuilder::new()
            .with_html(spec.document.html())
            .with_devtools(true);
        if let Some(proxy) = shortcuts {
            let window_id = window.id();
            builder = builder.with_ipc_handler(move |request| {
                let Some(chord) = parse_keydown(request.body()) else {
                    return;
                };
                if proxy
                    .send_event(UserEvent::KeyDown {
                        window: window_id,
                        chord,
                    })
                    .is_err()
                {
                    log::debug!("Event loop gone, dropping {:?}", chord);
                }
            });
        }
        let webview = builder.build(window.as_ref())?;

        if spec.open_devtools {
            webview.open_devtools();
        }

        log::info!(
            "Loaded {} into window {:?}",
            spec.document.name(),
            window.id()
        );

        Ok(Self {
            webview,
            window,
            zoom: ZoomLevel::default(),
        })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Deliver a notification to the hosted document
    pub fn notify(&self, notification: &Notification) {
        let script = match notification.to_script() {
            Ok(script) => script,
            Err(e) => {
                log::error!("Failed to encode '{}': {}", notification.channel(), e);
                return;
            }
        };
        match self.webview.evaluate_script(&script) {
            Ok(()) => log::debug!(
                "Sent '{}' to window {:?}",
                notification.channel(),
                self.id()
            ),
            Err(e) => log::error!(
                "Failed to send '{}' to window {:?}: {}",
                notification.channel(),
                self.id(),
                e
            ),
        }
    }

    /// Run a window command. `Close` is owned by the window manager and
    /// ignored here.
    pub fn apply(&mut self, command: WindowCommand) {
        let result = match command {
            WindowCommand::Reload => self.webview.reload(),
            WindowCommand::Print => self.webview.print(),
            WindowCommand::ToggleDevTools => {
                if self.webview.is_devtools_open() {
                    self.webview.close_devtools();
                } else {
                    self.webview.open_devtools();
                }
                Ok(())
            }
            WindowCommand::ZoomIn => {
                if !self.zoom.zoom_in() {
                    log::debug!("Zoom in ignored, already at maximum");
                }
                self.apply_zoom()
            }
            WindowCommand::ZoomOut => {
                if !self.zoom.zoom_out() {
                    log::debug!("Zoom out ignored, already at minimum");
                }
                self.apply_zoom()
            }
            WindowCommand::ResetZoom => {
                self.zoom.reset();
                self.apply_zoom()
            }
            WindowCommand::Close => Ok(()),
        };

        if let Err(e) = result {
            log::error!("{:?} failed for window {:?}: {}", command, self.id(), e);
        }
    }

    fn apply_zoom(&self) -> wry::Result<()> {
        log::debug!(
            "Window {:?} zoom level {} (factor {:.3})",
            self.id(),
            self.zoom.level(),
            self.zoom.factor()
        );
        self.webview.zoom(self.zoom.factor())
    }

    /// Hide the window right away; dropping the state destroys it.
    pub fn hide(&self) {
        self.window.set_visible(false);
    }

    pub fn focus(&self) {
        self.window.focus_window();
    }

    /// Block or restore input while a window it owns is open
    pub fn set_input_enabled(&self, enabled: bool) {
        #[cfg(target_os = "windows")]
        {
            use winit::platform::windows::WindowExtWindows;
            self.window.set_enable(enabled);
        }

        #[cfg(not(target_os = "windows"))]
        let _ = enabled;
    }
}

/// Tie `attrs` to `owner` so the new window stays above it as a separate
/// top-level window.
#[cfg(target_os = "macos")]
fn owned_by(attrs: WindowAttributes, owner: &Window) -> Result<WindowAttributes, AppError> {
    use raw_window_handle::HasWindowHandle;
    let handle = owner.window_handle()?.as_raw();
    // SAFETY: the owner is a live window held by the window manager and is
    // closed only after the windows it owns.
    Ok(unsafe { attrs.with_parent_window(Some(handle)) })
}

#[cfg(target_os = "windows")]
fn owned_by(attrs: WindowAttributes, owner: &Window) -> Result<WindowAttributes, AppError> {
    use raw_window_handle::{HasWindowHandle, RawWindowHandle};
    use winit::platform::windows::WindowAttributesExtWindows;
    match owner.window_handle()?.as_raw() {
        RawWindowHandle::Win32(handle) => Ok(attrs.with_owner_window(handle.hwnd.get())),
        other => {
            log::warn!("Unexpected window handle {:?}, opening unowned", other);
            Ok(attrs)
        }
    }
}

/// X11 child windows are confined to the parent's client area, so the
/// window stays top-level and is only marked as a dialog.
#[cfg(any(
    target_os = "linux",
    target_os = "dragonfly",
    target_os = "freebsd",
    target_os = "netbsd",
    target_os = "openbsd"
))]
fn owned_by(attrs: WindowAttributes, owner: &Window) -> Result<WindowAttributes, AppError> {
    use winit::platform::x11::{WindowAttributesExtX11, WindowType};
    log::debug!("Opening dialog window for {:?}", owner.id());
    Ok(attrs.with_x11_window_type(vec![WindowType::Dialog]))
}
