//! Window descriptions.
//!
//! A `WindowSpec` holds everything needed to open a window, computed from
//! the configuration without touching the windowing system.

use crate::config::Config;
use crate::document::Document;
use winit::dpi::LogicalSize;
use winit::window::{Window, WindowAttributes, WindowButtons};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    /// Hosts the editor document; can become the active window
    Editor,
    /// Informational window owned by an editor window
    About,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub kind: WindowKind,
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub minimizable: bool,
    pub maximizable: bool,
    pub document: Document,
    /// Attach the application menu bar
    pub attach_menu: bool,
    /// Open the web inspector once the document is loaded
    pub open_devtools: bool,
    /// Opened over, and closed with, an existing editor window
    pub parented: bool,
}

impl WindowSpec {
    /// Main editor window
    pub fn editor(config: &Config) -> Self {
        Self {
            kind: WindowKind::Editor,
            title: config.window_title.clone(),
            width: config.window_width,
            height: config.window_height,
            resizable: true,
            minimizable: true,
            maximizable: true,
            document: Document::Index,
            attach_menu: true,
            open_devtools: config.open_devtools,
            parented: false,
        }
    }

    /// About window: fixed size, close button only, no menu bar
    pub fn about(config: &Config) -> Self {
        Self {
            kind: WindowKind::About,
            title: config.about_title.clone(),
            width: config.about_width,
            height: config.about_height,
            resizable: false,
            minimizable: false,
            maximizable: false,
            document: Document::About,
            attach_menu: false,
            open_devtools: false,
            parented: true,
        }
    }

    pub fn buttons(&self) -> WindowButtons {
        let mut buttons = WindowButtons::CLOSE;
        if self.minimizable {
            buttons |= WindowButtons::MINIMIZE;
        }
        if self.maximizable {
            buttons |= WindowButtons::MAXIMIZE;
        }
        buttons
    }

    /// winit attributes for this window, without a parent
    pub fn attributes(&self) -> WindowAttributes {
        Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(LogicalSize::new(self.width, self.height))
            .with_resizable(self.resizable)
            .with_enabled_buttons(self.buttons())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_geometry() {
        let spec = WindowSpec::editor(&Config::default());
        assert_eq!((spec.width, spec.height), (800, 600));
        assert!(spec.resizable);
        assert_eq!(spec.buttons(), WindowButtons::all());
        assert_eq!(spec.document, Document::Index);
        assert!(spec.attach_menu);
        assert!(!spec.parented);
    }

    #[test]
    fn test_about_window_is_fixed_and_owned() {
        let spec = WindowSpec::about(&Config::default());
        assert_eq!((spec.width, spec.height), (400, 200));
        assert!(!spec.resizable);
        assert_eq!(spec.buttons(), WindowButtons::CLOSE);
        assert_eq!(spec.document, Document::About);
        assert!(!spec.attach_menu);
        assert!(!spec.open_devtools);
        assert!(spec.parented);
    }
}
