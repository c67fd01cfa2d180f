//! Application configuration.
//!
//! Luny Text has no configuration file: `Config::default()` carries the
//! built-in values and the command line can override a few of them.

use crate::cli::RuntimeOptions;
use crate::dialogs::FileFilter;

/// Configuration shared by every window
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Title of editor windows
    pub window_title: String,
    /// Editor window width in logical pixels
    pub window_width: u32,
    /// Editor window height in logical pixels
    pub window_height: u32,
    /// Title of the about window
    pub about_title: String,
    pub about_width: u32,
    pub about_height: u32,
    /// Open the web inspector when an editor window is created
    pub open_devtools: bool,
    /// Filters offered by the open-file and save-as dialogs
    pub file_filters: Vec<FileFilter>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_title: "Luny Text".to_string(),
            window_width: 800,
            window_height: 600,
            about_title: "About Luny Text".to_string(),
            about_width: 400,
            about_height: 200,
            open_devtools: cfg!(debug_assertions),
            file_filters: FileFilter::text_and_markdown(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the configuration for this run from the CLI options.
    pub fn from_runtime_options(options: &RuntimeOptions) -> Self {
        let mut config = Self::new();
        if options.devtools {
            config.open_devtools = true;
            log::info!("CLI override: web inspector opens with every editor window");
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.window_title, "Luny Text");
        assert_eq!((config.window_width, config.window_height), (800, 600));
        assert_eq!((config.about_width, config.about_height), (400, 200));
        assert_eq!(config.file_filters.len(), 2);
    }

    #[test]
    fn test_devtools_flag_overrides_default() {
        let options = RuntimeOptions {
            devtools: true,
            ..Default::default()
        };
        assert!(Config::from_runtime_options(&options).open_devtools);
    }
}
