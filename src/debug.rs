//! Logging bridge for Luny Text
//!
//! Installs a `log` backend that writes every record to
//! /tmp/luny_text_debug.log on Unix/macOS, or %TEMP%\luny_text_debug.log on
//! Windows. When RUST_LOG is set, records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` flag, then RUST_LOG, then `info`.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};

/// Level used when neither the CLI nor RUST_LOG says otherwise
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

struct LogBridge {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl LogBridge {
    fn new(level: LevelFilter, mirror_stderr: bool) -> Self {
        let file = if level != LevelFilter::Off {
            match OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
            {
                Ok(mut f) => {
                    let _ = writeln!(
                        f,
                        "{}\nluny-text debug session started at {} (level={})\n{}",
                        "=".repeat(80),
                        get_timestamp(),
                        level,
                        "=".repeat(80)
                    );
                    Some(f)
                }
                // Without a log file we still mirror to stderr if asked to
                Err(_) => None,
            }
        } else {
            None
        };

        Self {
            level,
            file: Mutex::new(file),
            mirror_stderr,
        }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );

        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
        if self.mirror_stderr {
            eprint!("{}", line);
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static LOGGER: OnceLock<LogBridge> = OnceLock::new();

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    let path = PathBuf::from("/tmp/luny_text_debug.log");
    #[cfg(not(unix))]
    let path = std::env::temp_dir().join("luny_text_debug.log");
    path
}

/// Pick the effective level from the CLI override and the RUST_LOG value.
///
/// RUST_LOG is only honoured when it is a bare level name ("debug", "warn",
/// ...); module directives are ignored.
pub fn resolve_level(cli_level: Option<LevelFilter>, rust_log: Option<&str>) -> LevelFilter {
    cli_level
        .or_else(|| rust_log.and_then(|value| value.trim().parse::<LevelFilter>().ok()))
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the log bridge. Calling this more than once is harmless; only the
/// first call takes effect.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = resolve_level(cli_level, rust_log.as_deref());
    let logger = LOGGER.get_or_init(|| LogBridge::new(level, rust_log.is_some()));

    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
        log::info!("Logging to {} at level {}", log_path().display(), logger.level);
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LevelFilter::Trace), Some("error")),
            LevelFilter::Trace
        );
    }

    #[test]
    fn test_rust_log_used_without_cli() {
        assert_eq!(resolve_level(None, Some("warn")), LevelFilter::Warn);
        assert_eq!(resolve_level(None, Some(" DEBUG ")), LevelFilter::Debug);
    }

    #[test]
    fn test_module_directives_fall_back_to_default() {
        assert_eq!(resolve_level(None, Some("wry=debug")), DEFAULT_LEVEL);
        assert_eq!(resolve_level(None, None), DEFAULT_LEVEL);
    }

    #[test]
    fn test_log_path_file_name() {
        assert_eq!(
            log_path().file_name().and_then(|n| n.to_str()),
            Some("luny_text_debug.log")
        );
    }
}
