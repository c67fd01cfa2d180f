//! Command-line interface for Luny Text.
//!
//! There are no subcommands; the flags only tune logging and the web
//! inspector before the event loop starts.

use clap::Parser;

/// Luny Text - a lightweight text and markdown editor
#[derive(Parser, Debug)]
#[command(name = "luny-text")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Set debug log level (overrides RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevelArg>,

    /// Open the web inspector in every new editor window
    #[arg(long)]
    pub devtools: bool,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Log level override
    pub log_level: Option<log::LevelFilter>,
    /// Force the web inspector open in new editor windows
    pub devtools: bool,
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            log_level: cli.log_level.map(LogLevelArg::to_level_filter),
            devtools: cli.devtools,
        }
    }
}

/// Parse the process arguments. `--help` and `--version` exit here.
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}
