// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Result;
use luny_text::app::App;
use luny_text::cli;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = cli::process_cli();

    // Routes all log::info!() etc. to the debug log file.
    // CLI --log-level flag takes precedence over RUST_LOG.
    luny_text::debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting Luny Text {}", luny_text::VERSION);

    // Runtime for dialog futures and file reads
    let runtime = Arc::new(Runtime::new()?);

    let app = App::new(Arc::clone(&runtime), runtime_options);
    let result = app.run();

    // The event loop has exited and every window has been dropped, so this
    // is the last reference to the runtime.
    log::info!("Event loop exited, shutting down runtime");
    if let Ok(rt) = Arc::try_unwrap(runtime) {
        rt.shutdown_timeout(std::time::Duration::from_secs(2));
    }

    // main prints the returned error itself; only add the display hint
    #[cfg(target_os = "linux")]
    {
        if let Err(e) = &result {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display") || msg.contains("wayland") || msg.contains("x11") {
                eprintln!("luny-text: hint: no display server found, ensure DISPLAY (X11) is set");
            }
        }
    }
    Ok(result?)
}
