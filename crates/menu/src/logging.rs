// Chunk: docs/chunks/menu_logging - tracing subscriber setup
//!
//! Installs the global `tracing` subscriber.
//!
//! The menu owns the terminal while it runs, so logs never go to the
//! screen during the session: with a log file everything at the
//! `LITE_MENU_LOG` level (default `debug`) is written there, otherwise only
//! warnings reach stderr, and those are emitted before the UI starts.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "LITE_MENU_LOG";

/// Builds the filter for file logging from [`LOG_ENV`], falling back to
/// `debug`.
pub fn file_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"))
}

/// Installs the subscriber. Only the first call in a process has an effect.
///
/// # Errors
///
/// Fails if the log file cannot be created.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(file_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("warn"))
            .with_writer(io::stderr)
            .without_time()
            .with_target(false)
            .try_init(),
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
