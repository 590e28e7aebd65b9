use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
///
/// A log file gets info-level output. Stderr shares the terminal with the
/// TUI, so only errors go there by default.
pub fn default_directives(to_file: bool) -> &'static str {
    if to_file {
        "gpacalc=info,gpacalc_core=info"
    } else {
        "error"
    }
}

fn env_filter(to_file: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(to_file)))
}

/// Initialize tracing. Logs never go to stdout, which belongs to the TUI.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let result = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(env_filter(true))
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(env_filter(false))
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
