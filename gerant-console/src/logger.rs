//! Logging setup
//!
//! Console output only. `RUST_LOG` overrides the level given on the command
//! line.

use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level or filter directive (e.g., "warn", "gerant_client=debug")
/// * `json_format` - Emit JSON lines instead of the human-readable format
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let subscriber = tracing_subscriber::registry();

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter);
        subscriber.with(console_layer).try_init()?;
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(false)
            .with_writer(std::io::stderr)
            .with_filter(env_filter);
        subscriber.with(console_layer).try_init()?;
    }

    Ok(())
}
