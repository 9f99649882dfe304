//! Tracing bootstrap for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Installs a fmt layer that respects the `RUST_LOG` environment variable,
/// falling back to `info` when unset.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_telemetry() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .try_init()?;

    Ok(())
}
