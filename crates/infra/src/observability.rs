//! Telemetry initialisation
//!
//! Installs a global `tracing` subscriber writing formatted events to
//! stderr. The filter comes from `RUST_LOG` when set, otherwise from the
//! configured log level.

use tracing_subscriber::EnvFilter;

/// Initialise the global tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
