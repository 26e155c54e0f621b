use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr logger.
///
/// Verbosity comes from `RUST_LOG` and defaults to "info"; consistency
/// warnings are logged at `warn`, per-line parse details at `debug`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
