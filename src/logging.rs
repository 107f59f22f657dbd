use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// All diagnostics go to stderr; stdout is reserved for the tables the
/// subcommands emit.
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
pub fn init(verbose: bool) {
    // Determine log level from verbose flag or RUST_LOG env var
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tally={}", default_level)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false) // Don't show module path
        .compact(); // Use compact format

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
