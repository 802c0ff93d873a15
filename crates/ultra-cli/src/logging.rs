use tracing_subscriber::EnvFilter;

/// Set up logging to stderr.
///
/// `RUST_LOG` overrides the default level, e.g. `RUST_LOG=ultra_core=debug`.
/// Without it the level is `warn`, or `debug` when `verbose` is set.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();
}
