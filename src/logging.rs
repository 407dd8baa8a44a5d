//! Logging init: structured events on stderr, leaving stdout for the artifacts.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins; otherwise only warnings,
/// or debug output for this crate when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "info,curl_to_kodi=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
