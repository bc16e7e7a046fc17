//! Logging setup for the command-line tool
//!
//! The library only emits `tracing` events; the binary installs a stderr
//! subscriber. `LAYERCFG_LOG` overrides the level, e.g. `LAYERCFG_LOG=debug`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "LAYERCFG_LOG";

/// Filter from `LAYERCFG_LOG`, or `warn` (`debug` when verbose)
pub fn build_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the stderr subscriber. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
