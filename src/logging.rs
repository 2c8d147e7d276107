//! Logging
//!
//! `tracing` events go to stderr so stdout stays free for the install
//! report or the NDJSON event stream.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding an `EnvFilter` directive, e.g. `debug` or
/// `voyager_install=trace`
pub const LOG_ENV: &str = "VOYAGER_INSTALL_LOG";

/// Level implied by the number of `-v` flags
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `-v` wins over the environment; the environment wins over the default.
/// An unparsable directive falls back to the verbosity level.
pub fn build_env_filter(verbose: u8, env_directive: Option<&str>) -> EnvFilter {
    let level = level_for_verbosity(verbose);
    match env_directive.filter(|d| !d.trim().is_empty()) {
        Some(directive) if verbose == 0 => {
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(level))
        }
        _ => EnvFilter::new(level),
    }
}

/// Install the global subscriber. A second call is a no-op.
pub fn init_logging(verbose: u8, color: bool) {
    let directive = std::env::var(LOG_ENV).ok();
    let filter = build_env_filter(verbose, directive.as_deref());

    let _ = Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(verbose >= 2)
                .with_ansi(color)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
