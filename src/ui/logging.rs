//! ui::logging
//!
//! Diagnostic logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. The filter is
//! chosen in this order:
//! 1. `RUST_LOG` if set
//! 2. `log_filter` from the config file
//! 3. The level implied by `--quiet` / `--debug`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::output::Verbosity;

/// Pick the filter directive to use.
///
/// `env` is the value of `RUST_LOG`, passed in so the choice is testable.
pub fn filter_directive(
    env: Option<&str>,
    configured: Option<&str>,
    verbosity: Verbosity,
) -> String {
    env.or(configured)
        .map(str::to_string)
        .unwrap_or_else(|| verbosity.log_directive().to_string())
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(configured: Option<&str>, verbosity: Verbosity) {
    let env = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(env.as_deref(), configured, verbosity);
    let env_filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_directive()));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity == Verbosity::Debug)
                .with_ansi(std::env::var_os("NO_COLOR").is_none()),
        )
        .with(env_filter)
        .try_init();
}
