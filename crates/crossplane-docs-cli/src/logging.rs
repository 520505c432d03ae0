//! Tracing setup
//!
//! Logs go to stderr so that stdout carries nothing but the generated
//! markdown. `RUST_LOG` overrides the default level.

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Install the global subscriber
///
/// Defaults to `warn`, or `debug` when `--debug` is given.
pub fn init(debug: bool) -> Result<(), TryInitError> {
    let default_level = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(debug)
                .without_time(),
        )
        .try_init()
}
