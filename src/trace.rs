//! Log output for `waitbar`.
//!
//! Logs go to stderr and are filtered by `RUST_LOG`. Without it only
//! warnings are shown, so the progress bar has the terminal to itself.
//! `RUST_LOG=waitbar=trace` shows every reported value.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "waitbar=warn";

/// Install the global tracing subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_timer(fmt::time::uptime()),
        )
        .with(filter)
        .try_init();
}

#[test]
fn test_init_twice() {
    init_tracing();
    init_tracing();
    tracing::debug!("still alive");
}
