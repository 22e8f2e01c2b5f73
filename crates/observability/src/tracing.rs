//! Tracing/logging initialization.
//!
//! Filtering comes from `RUST_LOG` (default `info`). Production runs log
//! JSON; local runs get the human-readable compact format.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// `json` selects machine-readable output (the api binary passes its
/// production flag here). Safe to call multiple times; only the first
/// call installs a subscriber.
pub fn init(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
