//! Tracing subscriber setup for hosts and tools.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "inkboard=info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`. Safe to call more than
/// once; later calls leave the first subscriber in place.
pub fn init() {
    init_with(DEFAULT_FILTER);
}

pub fn init_with(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
