// Tracing initialization for hosts embedding the crate
use tracing_subscriber::EnvFilter;

/// Install a global subscriber honoring `RUST_LOG`, falling back to the
/// given level. Later calls are no-ops, so tests may call this freely.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
