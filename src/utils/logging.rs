//! Diagnostic logging (`RUST_LOG=rclinicbook=debug`).

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber once. Output goes to stderr so it
/// never mixes with listings printed on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rclinicbook=warn"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}
