//! `reportkit_log` v1:
//! tracing subscriber setup shared by the CLI and tests.
//!
//! `RUST_LOG` always wins over the level passed in, e.g.
//! `RUST_LOG=reportkit_io_pdf=debug`.

use tracing_subscriber::{EnvFilter, fmt};

/// Fallback filter when neither `RUST_LOG` nor a caller level is usable.
pub const C_LOG_LEVEL_DEFAULT: &str = "info";

fn derive_env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(C_LOG_LEVEL_DEFAULT))
}

/// Install the global fmt subscriber.
///
/// Fails if a global subscriber is already set.
pub fn init(default_level: &str) -> Result<(), String> {
    fmt()
        .with_env_filter(derive_env_filter(default_level))
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|err| format!("log init error: {err}"))
}

/// Debug-level subscriber writing through the test harness; safe to call
/// from every test.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
