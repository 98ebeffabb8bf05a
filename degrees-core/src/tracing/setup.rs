//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the degrees tracing/logging system.
///
/// Reads the `DEGREES_LOG` environment variable for log levels, e.g.
/// `DEGREES_LOG=degrees_core=debug`. Falls back to `degrees=info` if
/// `DEGREES_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("DEGREES_LOG")
            .unwrap_or_else(|_| EnvFilter::new("degrees=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
