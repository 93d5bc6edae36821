//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the rulecheck tracing/logging system.
///
/// Reads the `RULECHECK_LOG` environment variable for per-subsystem log
/// levels. Format: `RULECHECK_LOG=scanner=debug,verify=info`
///
/// Falls back to `rulecheck=info` if `RULECHECK_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("RULECHECK_LOG")
            .unwrap_or_else(|_| EnvFilter::new("rulecheck=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
