//! Tracing setup: subscriber installation, span definitions, log events.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use factmatrix_core::config::ObservabilityConfig;
use factmatrix_core::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Build the filter: `FACTMATRIX_LOG` if set and valid, else the configured
/// level, else `info`.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Reads `FACTMATRIX_LOG` for per-target directives, e.g.
/// `FACTMATRIX_LOG=factmatrix_engine=debug,factmatrix_ledger=warn`.
///
/// Idempotent. If another subscriber is already installed it is left alone.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = build_filter(config);
        let result = if config.json_logs {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_target(true))
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global subscriber already set");
        }
    });
}
