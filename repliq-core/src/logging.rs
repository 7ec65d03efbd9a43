//! Logging setup for replication studies.
//!
//! Wires a `tracing` subscriber with an environment-driven filter. The
//! `RUST_LOG` variable always wins; the level argument is only the
//! fallback when no environment filter is set.

use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes study logging at the default `info` level.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_study_logging() {
    init_study_logging_with_level("info");
}

/// Initializes study logging with an explicit fallback level.
///
/// # Arguments
///
/// * `level` - filter level applied to the replication crates when
///   `RUST_LOG` is unset, e.g. `"debug"` to see per-replication traces
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_study_logging_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("repliq_core={level},repliq_stats={level},repliq_study={level}").into()
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(filter)
        .init();

    info!("study logging initialized at level: {}", level);
}
