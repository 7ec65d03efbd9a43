//! Error types for interval estimation.

use thiserror::Error;

/// Errors from summarizing a metric series.
#[derive(Error, Debug)]
pub enum StatsError {
    /// Fewer than two valid replications were collected. A sample standard
    /// deviation divides by `n - 1`, so no interval exists below `n = 2`.
    #[error("insufficient sample: {n} valid replications, need at least 2")]
    InsufficientSample {
        /// Number of valid replications actually collected.
        n: usize,
    },

    /// Confidence level outside the open interval `(0, 1)`.
    #[error("confidence level {confidence} must lie strictly between 0 and 1")]
    InvalidConfidence {
        /// The rejected confidence level.
        confidence: f64,
    },

    /// The Student-t distribution could not be constructed.
    #[error("t distribution unavailable for {df} degrees of freedom")]
    Distribution {
        /// The rejected degrees-of-freedom value.
        df: f64,
    },
}
