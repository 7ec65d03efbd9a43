//! Error types for stream construction and replication configuration.

use thiserror::Error;

/// Errors raised while building generator streams or queue models.
///
/// Every variant is a configuration problem: once a stream and a model
/// validate, a replication run itself cannot fail.
#[derive(Error, Debug)]
pub enum SimError {
    /// Seed is zero or congruent to zero modulo the Lehmer modulus, which
    /// would pin the generator state at zero forever.
    #[error("Invalid stream seed {seed}: must be positive and not a multiple of 2^31 - 1")]
    InvalidSeed {
        /// The rejected seed value.
        seed: u64,
    },

    /// A distribution rate parameter was zero, negative, or non-finite.
    #[error("Invalid distribution rate {rate}: must be positive and finite")]
    InvalidRate {
        /// The rejected rate value.
        rate: f64,
    },

    /// A service-floor shift was negative or non-finite.
    #[error("Invalid service floor {shift}: must be non-negative and finite")]
    InvalidShift {
        /// The rejected shift value.
        shift: f64,
    },

    /// A time horizon was NaN or infinite.
    ///
    /// Horizons at or below zero are accepted and simply admit no clients;
    /// only non-finite values are rejected because the stopping rule could
    /// never fire.
    #[error("Invalid time horizon {horizon}: must be finite")]
    InvalidHorizon {
        /// The rejected horizon value.
        horizon: f64,
    },
}
