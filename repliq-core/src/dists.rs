//! Inverse-transform samplers for the replication engine.
//!
//! Both distributions sample by pulling one uniform from a
//! [`UniformSource`](crate::stream::UniformSource) and applying the closed
//! form `-ln(u) / rate`, so a scripted stream fully determines every variate.
//! No external sampling crate is involved: rejection or ziggurat methods
//! consume a data-dependent number of draws, which would break the fixed
//! two-draws-per-client contract the simulator depends on.

use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::stream::UniformSource;

/// Exponential distribution with rate `lambda`, sampled by inverse
/// transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exponential {
    rate: f64,
}

impl Exponential {
    /// Creates an exponential distribution with the given rate per minute.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRate`] when `rate` is zero, negative, or
    /// non-finite.
    pub fn new(rate: f64) -> Result<Self, SimError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(SimError::InvalidRate { rate });
        }
        Ok(Self { rate })
    }

    /// The rate parameter `lambda`.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Theoretical mean `1 / lambda`.
    pub fn mean(&self) -> f64 {
        1.0 / self.rate
    }

    /// Draws one variate, consuming exactly one uniform from `stream`.
    ///
    /// The source guarantees `u` in `(0, 1)`, so the result is finite and
    /// strictly positive.
    pub fn sample<S: UniformSource + ?Sized>(&self, stream: &mut S) -> f64 {
        -stream.next_uniform().ln() / self.rate
    }
}

/// Exponential distribution shifted right by a constant floor.
///
/// Models service durations with an incompressible minimum: the variate is
/// `-ln(u) / rate + shift`, so no sample falls below `shift`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftedExponential {
    exp: Exponential,
    shift: f64,
}

impl ShiftedExponential {
    /// Creates a shifted exponential with rate `rate` and floor `shift`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidRate`] for a non-positive or non-finite
    /// rate and [`SimError::InvalidShift`] for a negative or non-finite
    /// shift.
    pub fn new(rate: f64, shift: f64) -> Result<Self, SimError> {
        if !(shift.is_finite() && shift >= 0.0) {
            return Err(SimError::InvalidShift { shift });
        }
        Ok(Self {
            exp: Exponential::new(rate)?,
            shift,
        })
    }

    /// The rate of the exponential component.
    pub fn rate(&self) -> f64 {
        self.exp.rate()
    }

    /// The additive floor applied to every sample.
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Theoretical mean `1 / rate + shift`.
    pub fn mean(&self) -> f64 {
        self.exp.mean() + self.shift
    }

    /// Draws one variate, consuming exactly one uniform from `stream`.
    pub fn sample<S: UniformSource + ?Sized>(&self, stream: &mut S) -> f64 {
        self.exp.sample(stream) + self.shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::{LehmerStream, ReplayStream};

    #[test]
    fn test_exponential_rejects_bad_rates() {
        assert!(matches!(
            Exponential::new(0.0),
            Err(SimError::InvalidRate { .. })
        ));
        assert!(Exponential::new(-1.0).is_err());
        assert!(Exponential::new(f64::NAN).is_err());
        assert!(Exponential::new(f64::INFINITY).is_err());
        assert!(Exponential::new(0.6).is_ok());
    }

    #[test]
    fn test_exponential_inverse_transform_is_exact() {
        let dist = Exponential::new(2.0).unwrap();
        let mut stream = ReplayStream::new(vec![0.5]);
        assert_eq!(dist.sample(&mut stream), -0.5f64.ln() / 2.0);
    }

    #[test]
    fn test_exponential_mean_accessor() {
        let dist = Exponential::new(4.0).unwrap();
        assert_eq!(dist.mean(), 0.25);
        assert_eq!(dist.rate(), 4.0);
    }

    #[test]
    fn test_exponential_samples_are_positive() {
        let dist = Exponential::new(0.6).unwrap();
        let mut stream = LehmerStream::new(12355).unwrap();
        for _ in 0..1_000 {
            let x = dist.sample(&mut stream);
            assert!(x.is_finite());
            assert!(x > 0.0);
        }
    }

    #[test]
    fn test_shifted_exponential_rejects_negative_shift() {
        assert!(matches!(
            ShiftedExponential::new(0.4, -0.1),
            Err(SimError::InvalidShift { .. })
        ));
        assert!(ShiftedExponential::new(0.4, f64::NAN).is_err());
        assert!(ShiftedExponential::new(0.0, 0.3).is_err());
        assert!(ShiftedExponential::new(0.4, 0.0).is_ok());
    }

    #[test]
    fn test_shifted_exponential_applies_floor() {
        let dist = ShiftedExponential::new(0.4, 0.3).unwrap();
        let mut stream = ReplayStream::new(vec![0.5]);
        assert_eq!(dist.sample(&mut stream), -0.5f64.ln() / 0.4 + 0.3);
    }

    #[test]
    fn test_shifted_exponential_never_drops_below_floor() {
        let dist = ShiftedExponential::new(0.4, 0.3).unwrap();
        let mut stream = LehmerStream::new(777).unwrap();
        for _ in 0..1_000 {
            assert!(dist.sample(&mut stream) >= 0.3);
        }
    }

    #[test]
    fn test_shifted_exponential_mean_includes_shift() {
        let dist = ShiftedExponential::new(0.4, 0.3).unwrap();
        assert!((dist.mean() - 2.8).abs() < 1e-12);
    }
}
