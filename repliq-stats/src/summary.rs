//! Student-t interval estimation over metric series.
//!
//! Replication means are independent and identically distributed by
//! construction (distinct seeds, identical model), so the classic
//! small-sample recipe applies: sample mean, Bessel-corrected standard
//! deviation, and a two-sided t interval at `n - 1` degrees of freedom.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

use crate::error::StatsError;
use crate::series::MetricSeries;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Bessel-corrected sample standard deviation, or `None` when fewer than
/// two values are present.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let center = mean(values)?;
    let squared: f64 = values.iter().map(|v| (v - center).powi(2)).sum();
    Some((squared / (values.len() - 1) as f64).sqrt())
}

/// Two-sided Student-t critical value for `confidence` at `df` degrees of
/// freedom.
///
/// Evaluates the t quantile at `1 - (1 - confidence) / 2`, so for 95%
/// confidence this is the 97.5th percentile.
///
/// # Errors
///
/// Returns [`StatsError::InvalidConfidence`] when `confidence` is not
/// strictly between 0 and 1, and [`StatsError::Distribution`] when the
/// distribution cannot be built, which only happens at zero degrees of
/// freedom.
pub fn t_critical(confidence: f64, df: usize) -> Result<f64, StatsError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(StatsError::InvalidConfidence { confidence });
    }
    let dist = StudentsT::new(0.0, 1.0, df as f64)
        .map_err(|_| StatsError::Distribution { df: df as f64 })?;
    Ok(dist.inverse_cdf(1.0 - (1.0 - confidence) / 2.0))
}

/// One metric's interval estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceReport {
    /// Effective sample size the estimate is based on.
    pub n: usize,
    /// Confidence level in `(0, 1)`.
    pub confidence: f64,
    /// Two-sided t critical value at `n - 1` degrees of freedom.
    pub t_critical: f64,
    /// Sample mean of the replication means.
    pub mean: f64,
    /// Bessel-corrected sample standard deviation.
    pub std_dev: f64,
    /// Interval half-width `t * s / sqrt(n)`.
    pub half_width: f64,
    /// Lower interval bound, `mean - half_width`.
    pub lower: f64,
    /// Upper interval bound, `mean + half_width`.
    pub upper: f64,
}

/// Summarizes one metric series into a confidence interval.
///
/// # Errors
///
/// Returns [`StatsError::InsufficientSample`] when fewer than two values
/// are present and [`StatsError::InvalidConfidence`] for a confidence
/// level outside `(0, 1)`.
pub fn summarize(series: &MetricSeries, confidence: f64) -> Result<ConfidenceReport, StatsError> {
    let values = series.values();
    let n = values.len();
    let (Some(mean), Some(std_dev)) = (mean(values), sample_std_dev(values)) else {
        return Err(StatsError::InsufficientSample { n });
    };

    let t = t_critical(confidence, n - 1)?;
    let half_width = t * std_dev / (n as f64).sqrt();
    debug!(n, mean, std_dev, half_width, "summarized metric series");
    Ok(ConfidenceReport {
        n,
        confidence,
        t_critical: t,
        mean,
        std_dev,
        half_width,
        lower: mean - half_width,
        upper: mean + half_width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_empty_is_none() {
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[4.2]), Some(4.2));
    }

    #[test]
    fn test_std_dev_needs_two_values() {
        assert!(sample_std_dev(&[]).is_none());
        assert!(sample_std_dev(&[1.0]).is_none());
    }

    #[test]
    fn test_std_dev_uses_bessel_correction() {
        // Deviations are 1 and 1, so the corrected variance is 2/1 = 2.
        let sd = sample_std_dev(&[1.0, 3.0]).unwrap();
        assert!((sd - 2.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_of_constant_series_is_zero() {
        assert_eq!(sample_std_dev(&[5.0, 5.0, 5.0]), Some(0.0));
    }

    #[test]
    fn test_t_critical_matches_table_values() {
        let t29 = t_critical(0.95, 29).unwrap();
        assert!((t29 - 2.0452).abs() < 1e-3, "t(0.95, 29) was {t29}");

        let t9 = t_critical(0.95, 9).unwrap();
        assert!((t9 - 2.2622).abs() < 1e-3, "t(0.95, 9) was {t9}");

        let t1 = t_critical(0.95, 1).unwrap();
        assert!((t1 - 12.7062).abs() < 5e-2, "t(0.95, 1) was {t1}");
    }

    #[test]
    fn test_t_critical_widens_with_confidence() {
        let t95 = t_critical(0.95, 29).unwrap();
        let t99 = t_critical(0.99, 29).unwrap();
        assert!(t99 > t95);
        assert!(t95 > 0.0);
    }

    #[test]
    fn test_t_critical_rejects_bad_confidence() {
        for confidence in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(matches!(
                t_critical(confidence, 29),
                Err(StatsError::InvalidConfidence { .. })
            ));
        }
    }

    #[test]
    fn test_t_critical_rejects_zero_df() {
        assert!(matches!(
            t_critical(0.95, 0),
            Err(StatsError::Distribution { .. })
        ));
    }

    #[test]
    fn test_summarize_insufficient_sample() {
        let empty = MetricSeries::new();
        assert!(matches!(
            summarize(&empty, 0.95),
            Err(StatsError::InsufficientSample { n: 0 })
        ));

        let single = MetricSeries::from(vec![1.0]);
        assert!(matches!(
            summarize(&single, 0.95),
            Err(StatsError::InsufficientSample { n: 1 })
        ));
    }

    #[test]
    fn test_summarize_identical_samples_collapses_interval() {
        let series = MetricSeries::from(vec![4.2, 4.2]);
        let report = summarize(&series, 0.95).unwrap();
        assert_eq!(report.n, 2);
        assert_eq!(report.mean, 4.2);
        assert_eq!(report.std_dev, 0.0);
        assert_eq!(report.half_width, 0.0);
        assert_eq!(report.lower, 4.2);
        assert_eq!(report.upper, 4.2);
    }

    #[test]
    fn test_summarize_known_interval() {
        let series = MetricSeries::from(vec![2.0, 4.0, 6.0]);
        let report = summarize(&series, 0.95).unwrap();
        assert_eq!(report.mean, 4.0);
        assert_eq!(report.std_dev, 2.0);
        // t(0.95, 2) ~ 4.3027, so the half-width is ~4.9683.
        assert!((report.half_width - 4.9683).abs() < 1e-3);
        assert_eq!(report.lower, report.mean - report.half_width);
        assert_eq!(report.upper, report.mean + report.half_width);
        assert!(report.lower < report.mean && report.mean < report.upper);
    }

    #[test]
    fn test_summarize_carries_inputs_through() {
        let series = MetricSeries::from(vec![1.0, 2.0, 3.0, 4.0]);
        let report = summarize(&series, 0.9).unwrap();
        assert_eq!(report.n, 4);
        assert_eq!(report.confidence, 0.9);
        assert!(report.t_critical > 0.0);
    }
}
