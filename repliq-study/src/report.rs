//! Assembled study results and the plain-text report renderer.

use std::io;

use serde::{Deserialize, Serialize};

use repliq_stats::{ConfidenceReport, Metric, SampleSet};

/// Everything a finished study produced.
///
/// All four interval estimates share the same effective sample size and
/// therefore the same t critical value; `t_critical` repeats it at the
/// top level for report headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyReport {
    /// Replications the study was configured to run.
    pub requested: usize,
    /// Replications that survived the empty-run filter.
    pub n: usize,
    /// Confidence level shared by every interval.
    pub confidence: f64,
    /// Two-sided t critical value at `n - 1` degrees of freedom.
    pub t_critical: f64,
    /// Interval for mean time in system.
    pub system_time: ConfidenceReport,
    /// Interval for mean wait in queue.
    pub queue_wait: ConfidenceReport,
    /// Interval for mean service duration.
    pub service_time: ConfidenceReport,
    /// Interval for mean server idle gap.
    pub idle_time: ConfidenceReport,
    /// The per-replication means behind the intervals.
    pub samples: SampleSet,
}

impl StudyReport {
    /// The interval estimate for one metric.
    pub fn metric(&self, metric: Metric) -> &ConfidenceReport {
        match metric {
            Metric::SystemTime => &self.system_time,
            Metric::QueueWait => &self.queue_wait,
            Metric::ServiceTime => &self.service_time,
            Metric::IdleTime => &self.idle_time,
        }
    }
}

const RULE_WIDTH: usize = 44;

/// Writes the human-readable study summary to `out`.
///
/// Fixed four-decimal output for every statistic, one block per metric in
/// [`Metric::ALL`] order.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render_report<W: io::Write>(report: &StudyReport, out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "REPLICATION STUDY")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "replications requested: {}", report.requested)?;
    writeln!(out, "effective sample size:  {}", report.n)?;
    writeln!(
        out,
        "confidence level:       {:.0}%",
        report.confidence * 100.0
    )?;
    writeln!(
        out,
        "t critical (df = {}):   {:.4}",
        report.n.saturating_sub(1),
        report.t_critical
    )?;

    for metric in Metric::ALL {
        let est = report.metric(metric);
        writeln!(out)?;
        writeln!(out, "-- {metric} --")?;
        writeln!(out, "  mean:       {:.4}", est.mean)?;
        writeln!(out, "  std dev:    {:.4}", est.std_dev)?;
        writeln!(out, "  half-width: {:.4}", est.half_width)?;
        writeln!(
            out,
            "  {:.0}% CI:     [{:.4}, {:.4}]",
            est.confidence * 100.0,
            est.lower,
            est.upper
        )?;
    }
    writeln!(out, "{rule}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::study::{run_study, StudyConfig};

    fn small_report() -> StudyReport {
        let mut config = StudyConfig::default();
        config.replications = 3;
        run_study(&config).unwrap()
    }

    #[test]
    fn test_metric_accessor_maps_fields() {
        let report = small_report();
        assert_eq!(
            report.metric(Metric::SystemTime).mean,
            report.system_time.mean
        );
        assert_eq!(
            report.metric(Metric::IdleTime).half_width,
            report.idle_time.half_width
        );
    }

    #[test]
    fn test_render_lists_every_metric_block() {
        let report = small_report();
        let mut rendered = Vec::new();
        render_report(&report, &mut rendered).unwrap();
        let text = String::from_utf8(rendered).unwrap();

        assert!(text.contains("REPLICATION STUDY"));
        assert!(text.contains("effective sample size:  3"));
        assert!(text.contains("95% CI:"));
        for metric in Metric::ALL {
            assert!(text.contains(metric.label()), "missing {metric}");
        }
    }

    #[test]
    fn test_render_uses_four_decimal_statistics() {
        let report = small_report();
        let mut rendered = Vec::new();
        render_report(&report, &mut rendered).unwrap();
        let text = String::from_utf8(rendered).unwrap();

        let expected = format!("  mean:       {:.4}", report.system_time.mean);
        assert!(text.contains(&expected));
    }
}
