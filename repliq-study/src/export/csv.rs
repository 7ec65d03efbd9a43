//! CSV export split into summary and samples tables.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use repliq_stats::Metric;

use super::{ExportError, ReportExporter};
use crate::report::StudyReport;

/// Writes two plain CSV files derived from the requested path: a
/// `*_summary.csv` table with one row per metric and a `*_samples.csv`
/// table with one row per retained replication.
///
/// Values are written in full precision rather than the report's fixed
/// four decimals, so downstream analysis sees exactly what the study
/// computed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvExporter;

impl CsvExporter {
    /// Creates the exporter.
    pub fn new() -> Self {
        Self
    }

    fn path_for(path: &Path, table: &str) -> PathBuf {
        let stem = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("report");
        path.with_file_name(format!("{stem}_{table}.csv"))
    }

    fn write_summary(report: &StudyReport, path: &Path) -> Result<(), ExportError> {
        let mut out = BufWriter::new(File::create(path)?);
        writeln!(
            out,
            "metric,n,confidence,t_critical,mean,std_dev,half_width,ci_lower,ci_upper"
        )?;
        for metric in Metric::ALL {
            let est = report.metric(metric);
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                metric.key(),
                est.n,
                est.confidence,
                est.t_critical,
                est.mean,
                est.std_dev,
                est.half_width,
                est.lower,
                est.upper
            )?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_samples(report: &StudyReport, path: &Path) -> Result<(), ExportError> {
        let mut out = BufWriter::new(File::create(path)?);
        let columns: Vec<&str> = Metric::ALL.iter().map(|metric| metric.key()).collect();
        writeln!(out, "replication,{}", columns.join(","))?;
        for index in 0..report.samples.len() {
            write!(out, "{index}")?;
            for metric in Metric::ALL {
                write!(out, ",{}", report.samples.series(metric).values()[index])?;
            }
            writeln!(out)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl ReportExporter for CsvExporter {
    fn export(&self, report: &StudyReport, path: &Path) -> Result<(), ExportError> {
        let summary_path = Self::path_for(path, "summary");
        let samples_path = Self::path_for(path, "samples");
        Self::write_summary(report, &summary_path)?;
        Self::write_samples(report, &samples_path)?;
        info!(
            summary = %summary_path.display(),
            samples = %samples_path.display(),
            format = self.format_name(),
            "exported study report"
        );
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "csv"
    }
}
