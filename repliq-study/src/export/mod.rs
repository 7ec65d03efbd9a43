//! Export of study reports to machine-readable formats.
//!
//! JSON carries the whole report in one document, per-replication samples
//! included. CSV splits the same data into a summary table and a samples
//! table written side by side, which loads cleanly into spreadsheet and
//! dataframe tools.

pub mod csv;
pub mod json;

pub use csv::CsvExporter;
pub use json::JsonExporter;

use std::path::Path;

use thiserror::Error;

use crate::report::StudyReport;

/// Errors from writing a report to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Underlying file I/O failed.
    #[error("failed writing report file")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("failed serializing report to JSON")]
    Json(#[from] serde_json::Error),
}

/// A sink format for finished study reports.
pub trait ReportExporter {
    /// Writes `report` to the file (or file family) rooted at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] when serialization or file I/O fails.
    fn export(&self, report: &StudyReport, path: &Path) -> Result<(), ExportError>;

    /// Short format name for logs.
    fn format_name(&self) -> &'static str;
}

/// Writes `report` as a JSON document at `path`.
///
/// # Errors
///
/// Returns [`ExportError`] when serialization or file I/O fails.
pub fn export_json(report: &StudyReport, path: &Path, pretty: bool) -> Result<(), ExportError> {
    JsonExporter::new(pretty).export(report, path)
}

/// Writes the summary and samples CSV tables derived from `path`.
///
/// # Errors
///
/// Returns [`ExportError`] when file I/O fails.
pub fn export_csv(report: &StudyReport, path: &Path) -> Result<(), ExportError> {
    CsvExporter::new().export(report, path)
}
