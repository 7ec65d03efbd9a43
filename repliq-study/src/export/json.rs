//! JSON export of the full study report.

use std::fs;
use std::path::Path;

use tracing::info;

use super::{ExportError, ReportExporter};
use crate::report::StudyReport;

/// Serializes the whole report, samples included, with `serde_json`.
///
/// The document deserializes back into a [`StudyReport`], so an exported
/// study can be reloaded and re-rendered without rerunning anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    /// Creates an exporter; `pretty` selects indented output.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &StudyReport, path: &Path) -> Result<(), ExportError> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        fs::write(path, payload)?;
        info!(
            path = %path.display(),
            format = self.format_name(),
            "exported study report"
        );
        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}
