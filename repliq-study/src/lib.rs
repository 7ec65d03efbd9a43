//! # repliq-study: the replication study driver
//!
//! Ties the engine and the statistics together:
//!
//! - [`study`] - [`StudyConfig`] with its linear [`SeedSchedule`], the
//!   replication loop with its empty-run filter, and [`run_study`]
//! - [`report`] - the assembled [`StudyReport`] and its plain-text
//!   renderer
//! - [`export`] - JSON and CSV sinks for finished reports
//!
//! The `repliq-sim` binary in this crate wraps [`run_study`] behind a
//! command line.
//!
//! ## Example
//!
//! ```
//! use repliq_study::{render_report, run_study, StudyConfig};
//!
//! let mut config = StudyConfig::default();
//! config.replications = 5;
//! let report = run_study(&config)?;
//!
//! let mut rendered = Vec::new();
//! render_report(&report, &mut rendered)?;
//! assert!(!rendered.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod export;
pub mod report;
pub mod study;

pub use export::{export_csv, export_json, CsvExporter, ExportError, JsonExporter, ReportExporter};
pub use report::{render_report, StudyReport};
pub use study::{collect_samples, run_study, SeedSchedule, StudyConfig, StudyError};
