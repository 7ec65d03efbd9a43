//! # repliq
//!
//! Monte Carlo replication studies of a single-server FCFS queue, split
//! across three crates and re-exported here:
//!
//! - `repliq-core` - deterministic Lehmer streams, inverse-transform
//!   samplers, and the per-replication client walk
//! - `repliq-stats` - metric series and Student-t interval estimation
//! - `repliq-study` - the study driver, report rendering, and exports
//!
//! Most callers only need [`prelude`]:
//!
//! ```
//! use repliq::prelude::*;
//!
//! let mut config = StudyConfig::default();
//! config.replications = 3;
//! let report = run_study(&config)?;
//! assert_eq!(report.n, 3);
//! # Ok::<(), repliq::StudyError>(())
//! ```

pub use repliq_core::logging;
pub use repliq_core::{
    run_replication, Arrivals, ClientSample, Exponential, LehmerStream, QueueModel, ReplayStream,
    ReplicationResult, ShiftedExponential, SimError, UniformSource,
};
pub use repliq_stats::{
    mean, sample_std_dev, summarize, t_critical, ConfidenceReport, Metric, MetricSeries,
    SampleSet, StatsError,
};
pub use repliq_study::{
    collect_samples, export_csv, export_json, render_report, run_study, CsvExporter, ExportError,
    JsonExporter, ReportExporter, SeedSchedule, StudyConfig, StudyError, StudyReport,
};

/// One-line import for study scripts.
pub mod prelude {
    pub use repliq_core::{run_replication, QueueModel, ReplicationResult, SimError};
    pub use repliq_stats::{summarize, ConfidenceReport, Metric, SampleSet};
    pub use repliq_study::{render_report, run_study, SeedSchedule, StudyConfig, StudyReport};
}
