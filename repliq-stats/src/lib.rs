//! # repliq-stats: interval estimation for replication studies
//!
//! Turns the per-replication means produced by `repliq-core` into
//! confidence intervals:
//!
//! - [`series`] - the [`Metric`] taxonomy and lockstep [`SampleSet`]
//!   container replications are recorded into
//! - [`summary`] - sample statistics and two-sided Student-t intervals
//!   via `statrs`
//!
//! ## Example
//!
//! ```
//! use repliq_core::run_replication;
//! use repliq_core::QueueModel;
//! use repliq_stats::{summarize, Metric, SampleSet};
//!
//! let model = QueueModel::default();
//! let mut samples = SampleSet::new();
//! for seed in [12355, 24700, 37045] {
//!     samples.record(&run_replication(&model, 60.0, seed)?);
//! }
//! let report = summarize(samples.series(Metric::SystemTime), 0.95)?;
//! assert!(report.lower <= report.mean && report.mean <= report.upper);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod series;
pub mod summary;

pub use error::StatsError;
pub use series::{Metric, MetricSeries, SampleSet};
pub use summary::{mean, sample_std_dev, summarize, t_critical, ConfidenceReport};
