//! Per-metric sample series collected across replications.
//!
//! The aggregation layer never sees individual clients, only the
//! per-replication means produced by the engine. [`SampleSet`] keeps the
//! four metric series in lockstep: every retained replication contributes
//! one value to each, so index `i` always refers to the same replication
//! across series.

use std::fmt;

use serde::{Deserialize, Serialize};

use repliq_core::ReplicationResult;

/// The four quantities tracked per replication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Mean time in system.
    SystemTime,
    /// Mean wait in queue.
    QueueWait,
    /// Mean service duration.
    ServiceTime,
    /// Mean server idle gap per client.
    IdleTime,
}

impl Metric {
    /// All metrics in reporting order.
    pub const ALL: [Metric; 4] = [
        Metric::SystemTime,
        Metric::QueueWait,
        Metric::ServiceTime,
        Metric::IdleTime,
    ];

    /// Report heading for this metric.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::SystemTime => "TIME IN SYSTEM",
            Metric::QueueWait => "WAIT IN QUEUE",
            Metric::ServiceTime => "SERVICE TIME",
            Metric::IdleTime => "SERVER IDLE TIME",
        }
    }

    /// Machine-friendly key, used as a column label in data exports.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::SystemTime => "system_time",
            Metric::QueueWait => "queue_wait",
            Metric::ServiceTime => "service_time",
            Metric::IdleTime => "idle_time",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A growable series of per-replication means for one metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    values: Vec<f64>,
}

impl MetricSeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one replication's value.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Number of recorded values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values have been recorded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The recorded values in insertion order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl From<Vec<f64>> for MetricSeries {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

/// One series per metric, all kept at the same length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    system_time: MetricSeries,
    queue_wait: MetricSeries,
    service_time: MetricSeries,
    idle_time: MetricSeries,
}

impl SampleSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one replication's means to every series.
    pub fn record(&mut self, result: &ReplicationResult) {
        self.system_time.push(result.mean_system_time);
        self.queue_wait.push(result.mean_queue_wait);
        self.service_time.push(result.mean_service_time);
        self.idle_time.push(result.mean_idle_time);
    }

    /// Effective sample size. Every series has exactly this length.
    pub fn len(&self) -> usize {
        self.system_time.len()
    }

    /// Whether no replications have been recorded.
    pub fn is_empty(&self) -> bool {
        self.system_time.is_empty()
    }

    /// The series for one metric.
    pub fn series(&self, metric: Metric) -> &MetricSeries {
        match metric {
            Metric::SystemTime => &self.system_time,
            Metric::QueueWait => &self.queue_wait,
            Metric::ServiceTime => &self.service_time,
            Metric::IdleTime => &self.idle_time,
        }
    }
}
