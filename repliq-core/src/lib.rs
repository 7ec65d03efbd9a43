//! # repliq-core: deterministic replication engine
//!
//! Building blocks for Monte Carlo replication studies of a single-server
//! FCFS queue:
//!
//! - [`stream`] - seedable Lehmer uniform streams behind the
//!   [`UniformSource`] trait, plus a scripted replay stream
//! - [`dists`] - inverse-transform exponential samplers that consume
//!   exactly one uniform per variate
//! - [`simulate`] - the per-replication client walk and its reduction to
//!   per-client means
//! - [`logging`] - `tracing` subscriber setup shared by the study crates
//!
//! Everything here is deterministic by construction: a `(model, horizon,
//! seed)` triple maps to exactly one [`ReplicationResult`] for a given
//! platform. The generator recurrence is integer-exact everywhere; the
//! variates go through `f64::ln`, which math libraries may round
//! differently in the last ulp.
//!
//! ## Example
//!
//! ```
//! use repliq_core::{run_replication, QueueModel};
//!
//! let model = QueueModel::default();
//! let result = run_replication(&model, 60.0, 12355)?;
//! println!(
//!     "{} clients, mean wait {:.4} min",
//!     result.clients, result.mean_queue_wait
//! );
//! # Ok::<(), repliq_core::SimError>(())
//! ```

pub mod dists;
pub mod error;
pub mod logging;
pub mod simulate;
pub mod stream;

pub use dists::{Exponential, ShiftedExponential};
pub use error::SimError;
pub use simulate::{run_replication, Arrivals, ClientSample, QueueModel, ReplicationResult};
pub use stream::{LehmerStream, ReplayStream, UniformSource};
