//! Single-replication engine for a single-server FCFS queue.
//!
//! One replication walks client arrivals forward in time until the first
//! arrival past the horizon, tracking for each admitted client its wait in
//! queue, total time in system, service duration, and the server idle gap
//! that preceded it. The walk is purely sequential: client `k`'s service
//! start depends only on its own arrival and client `k-1`'s departure, so
//! no event calendar is needed.
//!
//! Draw accounting is part of the contract. Every loop iteration consumes
//! exactly two uniforms from the stream, arrival draw first, service draw
//! second, and the horizon check runs only after both draws. The client
//! that straddles the horizon therefore still consumes its pair, which
//! keeps recorded draw sequences replayable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dists::{Exponential, ShiftedExponential};
use crate::error::SimError;
use crate::stream::{LehmerStream, UniformSource};

/// Parameters of the single-server queue under study.
///
/// Rates are per minute. `service_floor` is an incompressible minimum
/// added to every service duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueModel {
    /// Rate of the exponential inter-arrival distribution.
    pub arrival_rate: f64,
    /// Rate of the exponential component of the service distribution.
    pub service_rate: f64,
    /// Minimum service duration in minutes.
    pub service_floor: f64,
}

impl QueueModel {
    /// Checks that both distributions can be built from these parameters.
    ///
    /// # Errors
    ///
    /// Returns the same [`SimError`] the distribution constructors would.
    pub fn validate(&self) -> Result<(), SimError> {
        Exponential::new(self.arrival_rate)?;
        ShiftedExponential::new(self.service_rate, self.service_floor)?;
        Ok(())
    }
}

impl Default for QueueModel {
    /// 0.6 arrivals per minute against 0.4 services per minute with an
    /// 18-second floor.
    fn default() -> Self {
        Self {
            arrival_rate: 0.6,
            service_rate: 0.4,
            service_floor: 0.3,
        }
    }
}

/// Timing record for one admitted client.
///
/// All clocks are minutes from the start of the replication. Exact
/// identities: `queue_wait = service_start - arrival_clock` and
/// `system_time = queue_wait + service_time`, each computed in exactly
/// that form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClientSample {
    /// Absolute arrival time.
    pub arrival_clock: f64,
    /// Gap since the previous arrival.
    pub inter_arrival: f64,
    /// Service duration.
    pub service_time: f64,
    /// Absolute time service began.
    pub service_start: f64,
    /// Time spent waiting in queue before service.
    pub queue_wait: f64,
    /// Total time in system, wait plus service.
    pub system_time: f64,
    /// Server idle gap between the previous departure and this service.
    pub idle_before: f64,
}

/// Iterator over the clients admitted before the horizon.
///
/// Yields one [`ClientSample`] per admitted client in arrival order and
/// fuses once the first arrival past the horizon is seen. Borrows its
/// stream mutably, so the caller can inspect the stream state afterwards.
pub struct Arrivals<'a, S: UniformSource + ?Sized> {
    stream: &'a mut S,
    arrivals: Exponential,
    service: ShiftedExponential,
    horizon: f64,
    prev_arrival_clock: f64,
    prev_service_end: f64,
    done: bool,
}

impl<'a, S: UniformSource + ?Sized> Arrivals<'a, S> {
    /// Builds the client walk for `model` over `[0, horizon]`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidHorizon`] for a NaN or infinite horizon
    /// and the distribution errors for an invalid model.
    pub fn new(model: &QueueModel, horizon: f64, stream: &'a mut S) -> Result<Self, SimError> {
        if !horizon.is_finite() {
            return Err(SimError::InvalidHorizon { horizon });
        }
        Ok(Self {
            arrivals: Exponential::new(model.arrival_rate)?,
            service: ShiftedExponential::new(model.service_rate, model.service_floor)?,
            stream,
            horizon,
            prev_arrival_clock: 0.0,
            prev_service_end: 0.0,
            done: false,
        })
    }
}

impl<'a, S: UniformSource + ?Sized> Iterator for Arrivals<'a, S> {
    type Item = ClientSample;

    fn next(&mut self) -> Option<ClientSample> {
        if self.done {
            return None;
        }
        // Arrival draw, then service draw, then the horizon check. The
        // straddling client consumes both draws even though it is never
        // yielded.
        let inter_arrival = self.arrivals.sample(self.stream);
        let service_time = self.service.sample(self.stream);
        let arrival_clock = self.prev_arrival_clock + inter_arrival;
        if arrival_clock > self.horizon {
            self.done = true;
            return None;
        }
        let service_start = arrival_clock.max(self.prev_service_end);
        let queue_wait = service_start - arrival_clock;
        let system_time = queue_wait + service_time;
        let idle_before = service_start - self.prev_service_end;
        self.prev_arrival_clock = arrival_clock;
        self.prev_service_end = service_start + service_time;
        Some(ClientSample {
            arrival_clock,
            inter_arrival,
            service_time,
            service_start,
            queue_wait,
            system_time,
            idle_before,
        })
    }
}

/// Per-replication means over every admitted client.
///
/// A replication that admitted no clients is the all-zero sentinel; use
/// [`ReplicationResult::is_empty`] rather than comparing means to zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReplicationResult {
    /// Number of clients admitted before the horizon.
    pub clients: u64,
    /// Mean time in system.
    pub mean_system_time: f64,
    /// Mean wait in queue.
    pub mean_queue_wait: f64,
    /// Mean service duration.
    pub mean_service_time: f64,
    /// Mean server idle gap per client.
    pub mean_idle_time: f64,
}

impl ReplicationResult {
    /// The sentinel for a replication that admitted no clients.
    pub const fn empty() -> Self {
        Self {
            clients: 0,
            mean_system_time: 0.0,
            mean_queue_wait: 0.0,
            mean_service_time: 0.0,
            mean_idle_time: 0.0,
        }
    }

    /// Whether this replication admitted no clients.
    pub fn is_empty(&self) -> bool {
        self.clients == 0
    }
}

/// Runs one complete replication and reduces it to per-client means.
///
/// Builds a fresh [`LehmerStream`] from `seed`, walks [`Arrivals`] to the
/// horizon, and averages the four tracked quantities over the admitted
/// clients. Identical arguments produce a bitwise-identical result on a
/// given platform; the uniform stream is exact everywhere, but the
/// `ln`-derived metrics can differ by an ulp across math libraries.
///
/// # Arguments
///
/// * `model` - queue parameters, validated on entry
/// * `horizon` - cutoff in minutes; at or below zero admits no clients
/// * `seed` - stream seed for this replication
///
/// # Errors
///
/// Returns [`SimError`] when the seed, the horizon, or the model is
/// invalid. A valid configuration cannot fail.
///
/// # Examples
///
/// ```
/// use repliq_core::simulate::{run_replication, QueueModel};
///
/// let result = run_replication(&QueueModel::default(), 60.0, 12355)?;
/// assert!(result.clients > 0);
/// assert!(result.mean_system_time >= result.mean_service_time);
/// # Ok::<(), repliq_core::SimError>(())
/// ```
pub fn run_replication(
    model: &QueueModel,
    horizon: f64,
    seed: u64,
) -> Result<ReplicationResult, SimError> {
    let mut stream = LehmerStream::new(seed)?;
    let arrivals = Arrivals::new(model, horizon, &mut stream)?;

    let mut clients: u64 = 0;
    let mut system_sum = 0.0;
    let mut queue_sum = 0.0;
    let mut service_sum = 0.0;
    let mut idle_sum = 0.0;
    for client in arrivals {
        clients += 1;
        system_sum += client.system_time;
        queue_sum += client.queue_wait;
        service_sum += client.service_time;
        idle_sum += client.idle_before;
    }

    if clients == 0 {
        debug!(seed, horizon, "no clients admitted before the horizon");
        return Ok(ReplicationResult::empty());
    }

    let n = clients as f64;
    let result = ReplicationResult {
        clients,
        mean_system_time: system_sum / n,
        mean_queue_wait: queue_sum / n,
        mean_service_time: service_sum / n,
        mean_idle_time: idle_sum / n,
    };
    debug!(
        seed,
        clients,
        mean_system_time = result.mean_system_time,
        "replication complete"
    );
    Ok(result)
}
