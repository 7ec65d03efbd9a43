//! Study configuration and the replication driver.
//!
//! A study is a fixed number of independent replications of one queue
//! model, each seeded from a linear schedule, reduced to four confidence
//! intervals. The driver runs replications in index order; because every
//! replication builds its own stream from its own seed, the results do
//! not depend on that order.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use repliq_core::{run_replication, LehmerStream, QueueModel, SimError};
use repliq_stats::{summarize, Metric, SampleSet, StatsError};

use crate::report::StudyReport;

/// Linear schedule mapping a replication index to its stream seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSchedule {
    /// Step between consecutive seeds.
    pub multiplier: u64,
    /// Seed handed to replication 0.
    pub offset: u64,
}

impl SeedSchedule {
    /// Seed for replication `index`: `index * multiplier + offset`.
    ///
    /// Call [`SeedSchedule::validate`] first; a validated schedule is
    /// overflow-free and generator-valid for every index below the
    /// validated count.
    pub fn seed_for(&self, index: u64) -> u64 {
        index * self.multiplier + self.offset
    }

    /// Checks every seed the schedule would hand to `count` replications.
    ///
    /// The generator reduces seeds modulo [`LehmerStream::MODULUS`], so
    /// seeds congruent modulo it replay one stream. The modulus is prime,
    /// so a multiplier that is not one of its multiples keeps every pair
    /// of validated seeds distinct modulo it, and each replication starts
    /// from its own generator state.
    ///
    /// # Errors
    ///
    /// Returns [`StudyError::InvalidSeedMultiplier`] for a multiplier of
    /// zero or a multiple of the modulus, and
    /// [`StudyError::SeedSchedule`] when any index overflows or lands on
    /// a seed the generator rejects.
    pub fn validate(&self, count: usize) -> Result<(), StudyError> {
        if self.multiplier % LehmerStream::MODULUS == 0 {
            return Err(StudyError::InvalidSeedMultiplier {
                multiplier: self.multiplier,
            });
        }
        for index in 0..count as u64 {
            let seed = index
                .checked_mul(self.multiplier)
                .and_then(|base| base.checked_add(self.offset))
                .ok_or(StudyError::SeedSchedule { index })?;
            LehmerStream::new(seed).map_err(|_| StudyError::SeedSchedule { index })?;
        }
        Ok(())
    }
}

impl Default for SeedSchedule {
    /// `12345 * index + 12355`: replication 0 draws from seed 12355.
    fn default() -> Self {
        Self {
            multiplier: 12345,
            offset: 12355,
        }
    }
}

/// Full configuration for one replication study.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Number of replications to run.
    pub replications: usize,
    /// Time horizon per replication, in minutes.
    pub horizon: f64,
    /// Confidence level shared by every interval.
    pub confidence: f64,
    /// Seed schedule across replications.
    pub seeds: SeedSchedule,
    /// Queue model shared by every replication.
    pub model: QueueModel,
}

impl Default for StudyConfig {
    /// Thirty one-hour replications at 95% confidence.
    fn default() -> Self {
        Self {
            replications: 30,
            horizon: 60.0,
            confidence: 0.95,
            seeds: SeedSchedule::default(),
            model: QueueModel::default(),
        }
    }
}

impl StudyConfig {
    /// Checks the whole configuration before any replication runs.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: replication count, horizon,
    /// confidence level, model parameters, then the seed schedule.
    pub fn validate(&self) -> Result<(), StudyError> {
        if self.replications == 0 {
            return Err(StudyError::ZeroReplications);
        }
        if !self.horizon.is_finite() {
            return Err(StudyError::Sim(SimError::InvalidHorizon {
                horizon: self.horizon,
            }));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(StudyError::Stats(StatsError::InvalidConfidence {
                confidence: self.confidence,
            }));
        }
        self.model.validate()?;
        self.seeds.validate(self.replications)?;
        Ok(())
    }
}

/// Errors from configuring or running a study.
#[derive(Error, Debug)]
pub enum StudyError {
    /// A study needs at least one replication.
    #[error("replication count must be at least 1")]
    ZeroReplications,

    /// A multiplier of zero or a multiple of the generator modulus would
    /// hand every replication the same stream.
    #[error("invalid seed multiplier {multiplier}: must be positive and not a multiple of 2^31 - 1")]
    InvalidSeedMultiplier {
        /// Rejected multiplier.
        multiplier: u64,
    },

    /// The schedule overflowed or produced a seed the generator rejects.
    #[error("seed schedule produces an invalid seed at replication {index}")]
    SeedSchedule {
        /// Replication index the schedule failed at.
        index: u64,
    },

    /// Engine-level configuration failure.
    #[error(transparent)]
    Sim(#[from] SimError),

    /// Statistical aggregation failure.
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Runs every configured replication and records the retained ones.
///
/// A replication that admits no clients reports all-zero means; those are
/// discarded here so degenerate runs cannot drag every interval toward
/// zero. The returned set's length is the study's effective sample size.
///
/// # Errors
///
/// Returns configuration errors from [`StudyConfig::validate`]. A valid
/// configuration cannot fail mid-study.
pub fn collect_samples(config: &StudyConfig) -> Result<SampleSet, StudyError> {
    config.validate()?;
    let mut samples = SampleSet::new();
    for index in 0..config.replications as u64 {
        let seed = config.seeds.seed_for(index);
        let result = run_replication(&config.model, config.horizon, seed)?;
        if result.mean_system_time > 0.0 {
            debug!(
                replication = index,
                seed,
                clients = result.clients,
                "replication retained"
            );
            samples.record(&result);
        } else {
            warn!(
                replication = index,
                seed, "replication admitted no clients; sample discarded"
            );
        }
    }
    Ok(samples)
}

/// Runs the full study: replications, filtering, and all four intervals.
///
/// # Errors
///
/// Returns configuration errors, and [`StatsError::InsufficientSample`]
/// through [`StudyError::Stats`] when fewer than two replications survive
/// the empty-run filter.
pub fn run_study(config: &StudyConfig) -> Result<StudyReport, StudyError> {
    config.validate()?;
    info!(
        replications = config.replications,
        horizon = config.horizon,
        confidence = config.confidence,
        "starting replication study"
    );
    let samples = collect_samples(config)?;
    let n = samples.len();
    if n < config.replications {
        warn!(
            requested = config.replications,
            effective_n = n,
            "study lost replications to the empty-run filter"
        );
    }

    let system_time = summarize(samples.series(Metric::SystemTime), config.confidence)?;
    let queue_wait = summarize(samples.series(Metric::QueueWait), config.confidence)?;
    let service_time = summarize(samples.series(Metric::ServiceTime), config.confidence)?;
    let idle_time = summarize(samples.series(Metric::IdleTime), config.confidence)?;
    info!(
        effective_n = n,
        t_critical = system_time.t_critical,
        "study complete"
    );

    Ok(StudyReport {
        requested: config.replications,
        n,
        confidence: config.confidence,
        t_critical: system_time.t_critical,
        system_time,
        queue_wait,
        service_time,
        idle_time,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_study_parameters() {
        let config = StudyConfig::default();
        assert_eq!(config.replications, 30);
        assert_eq!(config.horizon, 60.0);
        assert_eq!(config.confidence, 0.95);
        assert_eq!(config.seeds.multiplier, 12345);
        assert_eq!(config.seeds.offset, 12355);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seed_schedule_is_linear() {
        let seeds = SeedSchedule::default();
        assert_eq!(seeds.seed_for(0), 12355);
        assert_eq!(seeds.seed_for(1), 24700);
        assert_eq!(seeds.seed_for(2), 37045);
    }

    #[test]
    fn test_seed_schedule_seeds_are_distinct_and_valid() {
        let seeds = SeedSchedule::default();
        assert!(seeds.validate(30).is_ok());

        let mut seen = std::collections::HashSet::new();
        for index in 0..30 {
            let seed = seeds.seed_for(index);
            assert!(seed > 0);
            assert!(seen.insert(seed), "seed {seed} repeated");
        }
    }

    #[test]
    fn test_seed_schedule_rejects_zero_multiplier() {
        let seeds = SeedSchedule {
            multiplier: 0,
            offset: 10,
        };
        assert!(matches!(
            seeds.validate(2),
            Err(StudyError::InvalidSeedMultiplier { multiplier: 0 })
        ));
    }

    #[test]
    fn test_seed_schedule_rejects_modulus_multiple_multiplier() {
        // Stepping by a multiple of the modulus makes every seed congruent
        // to the offset, so all replications would replay one stream and
        // the intervals would collapse to zero width.
        let aliased = SeedSchedule {
            multiplier: LehmerStream::MODULUS,
            offset: 1,
        };
        assert!(matches!(
            aliased.validate(3),
            Err(StudyError::InvalidSeedMultiplier { .. })
        ));

        let mut config = StudyConfig::default();
        config.seeds.multiplier = 2 * LehmerStream::MODULUS;
        assert!(matches!(
            config.validate(),
            Err(StudyError::InvalidSeedMultiplier { .. })
        ));
    }

    #[test]
    fn test_seed_schedule_rejects_overflow_and_zero_seed() {
        let overflowing = SeedSchedule {
            multiplier: u64::MAX,
            offset: 1,
        };
        assert!(matches!(
            overflowing.validate(3),
            Err(StudyError::SeedSchedule { index: 1 })
        ));

        let zero_start = SeedSchedule {
            multiplier: 5,
            offset: 0,
        };
        assert!(matches!(
            zero_start.validate(1),
            Err(StudyError::SeedSchedule { index: 0 })
        ));
    }

    #[test]
    fn test_config_validation_rejects_bad_inputs() {
        let mut config = StudyConfig::default();
        config.replications = 0;
        assert!(matches!(
            config.validate(),
            Err(StudyError::ZeroReplications)
        ));

        let mut config = StudyConfig::default();
        config.horizon = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(StudyError::Sim(SimError::InvalidHorizon { .. }))
        ));

        let mut config = StudyConfig::default();
        config.confidence = 1.0;
        assert!(matches!(
            config.validate(),
            Err(StudyError::Stats(StatsError::InvalidConfidence { .. }))
        ));

        let mut config = StudyConfig::default();
        config.model.service_rate = -0.4;
        assert!(matches!(
            config.validate(),
            Err(StudyError::Sim(SimError::InvalidRate { .. }))
        ));
    }

    #[test]
    fn test_collect_samples_retains_every_default_replication() {
        // With a 60-minute horizon the first arrival can never overshoot:
        // the largest possible inter-arrival is ln(2^31 - 1)/0.6 < 36.
        let config = StudyConfig::default();
        let samples = collect_samples(&config).unwrap();
        assert_eq!(samples.len(), 30);
    }

    #[test]
    fn test_collect_samples_discards_empty_replications() {
        let mut config = StudyConfig::default();
        config.horizon = 0.0;
        config.replications = 5;
        let samples = collect_samples(&config).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn test_run_study_with_no_valid_samples_is_insufficient() {
        let mut config = StudyConfig::default();
        config.horizon = 0.0;
        assert!(matches!(
            run_study(&config),
            Err(StudyError::Stats(StatsError::InsufficientSample { n: 0 }))
        ));
    }

    #[test]
    fn test_run_study_shares_system_time_t_critical() {
        let mut config = StudyConfig::default();
        config.replications = 5;
        let report = run_study(&config).unwrap();
        assert_eq!(report.t_critical, report.system_time.t_critical);
        assert_eq!(report.t_critical, report.queue_wait.t_critical);
        assert_eq!(report.n, 5);
    }
}
