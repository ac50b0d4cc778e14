//! Synthesis configuration.
//!
//! Every constant the synthesizer uses lives here rather than in module
//! statics, so tests can run with their own values.  `Default` reproduces
//! the reference behaviour.  Both structs load from JSON with missing fields
//! falling back to their defaults.

use serde::{Deserialize, Serialize};

use sg_core::TransportMode;
use sg_core::time::hours;

use crate::{PopulationError, PopulationResult};

// ── ScheduleParams ────────────────────────────────────────────────────────────

/// Constants of the home → work → home schedule heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleParams {
    /// Mean departure from home, seconds since midnight.  Default: 7 h.
    pub baseline_departure_secs: f64,

    /// Standard deviation of the departure jitter before clamping.  Default: 1 h.
    pub jitter_std_secs: f64,

    /// Lower clamp bound of the jitter.  Default: -3600.
    pub jitter_min_secs: f64,

    /// Upper clamp bound of the jitter.  Default: 12000.
    pub jitter_max_secs: f64,

    /// Divisor turning straight-line distance into travel time.  Default: 10.
    pub speed: f64,

    /// Time at work on top of the travel estimate.  Default: 8 h.
    pub work_duration_secs: f64,

    /// Maximum stay recorded on the work activity.  Default: 10 h.
    pub work_max_duration_secs: f64,

    /// Mode of both legs.  Default: car.
    pub mode: TransportMode,
}

impl Default for ScheduleParams {
    fn default() -> Self {
        Self {
            baseline_departure_secs: hours(7.0),
            jitter_std_secs:         hours(1.0),
            jitter_min_secs:         -3_600.0,
            jitter_max_secs:         12_000.0,
            speed:                   10.0,
            work_duration_secs:      hours(8.0),
            work_max_duration_secs:  hours(10.0),
            mode:                    TransportMode::Car,
        }
    }
}

impl ScheduleParams {
    /// Check the constants are internally consistent.
    pub fn validate(&self) -> PopulationResult<()> {
        let finite = [
            ("baseline_departure_secs", self.baseline_departure_secs),
            ("jitter_std_secs", self.jitter_std_secs),
            ("jitter_min_secs", self.jitter_min_secs),
            ("jitter_max_secs", self.jitter_max_secs),
            ("speed", self.speed),
            ("work_duration_secs", self.work_duration_secs),
            ("work_max_duration_secs", self.work_max_duration_secs),
        ];
        if let Some((name, v)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite, got {v}")));
        }
        if self.jitter_min_secs > self.jitter_max_secs {
            return Err(invalid(format!(
                "jitter bounds inverted: min {} > max {}",
                self.jitter_min_secs, self.jitter_max_secs
            )));
        }
        if self.jitter_std_secs < 0.0 {
            return Err(invalid(format!("jitter_std_secs must be >= 0, got {}", self.jitter_std_secs)));
        }
        if self.speed <= 0.0 {
            return Err(invalid(format!("speed must be > 0, got {}", self.speed)));
        }
        if self.work_duration_secs < 0.0 || self.work_max_duration_secs < 0.0 {
            return Err(invalid("work durations must be >= 0".to_owned()));
        }
        Ok(())
    }

    /// Clamp a raw jitter into `[jitter_min_secs, jitter_max_secs]`.
    ///
    /// Call only on validated params (`f64::clamp` panics on inverted bounds).
    #[inline]
    pub fn clamp_jitter(&self, raw: f64) -> f64 {
        raw.clamp(self.jitter_min_secs, self.jitter_max_secs)
    }
}

// ── PopulationConfig ──────────────────────────────────────────────────────────

/// Everything one synthesis run needs besides the network.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Size of the real population being modelled.  Default: 10 000.
    pub total_population: f64,

    /// Sampling factor; the traveler count is `total_population / sample_rate`.
    /// Must be finite and > 0.  Default: 1.0.
    pub sample_rate: f64,

    /// Master RNG seed.  The same seed always yields the same population.
    /// Default: 42.
    pub seed: u64,

    pub schedule: ScheduleParams,
}

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            total_population: 10_000.0,
            sample_rate:      1.0,
            seed:             DEFAULT_SEED,
            schedule:         ScheduleParams::default(),
        }
    }
}

impl PopulationConfig {
    /// Number of travelers to generate: `total_population / sample_rate`,
    /// rounded half up.
    pub fn traveler_count(&self) -> PopulationResult<usize> {
        if !self.total_population.is_finite() || self.total_population < 0.0 {
            return Err(invalid(format!(
                "total_population must be finite and >= 0, got {}",
                self.total_population
            )));
        }
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(invalid(format!("sample_rate must be finite and > 0, got {}", self.sample_rate)));
        }
        let n = (self.total_population / self.sample_rate + 0.5).floor();
        if n > u32::MAX as f64 {
            return Err(invalid(format!("{n} travelers exceeds the id space")));
        }
        Ok(n as usize)
    }

    pub fn validate(&self) -> PopulationResult<()> {
        self.traveler_count()?;
        self.schedule.validate()
    }
}

fn invalid(msg: String) -> PopulationError {
    PopulationError::InvalidParameter(msg)
}
