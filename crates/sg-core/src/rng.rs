//! Deterministic random streams for population synthesis.
//!
//! # Determinism strategy
//!
//! A synthesis run draws from **one** sequential stream, [`SimRng`], seeded
//! from the configured seed.  Per traveler the draw order is fixed:
//!
//! ```text
//! home u, work u, departure jitter   (traveler 0, then 1, …, N-1)
//! ```
//!
//! The synthesizer only sees the [`DrawSource`] trait, so tests can inject a
//! scripted stream and check exactly which value fed which attribute.
//!
//! For parallel generation each traveler gets its own [`PersonRng`] seeded by:
//!
//!   seed = global_seed XOR (person_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  A
//! traveler's draws then depend only on `(global_seed, person_id)`, never on
//! thread scheduling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::PersonId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── DrawSource ────────────────────────────────────────────────────────────────

/// The random draws plan synthesis consumes.
pub trait DrawSource {
    /// A value uniformly distributed in `[0, upper)`.
    ///
    /// `upper` must be finite and strictly positive.
    fn uniform_below(&mut self, upper: f64) -> f64;

    /// A draw from the standard normal distribution N(0, 1).
    fn standard_normal(&mut self) -> f64;
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// The single sequential stream shared by one synthesis run.
///
/// Used only from one thread.  If you need parallel randomness, give each
/// traveler its own [`PersonRng`].
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl DrawSource for SimRng {
    #[inline]
    fn uniform_below(&mut self, upper: f64) -> f64 {
        // `gen_range` on an exclusive float range never returns `upper`.
        self.0.gen_range(0.0..upper)
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}

// ── PersonRng ─────────────────────────────────────────────────────────────────

/// Per-traveler deterministic stream, keyed by `PersonId`.
pub struct PersonRng(SmallRng);

impl PersonRng {
    /// Seed deterministically from the run's global seed and a traveler id.
    pub fn new(global_seed: u64, person: PersonId) -> Self {
        let seed = global_seed ^ (person.0 as u64).wrapping_mul(MIXING_CONSTANT);
        PersonRng(SmallRng::seed_from_u64(seed))
    }
}

impl DrawSource for PersonRng {
    #[inline]
    fn uniform_below(&mut self, upper: f64) -> f64 {
        self.0.gen_range(0.0..upper)
    }

    #[inline]
    fn standard_normal(&mut self) -> f64 {
        self.0.sample(StandardNormal)
    }
}
