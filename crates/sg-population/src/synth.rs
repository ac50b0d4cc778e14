//! Home → work → home plan synthesis.
//!
//! One [`PlanSynthesizer`] owns one [`LinkSampler`] for the whole run.
//! [`PlanSynthesizer::synthesize`] walks traveler indices `0..total` in order
//! and consumes, per traveler, exactly three draws from the shared stream:
//!
//! 1. `uniform_below(total_length)` → home link
//! 2. `uniform_below(total_length)` → work link
//! 3. `standard_normal()`           → departure jitter
//!
//! Reordering these calls changes every traveler after the first, so the
//! order is part of the output contract.

use log::{debug, info, warn};

use sg_core::{Coord, DrawSource, PersonId, SimRng};
use sg_network::{LinkSampler, Network};

use crate::{
    Activity, ActivityType, Leg, Person, Plan, Population, PopulationConfig, PopulationError,
    PopulationResult, ScheduleParams,
};

/// Straight-line travel time estimate: `|home - work| / speed`.
///
/// A placeholder heuristic, not a routed travel time.
#[inline]
pub fn naive_travel_time(home: Coord, work: Coord, speed: f64) -> f64 {
    home.distance(work) / speed
}

/// Builds populations from one network under fixed schedule parameters.
pub struct PlanSynthesizer<'a> {
    sampler: LinkSampler<'a>,
    params:  ScheduleParams,
}

impl<'a> PlanSynthesizer<'a> {
    /// Validate `params` and index `network` for sampling.
    ///
    /// # Errors
    ///
    /// - [`PopulationError::InvalidParameter`] for inconsistent `params`.
    /// - [`PopulationError::Network`] wrapping `EmptyNetwork` if the network
    ///   has no links.
    pub fn new(network: &'a Network, params: ScheduleParams) -> PopulationResult<Self> {
        params.validate()?;
        let sampler = LinkSampler::new(network)?;
        debug!("schedule parameters: {params:?}");
        Ok(Self { sampler, params })
    }

    pub fn sampler(&self) -> &LinkSampler<'a> {
        &self.sampler
    }

    pub fn params(&self) -> &ScheduleParams {
        &self.params
    }

    /// Generate `total` travelers, ids `0..total`, drawing sequentially from
    /// `rng`.
    ///
    /// Either the whole population is returned or an error; no partial
    /// population escapes.
    pub fn synthesize<R: DrawSource + ?Sized>(
        &self,
        total: usize,
        rng: &mut R,
    ) -> PopulationResult<Population> {
        check_total(total)?;

        let mut population = Population::with_capacity(total);
        for i in 0..total {
            let person = self.person(PersonId(i as u32), rng)?;
            population.push(person)?;
        }

        info!("synthesized {} travelers", population.len());
        Ok(population)
    }

    /// Generate `total` travelers in parallel.
    ///
    /// Traveler `i` draws from its own `PersonRng::new(seed, PersonId(i))`,
    /// so the result depends only on `(network, params, total, seed)` and is
    /// identical for any thread count.  It differs from [`synthesize`]
    /// with a `SimRng` of the same seed, which shares one stream.
    ///
    /// [`synthesize`]: Self::synthesize
    #[cfg(feature = "parallel")]
    pub fn synthesize_parallel(&self, total: usize, seed: u64) -> PopulationResult<Population> {
        use rayon::prelude::*;
        use sg_core::PersonRng;

        check_total(total)?;

        let persons = (0..total)
            .into_par_iter()
            .map(|i| {
                let id = PersonId(i as u32);
                let mut rng = PersonRng::new(seed, id);
                self.person(id, &mut rng)
            })
            .collect::<PopulationResult<Vec<Person>>>()?;

        info!("synthesized {} travelers (parallel)", persons.len());
        Population::try_from(persons)
    }

    /// Generate one traveler with a single home → work → home plan.
    pub fn person<R: DrawSource + ?Sized>(
        &self,
        id: PersonId,
        rng: &mut R,
    ) -> PopulationResult<Person> {
        let p = &self.params;

        let home_link = self.sampler.sample(rng)?;
        let work_link = self.sampler.sample(rng)?;
        let jitter = p.clamp_jitter(rng.standard_normal() * p.jitter_std_secs);

        let departure = p.baseline_departure_secs + jitter;
        let travel = naive_travel_time(home_link.coord, work_link.coord, p.speed);

        let home = Activity::on_link(ActivityType::Home, home_link).with_end_time(departure);
        let work = Activity::on_link(ActivityType::Work, work_link)
            .with_start_time(departure)
            .with_end_time(departure + p.work_duration_secs + travel)
            .with_max_duration(p.work_max_duration_secs);
        let home_again = Activity::on_link(ActivityType::Home, home_link);

        let mut plan = Plan::new(home);
        plan.push_trip(Leg::new(p.mode), work);
        plan.push_trip(Leg::new(p.mode), home_again);

        let mut person = Person::new(id);
        person.add_plan(plan);
        Ok(person)
    }
}

/// Convenience entry point: size the run from `config`, seed a [`SimRng`]
/// and synthesize sequentially.
pub fn synthesize_population(
    network: &Network,
    config: &PopulationConfig,
) -> PopulationResult<Population> {
    let total = config.traveler_count()?;
    let synth = PlanSynthesizer::new(network, config.schedule.clone())?;
    let mut rng = SimRng::new(config.seed);
    synth.synthesize(total, &mut rng)
}

fn check_total(total: usize) -> PopulationResult<()> {
    if total == 0 {
        warn!("synthesizing an empty population (total = 0)");
    } else if PersonId::from_index(total - 1).is_err() {
        return Err(PopulationError::InvalidParameter(format!(
            "{total} travelers exceeds the id space"
        )));
    }
    Ok(())
}
