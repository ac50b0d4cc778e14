//! Unit tests for sg-population.

use std::collections::VecDeque;

use sg_core::{Coord, DrawSource};
use sg_network::{Network, NetworkBuilder};

use crate::{Activity, ActivityType, Plan, PlanElement};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Links of length 10, 20 and 70 (total 100).  "short" sits at the origin,
/// "long" at (3000, 4000), i.e. 5 km away.
fn weighted_network() -> Network {
    let mut b = NetworkBuilder::new();
    b.add_link_at("short", Coord::new(0.0, 0.0), 10.0).unwrap();
    b.add_link_at("medium", Coord::new(0.0, 1_000.0), 20.0).unwrap();
    b.add_link_at("long", Coord::new(3_000.0, 4_000.0), 70.0).unwrap();
    b.build()
}

/// A scripted draw source.  Uniform values are given as fractions of
/// `upper`; every call is recorded so tests can check draw order.
struct ScriptedDraws {
    uniforms: VecDeque<f64>,
    normals:  VecDeque<f64>,
    calls:    Vec<&'static str>,
}

impl ScriptedDraws {
    fn new(uniforms: &[f64], normals: &[f64]) -> Self {
        Self {
            uniforms: uniforms.iter().copied().collect(),
            normals:  normals.iter().copied().collect(),
            calls:    Vec::new(),
        }
    }
}

impl DrawSource for ScriptedDraws {
    fn uniform_below(&mut self, upper: f64) -> f64 {
        self.calls.push("uniform");
        self.uniforms.pop_front().expect("script ran out of uniforms") * upper
    }

    fn standard_normal(&mut self) -> f64 {
        self.calls.push("normal");
        self.normals.pop_front().expect("script ran out of normals")
    }
}

fn activities(plan: &Plan) -> Vec<&Activity> {
    plan.activities().collect()
}

// ── Plan model ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_model {
    use sg_core::{Coord, PersonId, TransportMode};

    use super::*;
    use crate::{Leg, Person, Population, PopulationError};

    #[test]
    fn push_trip_alternates() {
        let mut plan = Plan::new(Activity::at(ActivityType::Home, Coord::new(0.0, 0.0)));
        plan.push_trip(Leg::new(TransportMode::Walk), Activity::at(ActivityType::Work, Coord::new(1.0, 1.0)));
        let kinds: Vec<bool> = plan
            .elements()
            .iter()
            .map(|e| matches!(e, PlanElement::Activity(_)))
            .collect();
        assert_eq!(kinds, [true, false, true]);
        assert_eq!(plan.trip_count(), 1);
        assert_eq!(plan.legs().next().unwrap().mode, TransportMode::Walk);
    }

    #[test]
    fn first_plan_is_selected() {
        let mut p = Person::new(PersonId(0));
        assert!(p.selected_plan().is_none());
        let plan = Plan::new(Activity::at(ActivityType::Home, Coord::new(0.0, 0.0)));
        p.add_plan(plan.clone());
        p.add_plan(Plan::new(Activity::at(ActivityType::Work, Coord::new(0.0, 0.0))));
        assert_eq!(p.plans().len(), 2);
        assert_eq!(p.selected_index(), Some(0));
        assert_eq!(p.selected_plan(), Some(&plan));
    }

    #[test]
    fn population_lookup_by_id() {
        let mut pop = Population::new();
        pop.push(Person::new(PersonId(0))).unwrap();
        pop.push(Person::new(PersonId(1))).unwrap();
        assert_eq!(pop.len(), 2);
        assert_eq!(pop.get(PersonId(1)).unwrap().id, PersonId(1));
        assert!(pop.get(PersonId(2)).is_none());
    }

    #[test]
    fn out_of_order_push_rejected() {
        let mut pop = Population::new();
        pop.push(Person::new(PersonId(0))).unwrap();
        let err = pop.push(Person::new(PersonId(5))).unwrap_err();
        assert!(
            matches!(err, PopulationError::PersonOutOfOrder { expected: 1, found: PersonId(5) }),
            "{err}"
        );
        assert_eq!(pop.len(), 1);
    }

    #[test]
    fn from_vec_checks_id_order() {
        let ok = Population::try_from(vec![Person::new(PersonId(0)), Person::new(PersonId(1))]);
        assert_eq!(ok.unwrap().len(), 2);

        let swapped = Population::try_from(vec![Person::new(PersonId(1)), Person::new(PersonId(0))]);
        assert!(matches!(
            swapped,
            Err(PopulationError::PersonOutOfOrder { expected: 0, found: PersonId(1) })
        ));
    }

    #[test]
    fn deserialized_out_of_order_population_hides_mismatched_ids() {
        let pop: Population = serde_json::from_str(
            r#"{ "persons": [ { "id": 1, "plans": [], "selected": null } ] }"#,
        )
        .unwrap();
        assert!(pop.get(PersonId(0)).is_none());
    }

    #[test]
    fn dangling_selection_yields_no_plan() {
        let p: Person =
            serde_json::from_str(r#"{ "id": 0, "plans": [], "selected": 3 }"#).unwrap();
        assert_eq!(p.selected_index(), Some(3));
        assert!(p.selected_plan().is_none());
    }

    #[test]
    fn activity_type_codes() {
        assert_eq!(ActivityType::Home.as_str(), "home");
        assert_eq!(ActivityType::Work.code(), "w");
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::{PopulationConfig, PopulationError, ScheduleParams};

    #[test]
    fn defaults_match_reference_constants() {
        let p = ScheduleParams::default();
        assert_eq!(p.baseline_departure_secs, 25_200.0);
        assert_eq!(p.jitter_std_secs, 3_600.0);
        assert_eq!((p.jitter_min_secs, p.jitter_max_secs), (-3_600.0, 12_000.0));
        assert_eq!(p.speed, 10.0);
        assert_eq!(p.work_duration_secs, 28_800.0);
        assert_eq!(p.work_max_duration_secs, 36_000.0);
        assert!(p.validate().is_ok());

        let c = PopulationConfig::default();
        assert_eq!(c.seed, 42);
        assert_eq!(c.traveler_count().unwrap(), 10_000);
    }

    #[test]
    fn traveler_count_rounds_half_up() {
        let mut c = PopulationConfig { total_population: 1_000.0, sample_rate: 0.5, ..Default::default() };
        assert_eq!(c.traveler_count().unwrap(), 2_000);
        c.total_population = 2.5;
        c.sample_rate = 1.0;
        assert_eq!(c.traveler_count().unwrap(), 3);
        c.total_population = 0.0;
        assert_eq!(c.traveler_count().unwrap(), 0);
    }

    #[test]
    fn bad_counts_rejected() {
        for (total, rate) in [(-1.0, 1.0), (f64::NAN, 1.0), (100.0, 0.0), (100.0, -0.1)] {
            let c = PopulationConfig { total_population: total, sample_rate: rate, ..Default::default() };
            assert!(
                matches!(c.traveler_count(), Err(PopulationError::InvalidParameter(_))),
                "total={total} rate={rate}"
            );
        }
    }

    #[test]
    fn inverted_jitter_bounds_rejected() {
        let p = ScheduleParams { jitter_min_secs: 100.0, jitter_max_secs: -100.0, ..Default::default() };
        assert!(matches!(p.validate(), Err(PopulationError::InvalidParameter(_))));
    }

    #[test]
    fn non_positive_speed_rejected() {
        let p = ScheduleParams { speed: 0.0, ..Default::default() };
        assert!(matches!(p.validate(), Err(PopulationError::InvalidParameter(_))));
        let p = ScheduleParams { work_duration_secs: f64::INFINITY, ..Default::default() };
        assert!(matches!(p.validate(), Err(PopulationError::InvalidParameter(_))));
    }

    #[test]
    fn clamp_jitter_bounds() {
        let p = ScheduleParams::default();
        assert_eq!(p.clamp_jitter(-50_000.0), -3_600.0);
        assert_eq!(p.clamp_jitter(50_000.0), 12_000.0);
        assert_eq!(p.clamp_jitter(1_234.0), 1_234.0);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let c: PopulationConfig =
            serde_json::from_str(r#"{ "total_population": 500, "schedule": { "speed": 5.0, "mode": "bike" } }"#)
                .unwrap();
        assert_eq!(c.total_population, 500.0);
        assert_eq!(c.sample_rate, 1.0);
        assert_eq!(c.seed, 42);
        assert_eq!(c.schedule.speed, 5.0);
        assert_eq!(c.schedule.mode, sg_core::TransportMode::Bike);
        assert_eq!(c.schedule.jitter_max_secs, 12_000.0);
    }
}

// ── Synthesis ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod synthesis {
    use sg_core::{LinkId, PersonId, SimRng, TransportMode};
    use sg_network::NetworkError;

    use super::*;
    use crate::{
        naive_travel_time, synthesize_population, PlanSynthesizer, PopulationConfig,
        PopulationError, ScheduleParams,
    };

    fn synth(net: &Network) -> PlanSynthesizer<'_> {
        PlanSynthesizer::new(net, ScheduleParams::default()).unwrap()
    }

    #[test]
    fn scripted_traveler_has_exact_schedule() {
        let net = weighted_network();
        let s = synth(&net);
        // home u = 5 → "short", work u = 50 → "long", jitter 0.5 h
        let mut draws = ScriptedDraws::new(&[0.05, 0.50], &[0.5]);
        let person = s.person(PersonId(0), &mut draws).unwrap();
        let plan = person.selected_plan().unwrap();
        let acts = activities(plan);

        let home = acts[0];
        let work = acts[1];
        assert_eq!(home.link, Some(LinkId(0)));
        assert_eq!(home.coord, Coord::new(0.0, 0.0));
        assert_eq!(work.link, Some(LinkId(2)));
        assert_eq!(home.link_name.as_deref(), Some("short"));
        assert_eq!(work.link_name.as_deref(), Some("long"));
        assert_eq!(work.coord, Coord::new(3_000.0, 4_000.0));

        assert_eq!(home.end_time, Some(25_200.0 + 1_800.0));
        assert_eq!(home.start_time, None);
        assert_eq!(work.start_time, Some(27_000.0));
        // 5 km at speed 10 → 500 s
        assert_eq!(work.end_time, Some(27_000.0 + 28_800.0 + 500.0));
        assert_eq!(work.max_duration, Some(36_000.0));
    }

    #[test]
    fn draws_are_consumed_in_fixed_order() {
        let net = weighted_network();
        let s = synth(&net);
        let mut draws = ScriptedDraws::new(&[0.1, 0.2, 0.3, 0.4], &[0.0, 0.0]);
        s.synthesize(2, &mut draws).unwrap();
        assert_eq!(
            draws.calls,
            ["uniform", "uniform", "normal", "uniform", "uniform", "normal"]
        );
    }

    #[test]
    fn jitter_is_clamped() {
        let net = weighted_network();
        let s = synth(&net);
        let cases = [(-5.0, 25_200.0 - 3_600.0), (10.0, 25_200.0 + 12_000.0), (-1.0, 21_600.0)];
        for (z, expected_end) in cases {
            let mut draws = ScriptedDraws::new(&[0.0, 0.0], &[z]);
            let person = s.person(PersonId(0), &mut draws).unwrap();
            let home = activities(person.selected_plan().unwrap())[0];
            assert_eq!(home.end_time, Some(expected_end), "z = {z}");
        }
    }

    #[test]
    fn same_link_for_home_and_work_is_allowed() {
        let net = weighted_network();
        let s = synth(&net);
        let mut draws = ScriptedDraws::new(&[0.9, 0.95], &[0.0]);
        let person = s.person(PersonId(0), &mut draws).unwrap();
        let acts = activities(person.selected_plan().unwrap());
        assert_eq!(acts[0].link, acts[1].link);
        // zero distance → zero travel time
        assert_eq!(acts[1].end_time, Some(25_200.0 + 28_800.0));
    }

    #[test]
    fn chains_are_well_formed() {
        let net = weighted_network();
        let pop = synth(&net).synthesize(200, &mut SimRng::new(3)).unwrap();
        for person in &pop {
            assert_eq!(person.plans().len(), 1);
            let plan = person.selected_plan().unwrap();
            let shape: Vec<&str> = plan
                .elements()
                .iter()
                .map(|e| match e {
                    PlanElement::Activity(a) => a.kind.as_str(),
                    PlanElement::Leg(_) => "leg",
                })
                .collect();
            assert_eq!(shape, ["home", "leg", "work", "leg", "home"]);

            let acts = activities(plan);
            assert_eq!(acts[0].coord, acts[2].coord);
            assert_eq!(acts[0].link, acts[2].link);
            assert_eq!(acts[2].start_time, None);
            assert_eq!(acts[2].end_time, None);
            assert!(plan.legs().all(|l| l.mode == TransportMode::Car));
        }
    }

    #[test]
    fn timing_is_consistent() {
        let net = weighted_network();
        let params = ScheduleParams::default();
        let pop = synth(&net).synthesize(500, &mut SimRng::new(11)).unwrap();
        for person in &pop {
            let acts = activities(person.selected_plan().unwrap());
            let (home, work) = (acts[0], acts[1]);
            let depart = home.end_time.unwrap();
            assert_eq!(work.start_time, Some(depart));

            let travel = naive_travel_time(home.coord, work.coord, params.speed);
            assert!(travel >= 0.0);
            assert_eq!(work.end_time, Some(depart + params.work_duration_secs + travel));

            let offset = depart - params.baseline_departure_secs;
            assert!(
                (-3_600.0..=12_000.0).contains(&offset),
                "person {} offset {offset}",
                person.id
            );
        }
    }

    #[test]
    fn count_and_ids() {
        let net = weighted_network();
        let pop = synth(&net).synthesize(25, &mut SimRng::new(0)).unwrap();
        assert_eq!(pop.len(), 25);
        for (i, person) in pop.iter().enumerate() {
            assert_eq!(person.id, PersonId(i as u32));
            assert_eq!(person.plans().len(), 1);
        }
    }

    #[test]
    fn zero_travelers_gives_empty_population() {
        let net = weighted_network();
        let pop = synth(&net).synthesize(0, &mut SimRng::new(0)).unwrap();
        assert!(pop.is_empty());
    }

    #[test]
    fn same_seed_same_population() {
        let net = weighted_network();
        let s = synth(&net);
        let a = s.synthesize(300, &mut SimRng::new(42)).unwrap();
        let b = s.synthesize(300, &mut SimRng::new(42)).unwrap();
        assert_eq!(a, b);

        let c = s.synthesize(300, &mut SimRng::new(43)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn empty_network_rejected() {
        let net = Network::empty();
        let err = PlanSynthesizer::new(&net, ScheduleParams::default()).err().unwrap();
        assert!(matches!(err, PopulationError::Network(NetworkError::EmptyNetwork)), "{err}");

        let cfg = PopulationConfig { total_population: 0.0, ..Default::default() };
        assert!(matches!(
            synthesize_population(&net, &cfg),
            Err(PopulationError::Network(NetworkError::EmptyNetwork))
        ));
    }

    #[test]
    fn invalid_params_rejected_before_sampling() {
        let net = Network::empty();
        let params = ScheduleParams { jitter_min_secs: 1.0, jitter_max_secs: 0.0, ..Default::default() };
        let err = PlanSynthesizer::new(&net, params).err().unwrap();
        assert!(matches!(err, PopulationError::InvalidParameter(_)), "{err}");
    }

    #[test]
    fn home_locations_follow_link_length() {
        let net = weighted_network();
        let pop = synth(&net).synthesize(20_000, &mut SimRng::new(5)).unwrap();
        let mut counts = [0usize; 3];
        for person in &pop {
            let home = activities(person.selected_plan().unwrap())[0];
            counts[home.link.unwrap().index()] += 1;
        }
        let freq: Vec<f64> = counts.iter().map(|&c| c as f64 / 20_000.0).collect();
        assert!((freq[0] - 0.1).abs() < 0.02, "{freq:?}");
        assert!((freq[1] - 0.2).abs() < 0.02, "{freq:?}");
        assert!((freq[2] - 0.7).abs() < 0.02, "{freq:?}");
    }

    #[test]
    fn config_entry_point_uses_seed() {
        let net = weighted_network();
        let cfg = PopulationConfig { total_population: 50.0, seed: 9, ..Default::default() };
        let a = synthesize_population(&net, &cfg).unwrap();
        let b = synth(&net).synthesize(50, &mut SimRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_is_keyed_by_person() {
        use sg_core::PersonRng;

        let net = weighted_network();
        let s = synth(&net);
        let a = s.synthesize_parallel(400, 7).unwrap();
        let b = s.synthesize_parallel(400, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 400);

        let id = PersonId(123);
        let single = s.person(id, &mut PersonRng::new(7, id)).unwrap();
        assert_eq!(a.get(id), Some(&single));
    }
}
