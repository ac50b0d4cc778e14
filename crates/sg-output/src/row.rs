//! Flat row type for tabular backends.

use sg_core::PersonId;
use sg_population::{PlanElement, Population};

/// One plan element of one plan of one person.
///
/// Activity-only fields are `None` on leg rows and vice versa.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanElementRow {
    pub person_id:     PersonId,
    pub plan_index:    usize,
    pub selected:      bool,
    pub element_index: usize,
    pub element:       &'static str,
    pub act_type:      Option<&'static str>,
    pub x:             Option<f64>,
    pub y:             Option<f64>,
    /// External link id (`Link::name`), not the internal `LinkId` index.
    pub link_id:       Option<String>,
    pub start_time:    Option<f64>,
    pub end_time:      Option<f64>,
    pub max_duration:  Option<f64>,
    pub mode:          Option<&'static str>,
}

impl PlanElementRow {
    /// Flatten a whole population, person by person, plan by plan.
    pub fn flatten(population: &Population) -> impl Iterator<Item = PlanElementRow> + '_ {
        population.iter().flat_map(|person| {
            let selected = person.selected_index();
            person.plans().iter().enumerate().flat_map(move |(plan_index, plan)| {
                plan.elements().iter().enumerate().map(move |(element_index, el)| {
                    let mut row = PlanElementRow {
                        person_id: person.id,
                        plan_index,
                        selected: selected == Some(plan_index),
                        element_index,
                        element: "activity",
                        act_type: None,
                        x: None,
                        y: None,
                        link_id: None,
                        start_time: None,
                        end_time: None,
                        max_duration: None,
                        mode: None,
                    };
                    match el {
                        PlanElement::Activity(a) => {
                            row.act_type = Some(a.kind.as_str());
                            row.x = Some(a.coord.x);
                            row.y = Some(a.coord.y);
                            row.link_id = a.link_name.clone();
                            row.start_time = a.start_time;
                            row.end_time = a.end_time;
                            row.max_duration = a.max_duration;
                        }
                        PlanElement::Leg(l) => {
                            row.element = "leg";
                            row.mode = Some(l.mode.as_str());
                        }
                    }
                    row
                })
            })
        })
    }
}
