//! `Plan`: one traveler's day as an alternating activity/leg chain.

use serde::{Deserialize, Serialize};

use crate::{Activity, Leg, PlanElement};

/// An ordered chain `activity, leg, activity, …, activity`.
///
/// The chain starts and ends with an activity and strictly alternates.  The
/// only way to extend it is [`push_trip`](Self::push_trip), which appends a
/// leg and the activity it leads to, so the shape holds by construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    elements: Vec<PlanElement>,
}

impl Plan {
    /// A plan consisting of a single activity.
    pub fn new(first: Activity) -> Self {
        Self { elements: vec![PlanElement::Activity(first)] }
    }

    /// Append a trip: `leg` followed by the activity it arrives at.
    pub fn push_trip(&mut self, leg: Leg, next: Activity) {
        self.elements.reserve(2);
        self.elements.push(PlanElement::Leg(leg));
        self.elements.push(PlanElement::Activity(next));
    }

    /// Read-only slice of the whole chain.
    pub fn elements(&self) -> &[PlanElement] {
        &self.elements
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.elements.iter().filter_map(PlanElement::as_activity)
    }

    pub fn legs(&self) -> impl Iterator<Item = &Leg> + '_ {
        self.elements.iter().filter_map(PlanElement::as_leg)
    }

    /// Number of trips (legs) in the plan.
    pub fn trip_count(&self) -> usize {
        self.elements.len() / 2
    }
}
