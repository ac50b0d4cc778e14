//! Plan building blocks: `Activity`, `Leg`, and `PlanElement`.
//!
//! Times are seconds since midnight (see `sg_core::time`).  An activity
//! without a start time is open towards simulation start; one without an end
//! time is open towards simulation end.

use serde::{Deserialize, Serialize};

use sg_core::{Coord, LinkId, TransportMode};
use sg_network::Link;

// ── ActivityType ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Home,
    Work,
}

impl ActivityType {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::Home => "home",
            ActivityType::Work => "work",
        }
    }

    /// Short type code the simulation engine's scoring parameters are keyed by.
    pub fn code(self) -> &'static str {
        match self {
            ActivityType::Home => "h",
            ActivityType::Work => "w",
        }
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Activity ──────────────────────────────────────────────────────────────────

/// A stay at one location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityType,
    pub coord: Coord,
    /// Network link the location was drawn from, if any.
    pub link: Option<LinkId>,
    /// External id of that link, as the simulation engine knows it.
    pub link_name: Option<String>,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    /// Upper bound on the stay.  Enforced by the simulation engine, not here.
    pub max_duration: Option<f64>,
}

impl Activity {
    /// An untimed activity at `coord`.
    pub fn at(kind: ActivityType, coord: Coord) -> Self {
        Self {
            kind,
            coord,
            link: None,
            link_name: None,
            start_time: None,
            end_time: None,
            max_duration: None,
        }
    }

    /// An untimed activity located at `link`'s representative coordinate.
    pub fn on_link(kind: ActivityType, link: Link<'_>) -> Self {
        Self {
            link: Some(link.id),
            link_name: Some(link.name.to_owned()),
            ..Self::at(kind, link.coord)
        }
    }

    pub fn with_start_time(mut self, secs: f64) -> Self {
        self.start_time = Some(secs);
        self
    }

    pub fn with_end_time(mut self, secs: f64) -> Self {
        self.end_time = Some(secs);
        self
    }

    pub fn with_max_duration(mut self, secs: f64) -> Self {
        self.max_duration = Some(secs);
        self
    }
}

// ── Leg ───────────────────────────────────────────────────────────────────────

/// A trip between two consecutive activities.  Timing is left to the
/// simulation engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leg {
    pub mode: TransportMode,
}

impl Leg {
    pub fn new(mode: TransportMode) -> Self {
        Self { mode }
    }
}

// ── PlanElement ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PlanElement {
    Activity(Activity),
    Leg(Leg),
}

impl PlanElement {
    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            PlanElement::Activity(a) => Some(a),
            PlanElement::Leg(_) => None,
        }
    }

    pub fn as_leg(&self) -> Option<&Leg> {
        match self {
            PlanElement::Leg(l) => Some(l),
            PlanElement::Activity(_) => None,
        }
    }
}
