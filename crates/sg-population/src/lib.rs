//! `sg-population`: traveler plans and the plan synthesizer.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`activity`]   | `ActivityType`, `Activity`, `Leg`, `PlanElement`         |
//! | [`plan`]       | `Plan` (alternating activity/leg chain)                  |
//! | [`person`]     | `Person`, `Population`                                   |
//! | [`config`]     | `ScheduleParams`, `PopulationConfig`                     |
//! | [`synth`]      | `PlanSynthesizer`, `synthesize_population`               |
//! | [`error`]      | `PopulationError`, `PopulationResult<T>`                 |
//!
//! # Synthesis (summary)
//!
//! For traveler `i` in `0..total`:
//!
//! ```text
//! home, work  = two independent length-weighted link draws
//! departure   = 7 h + clamp(N(0,1) · 1 h, -1 h, 12000 s)
//! travel      = |home - work| / 10
//! plan        = home(end=departure) → car → work(start=departure,
//!               end=departure + 8 h + travel, max 10 h) → car → home
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Adds `PlanSynthesizer::synthesize_parallel` (Rayon).     |

pub mod activity;
pub mod config;
pub mod error;
pub mod person;
pub mod plan;
pub mod synth;

#[cfg(test)]
mod tests;

pub use activity::{Activity, ActivityType, Leg, PlanElement};
pub use config::{PopulationConfig, ScheduleParams};
pub use error::{PopulationError, PopulationResult};
pub use person::{Person, Population};
pub use plan::Plan;
pub use synth::{naive_travel_time, synthesize_population, PlanSynthesizer};
