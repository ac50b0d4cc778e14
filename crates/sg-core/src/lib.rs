//! `sg-core`: foundational types for the `scenariogen` population synthesizer.
//!
//! This crate is a dependency of every other `sg-*` crate.  It has no `sg-*`
//! dependencies and only a few external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LinkId`, `PersonId`                                  |
//! | [`geo`]         | `Coord`, Euclidean distance, midpoint                 |
//! | [`rng`]         | `DrawSource` trait, `SimRng` (run), `PersonRng`       |
//! | [`time`]        | Seconds-since-midnight helpers, `HH:MM:SS` formatting |
//! | [`transport`]   | `TransportMode` enum                                  |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::Coord;
pub use ids::{LinkId, PersonId};
pub use rng::{DrawSource, PersonRng, SimRng};
pub use transport::TransportMode;
