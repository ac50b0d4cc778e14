//! `sg-network`: the link network and length-weighted link sampling.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`network`] | `Network`, `Link`, `NetworkBuilder`                         |
//! | [`sampler`] | `LinkSampler` (cumulative-length index, inverse-CDF draws)  |
//! | [`loader`]  | `load_links_csv`, `load_links_reader`                       |
//! | [`grid`]    | `grid_network` synthetic test/demo network                  |
//! | [`error`]   | `NetworkError`, `NetworkResult<T>`                          |
//!
//! Network ingestion proper (OSM parsing, reprojection, cleaning) happens
//! upstream.  This crate only holds the finished links: an external id, a
//! length and one representative coordinate each.

pub mod error;
pub mod grid;
pub mod loader;
pub mod network;
pub mod sampler;


pub use error::{NetworkError, NetworkResult};
pub use grid::grid_network;
pub use loader::{load_links_csv, load_links_reader};
pub use network::{Link, Network, NetworkBuilder};
pub use sampler::LinkSampler;
