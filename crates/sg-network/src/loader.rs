//! CSV link-table loader.
//!
//! # CSV format
//!
//! One row per link, in the order the links should be indexed:
//!
//! ```csv
//! link_id,from_x,from_y,to_x,to_y,length_m
//! 1001,512000.0,4300000.0,512100.0,4300000.0,100.0
//! 1002,512100.0,4300000.0,512100.0,4300250.0,262.5
//! ```
//!
//! Coordinates must already be projected to metres.  `link_id` is kept as an
//! opaque string.  Each link's representative coordinate is the midpoint of
//! its end points.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use sg_core::Coord;

use crate::{Network, NetworkBuilder, NetworkError, NetworkResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LinkRecord {
    link_id:  String,
    from_x:   f64,
    from_y:   f64,
    to_x:     f64,
    to_y:     f64,
    length_m: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Network`] from a link-table CSV file.
pub fn load_links_csv(path: &Path) -> NetworkResult<Network> {
    let file = std::fs::File::open(path)?;
    load_links_reader(file)
}

/// Like [`load_links_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_links_reader<R: Read>(reader: R) -> NetworkResult<Network> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = NetworkBuilder::new();

    for (row_idx, result) in csv_reader.deserialize::<LinkRecord>().enumerate() {
        let row = result.map_err(|e| NetworkError::Parse(format!("row {}: {e}", row_idx + 1)))?;
        builder.add_link(
            row.link_id,
            Coord::new(row.from_x, row.from_y),
            Coord::new(row.to_x, row.to_y),
            row.length_m,
        )?;
    }

    debug!("loaded {} links from CSV", builder.link_count());
    Ok(builder.build())
}
