//! Synthetic grid network for demos and tests.

use sg_core::Coord;

use crate::{Network, NetworkBuilder, NetworkResult};

/// Build an `n × n` grid of nodes `spacing_m` apart, connected by links in
/// both directions between horizontal and vertical neighbours.
///
/// Link ids are `"{a}-{b}"` where `a`, `b` are row-major node indices.
/// Grids with `n < 2` have no links.
pub fn grid_network(n: usize, spacing_m: f64) -> NetworkResult<Network> {
    let links = if n < 2 { 0 } else { 4 * n * (n - 1) };
    let mut b = NetworkBuilder::with_capacity(links);
    let pos = |row: usize, col: usize| Coord::new(col as f64 * spacing_m, row as f64 * spacing_m);

    for row in 0..n {
        for col in 0..n {
            let here = row * n + col;
            if col + 1 < n {
                add_both_ways(&mut b, here, here + 1, pos(row, col), pos(row, col + 1), spacing_m)?;
            }
            if row + 1 < n {
                add_both_ways(&mut b, here, here + n, pos(row, col), pos(row + 1, col), spacing_m)?;
            }
        }
    }

    Ok(b.build())
}

fn add_both_ways(
    b: &mut NetworkBuilder,
    a: usize,
    c: usize,
    pa: Coord,
    pc: Coord,
    length_m: f64,
) -> NetworkResult<()> {
    b.add_link(format!("{a}-{c}"), pa, pc, length_m)?;
    b.add_link(format!("{c}-{a}"), pc, pa, length_m)?;
    Ok(())
}
