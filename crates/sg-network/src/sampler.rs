//! Length-weighted link sampling.
//!
//! # Cumulative index
//!
//! Links are laid end to end along a number line in `LinkId` order.  Link
//! `i` owns the half-open interval
//!
//! ```text
//! [offsets[i], offsets[i] + length_i)        offsets[0] = 0
//! ```
//!
//! and the last interval ends at `total_length`.  Drawing `u` uniformly from
//! `[0, total_length)` and returning the link whose interval contains `u`
//! selects each link with probability `length_i / total_length`.
//!
//! `offsets` is sorted by construction, so the lookup "greatest offset ≤ u"
//! is a binary search: O(log L) per draw after an O(L) build.

use log::info;

use sg_core::{DrawSource, LinkId};

use crate::{Link, Network, NetworkError, NetworkResult};

/// Draws links with probability proportional to their length.
///
/// Borrows the [`Network`]; the index itself is rebuilt per run and never
/// persisted.
pub struct LinkSampler<'a> {
    network:      &'a Network,
    /// Start of each link's interval.  Indexed by `LinkId`, non-decreasing.
    offsets:      Vec<f64>,
    total_length: f64,
}

impl<'a> LinkSampler<'a> {
    /// Build the cumulative index over `network`.
    ///
    /// # Errors
    ///
    /// [`NetworkError::EmptyNetwork`] if the network has no links.
    pub fn new(network: &'a Network) -> NetworkResult<Self> {
        if network.is_empty() {
            return Err(NetworkError::EmptyNetwork);
        }

        let mut offsets = Vec::with_capacity(network.link_count());
        let mut cum = 0.0_f64;
        for &len in &network.link_length_m {
            offsets.push(cum);
            cum += len;
        }

        info!(
            "link sampler indexed {} links, total length {:.1} m",
            offsets.len(),
            cum
        );

        Ok(Self { network, offsets, total_length: cum })
    }

    /// Sum of all link lengths; draws must lie in `[0, total_length)`.
    #[inline]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    /// The half-open interval `[start, end)` owned by link `id`.
    pub fn interval(&self, id: LinkId) -> (f64, f64) {
        let i = id.index();
        let end = self
            .offsets
            .get(i + 1)
            .copied()
            .unwrap_or(self.total_length);
        (self.offsets[i], end)
    }

    /// Resolve offset `u` to the link whose interval contains it.
    ///
    /// # Errors
    ///
    /// [`NetworkError::OutOfRange`] if `u` is not in `[0, total_length)`
    /// (NaN included).
    pub fn draw(&self, u: f64) -> NetworkResult<Link<'a>> {
        if !(0.0..self.total_length).contains(&u) {
            return Err(NetworkError::OutOfRange {
                offset: u,
                total_length: self.total_length,
            });
        }
        // partition_point gives the first offset > u.  offsets[0] = 0 ≤ u, so
        // the result is at least 1.
        let idx = self.offsets.partition_point(|&start| start <= u) - 1;
        Ok(self.network.link(LinkId(idx as u32)))
    }

    /// Draw a uniform offset from `rng` and resolve it.  Consumes exactly one
    /// `uniform_below` draw.
    pub fn sample<R: DrawSource + ?Sized>(&self, rng: &mut R) -> NetworkResult<Link<'a>> {
        let u = rng.uniform_below(self.total_length);
        self.draw(u)
    }
}
