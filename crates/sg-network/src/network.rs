//! Link network representation and builder.
//!
//! # Data layout
//!
//! Links are stored as parallel arrays indexed by `LinkId` (struct of
//! arrays).  `LinkId`s are assigned sequentially in insertion order, which
//! is therefore the stable iteration order every consumer sees.  The
//! sampler's cumulative index depends on this order.
//!
//! A link's representative coordinate is the midpoint of its end points
//! when built with [`NetworkBuilder::add_link`], or an explicit point when
//! built with [`NetworkBuilder::add_link_at`].

use std::collections::HashMap;

use sg_core::{Coord, CoreError, LinkId};

use crate::{NetworkError, NetworkResult};

// ── Link ──────────────────────────────────────────────────────────────────────

/// Read-only view of one link, borrowed from its [`Network`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link<'a> {
    pub id: LinkId,
    /// External identifier (e.g. the id in the source link table).
    pub name: &'a str,
    /// Length in metres.  Always finite and > 0.
    pub length_m: f64,
    /// Where activities placed on this link are located.
    pub coord: Coord,
}

// ── Network ───────────────────────────────────────────────────────────────────

/// An immutable set of links.
///
/// All arrays are `pub` for direct indexed access.  Do not construct
/// directly; use [`NetworkBuilder`].
#[derive(Debug)]
pub struct Network {
    /// External id of each link.  Indexed by `LinkId`.
    pub link_name: Vec<String>,

    /// Length of each link in metres.
    pub link_length_m: Vec<f64>,

    /// Representative coordinate of each link.
    pub link_coord: Vec<Coord>,

    by_name: HashMap<String, LinkId>,
}

impl Network {
    /// A network with no links.  Any attempt to sample from it fails with
    /// [`NetworkError::EmptyNetwork`].
    pub fn empty() -> Self {
        NetworkBuilder::new().build()
    }

    pub fn link_count(&self) -> usize {
        self.link_length_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.link_length_m.is_empty()
    }

    /// The link with id `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this network.
    pub fn link(&self, id: LinkId) -> Link<'_> {
        let i = id.index();
        Link {
            id,
            name: &self.link_name[i],
            length_m: self.link_length_m[i],
            coord: self.link_coord[i],
        }
    }

    /// All links in `LinkId` order.
    pub fn links(&self) -> impl ExactSizeIterator<Item = Link<'_>> + '_ {
        (0..self.link_count()).map(|i| self.link(LinkId(i as u32)))
    }

    /// Look a link up by its external id.
    pub fn find_link(&self, name: &str) -> Option<Link<'_>> {
        self.by_name.get(name).map(|&id| self.link(id))
    }

    /// Sum of all link lengths in metres.
    pub fn total_length_m(&self) -> f64 {
        self.link_length_m.iter().sum()
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use sg_core::Coord;
/// use sg_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// b.add_link("a", Coord::new(0.0, 0.0), Coord::new(100.0, 0.0), 100.0).unwrap();
/// b.add_link_at("b", Coord::new(50.0, 50.0), 30.0).unwrap();
/// let net = b.build();
/// assert_eq!(net.link_count(), 2);
/// assert_eq!(net.link(sg_core::LinkId(0)).coord, Coord::new(50.0, 0.0));
/// ```
pub struct NetworkBuilder {
    names:   Vec<String>,
    lengths: Vec<f64>,
    coords:  Vec<Coord>,
    by_name: HashMap<String, LinkId>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-allocate for the expected number of links.
    pub fn with_capacity(links: usize) -> Self {
        Self {
            names:   Vec::with_capacity(links),
            lengths: Vec::with_capacity(links),
            coords:  Vec::with_capacity(links),
            by_name: HashMap::with_capacity(links),
        }
    }

    /// Add a link running from `from` to `to`.  Its representative
    /// coordinate is the midpoint of the two ends.
    ///
    /// `length_m` is taken as given; it need not equal the straight-line
    /// distance (links follow curved geometry).
    pub fn add_link(
        &mut self,
        name: impl Into<String>,
        from: Coord,
        to: Coord,
        length_m: f64,
    ) -> NetworkResult<LinkId> {
        check_coord(from)?;
        check_coord(to)?;
        self.add_link_at(name, from.midpoint(to), length_m)
    }

    /// Add a link represented by the single point `coord`.
    pub fn add_link_at(
        &mut self,
        name: impl Into<String>,
        coord: Coord,
        length_m: f64,
    ) -> NetworkResult<LinkId> {
        let name = name.into();
        check_coord(coord)?;
        if !length_m.is_finite() || length_m <= 0.0 {
            return Err(NetworkError::InvalidLink {
                name,
                reason: format!("length must be finite and > 0, got {length_m}"),
            });
        }
        if self.by_name.contains_key(&name) {
            return Err(NetworkError::InvalidLink {
                name,
                reason: "duplicate link id".to_owned(),
            });
        }

        let id = LinkId::from_index(self.lengths.len())?;
        self.by_name.insert(name.clone(), id);
        self.names.push(name);
        self.lengths.push(length_m);
        self.coords.push(coord);
        Ok(id)
    }

    pub fn link_count(&self) -> usize {
        self.lengths.len()
    }

    /// Consume the builder and produce a [`Network`].
    pub fn build(self) -> Network {
        Network {
            link_name:     self.names,
            link_length_m: self.lengths,
            link_coord:    self.coords,
            by_name:       self.by_name,
        }
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_coord(c: Coord) -> NetworkResult<()> {
    if c.is_finite() {
        Ok(())
    } else {
        Err(CoreError::NonFiniteCoord { x: c.x, y: c.y }.into())
    }
}
