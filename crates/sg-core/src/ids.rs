//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements.  The inner integer is `pub` so SoA `Vec`s can be
//! indexed with `id.index()`.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Generate a typed ID wrapper around a `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident, $kind:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Build an id from a `Vec` position, failing past `u32::MAX`.
            pub fn from_index(index: usize) -> CoreResult<Self> {
                u32::try_from(index)
                    .map($name)
                    .map_err(|_| CoreError::IdOverflow { kind: $kind, index })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a link in the network, in stable insertion order.
    pub struct LinkId, "link";
}

typed_id! {
    /// Sequential, 0-based traveler identifier.  Equals the generation index.
    pub struct PersonId, "person";
}
