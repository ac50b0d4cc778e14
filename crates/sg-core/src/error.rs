//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors produced by `sg-core` helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{kind} index {index} does not fit in a 32-bit id")]
    IdOverflow { kind: &'static str, index: usize },

    #[error("coordinate ({x}, {y}) is not finite")]
    NonFiniteCoord { x: f64, y: f64 },
}

/// Shorthand result type for `sg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
