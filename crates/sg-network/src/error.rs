//! Network-subsystem error type.

use thiserror::Error;

use sg_core::CoreError;

/// Errors produced by `sg-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// The network has zero links, so there is nothing to sample from.
    #[error("network has no links")]
    EmptyNetwork,

    /// A sampling offset fell outside `[0, total_length)`.  Indicates a bug
    /// in whoever generated the offset.
    #[error("sample offset {offset} is outside [0, {total_length})")]
    OutOfRange { offset: f64, total_length: f64 },

    #[error("invalid link {name:?}: {reason}")]
    InvalidLink { name: String, reason: String },

    #[error("link table parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
