use thiserror::Error;

use sg_core::PersonId;
use sg_network::NetworkError;

#[derive(Debug, Error)]
pub enum PopulationError {
    /// A count, seed or schedule constant is unusable.  Raised before any
    /// traveler is generated.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A person was added to a `Population` out of id order.
    #[error("person id {found} added at position {expected}")]
    PersonOutOfOrder { expected: usize, found: PersonId },

    /// Raised by the link sampler; `EmptyNetwork` arrives here unchanged.
    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
