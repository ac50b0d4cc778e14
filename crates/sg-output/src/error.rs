//! Error types for sg-output.

use thiserror::Error;

/// Errors that can occur when writing a population.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "xml")]
    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
