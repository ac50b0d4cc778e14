//! The `PopulationWriter` trait implemented by all backend writers.

use sg_population::Population;

use crate::OutputResult;

/// Trait implemented by the CSV and XML writers.
pub trait PopulationWriter {
    /// Write every person of `population`, in id order.
    fn write_population(&mut self, population: &Population) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
