//! `sg-output`: population writers for the scenariogen synthesizer.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | File created            |
//! |-----------|-------------|-------------------------|
//! | *(none)*  | CSV         | `plan_elements.csv`     |
//! | `xml`     | MATSim XML  | `population.xml`        |
//!
//! Both implement [`PopulationWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use sg_output::{CsvPopulationWriter, PopulationWriter};
//!
//! let mut writer = CsvPopulationWriter::new(Path::new("./output"))?;
//! writer.write_population(&population)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(feature = "xml")]
pub mod xml;


pub use crate::csv::CsvPopulationWriter;
pub use error::{OutputError, OutputResult};
pub use row::PlanElementRow;
pub use writer::PopulationWriter;

#[cfg(feature = "xml")]
pub use xml::MatsimXmlWriter;
