//! CSV output backend.
//!
//! Creates `plan_elements.csv` in the configured output directory, one row
//! per plan element.  Absent optional values are written as empty cells.
//! Floats use Rust's shortest round-trip formatting, so no precision is lost.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::info;

use sg_population::Population;

use crate::row::PlanElementRow;
use crate::writer::PopulationWriter;
use crate::OutputResult;

pub const HEADER: [&str; 13] = [
    "person_id",
    "plan_index",
    "selected",
    "element_index",
    "element",
    "act_type",
    "x",
    "y",
    "link_id",
    "start_time",
    "end_time",
    "max_duration",
    "mode",
];

/// Writes a population to one CSV file.
pub struct CsvPopulationWriter {
    out:      Writer<File>,
    finished: bool,
}

impl CsvPopulationWriter {
    /// Open (or create) `plan_elements.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut out = Writer::from_path(dir.join("plan_elements.csv"))?;
        out.write_record(HEADER)?;
        Ok(Self { out, finished: false })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl PopulationWriter for CsvPopulationWriter {
    fn write_population(&mut self, population: &Population) -> OutputResult<()> {
        let mut rows = 0usize;
        for row in PlanElementRow::flatten(population) {
            self.out.write_record(&[
                row.person_id.to_string(),
                row.plan_index.to_string(),
                (row.selected as u8).to_string(),
                row.element_index.to_string(),
                row.element.to_owned(),
                opt(row.act_type),
                opt(row.x),
                opt(row.y),
                opt(row.link_id),
                opt(row.start_time),
                opt(row.end_time),
                opt(row.max_duration),
                opt(row.mode),
            ])?;
            rows += 1;
        }
        info!("wrote {rows} plan elements for {} persons (CSV)", population.len());
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
