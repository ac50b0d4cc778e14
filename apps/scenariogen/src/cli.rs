//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Xml,
    Both,
}

#[derive(Debug, Parser)]
#[command(name = "scenariogen", version, about = "Synthesize a home-work-home travel population")]
pub struct Args {
    /// Link table CSV (`link_id,from_x,from_y,to_x,to_y,length_m`).
    #[arg(long, conflicts_with = "grid")]
    pub links: Option<PathBuf>,

    /// Use a synthetic n×n grid network instead of a link table.
    #[arg(long)]
    pub grid: Option<usize>,

    /// Grid spacing in metres.
    #[arg(long, default_value_t = 100.0)]
    pub grid_spacing: f64,

    /// JSON file with a `PopulationConfig`; missing fields use defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override `total_population`.
    #[arg(long)]
    pub total_population: Option<f64>,

    /// Override `sample_rate`.
    #[arg(long)]
    pub sample_rate: Option<f64>,

    /// Override the RNG seed.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Both)]
    pub format: Format,

    /// Generate travelers on all cores, one RNG stream per traveler.
    #[arg(long)]
    pub parallel: bool,
}
