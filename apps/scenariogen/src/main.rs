//! scenariogen: synthesize a home → work → home travel demand population.
//!
//! Reads a link table (or builds a synthetic grid), draws every traveler's
//! home and work link proportionally to link length, and writes the
//! resulting plans as CSV and/or MATSim population XML.
//!
//! Run with:
//!   cargo run -p scenariogen --release -- --links links.csv --output-dir out
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod cli;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sg_core::SimRng;
use sg_network::{grid_network, load_links_csv, Network};
use sg_output::{CsvPopulationWriter, MatsimXmlWriter, PopulationWriter};
use sg_population::{PlanSynthesizer, Population, PopulationConfig};

use cli::{Args, Format};

/// Grid size used when no link table is given.
const DEFAULT_GRID: usize = 20;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    config.validate()?;

    // 1. Network.
    let network = load_network(&args)?;
    info!(
        "network: {} links, {:.1} km total",
        network.link_count(),
        network.total_length_m() / 1_000.0
    );

    // 2. Synthesize.
    let total = config.traveler_count()?;
    info!("generating {total} travelers (seed {})", config.seed);
    let t0 = Instant::now();
    let synth = PlanSynthesizer::new(&network, config.schedule.clone())?;
    let population = if args.parallel {
        synth.synthesize_parallel(total, config.seed)?
    } else {
        synth.synthesize(total, &mut SimRng::new(config.seed))?
    };
    let elapsed = t0.elapsed();

    // 3. Write.
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;
    let written = write_outputs(&population, &args.output_dir, args.format)?;

    // 4. Summary.
    println!("Synthesized {} travelers in {:.3} s", population.len(), elapsed.as_secs_f64());
    for file in written {
        println!("  {}", args.output_dir.join(file).display());
    }

    Ok(())
}

/// Start from the JSON config file (if any), then apply command-line
/// overrides.
fn load_config(args: &Args) -> Result<PopulationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PopulationConfig::default(),
    };

    if let Some(n) = args.total_population {
        config.total_population = n;
    }
    if let Some(rate) = args.sample_rate {
        config.sample_rate = rate;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    Ok(config)
}

fn load_network(args: &Args) -> Result<Network> {
    match &args.links {
        Some(path) => load_links_csv(path)
            .with_context(|| format!("loading links from {}", path.display())),
        None => {
            let n = args.grid.unwrap_or(DEFAULT_GRID);
            info!("no link table given; using a {n}×{n} grid, {} m spacing", args.grid_spacing);
            Ok(grid_network(n, args.grid_spacing)?)
        }
    }
}

fn write_outputs(population: &Population, dir: &Path, format: Format) -> Result<Vec<&'static str>> {
    let mut written = Vec::new();
    if matches!(format, Format::Csv | Format::Both) {
        let mut w = CsvPopulationWriter::new(dir)?;
        w.write_population(population)?;
        w.finish()?;
        written.push("plan_elements.csv");
    }
    if matches!(format, Format::Xml | Format::Both) {
        let mut w = MatsimXmlWriter::new(dir)?;
        w.write_population(population)?;
        w.finish()?;
        written.push("population.xml");
    }
    Ok(written)
}
