//! Exports the live positions and stop status of one bus line to CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use siri_bus_snapshot::{cli::ApiArgs, output::write_csv, telemetry};

#[derive(Parser)]
#[command(name = "get_bus_info")]
#[command(about = "Write the live positions of a bus line to a CSV file", long_about = None)]
struct Cli {
    #[command(flatten)]
    api: ApiArgs,

    /// CSV file to write; replaced if it already exists
    #[arg(value_name = "OUTPUT_CSV")]
    output: PathBuf,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let _log_guard = telemetry::init_logging().context("Failed to initialize logging")?;

    // Nothing touches the output path until the snapshot is fully extracted.
    let snapshot = cli
        .api
        .fetch_snapshot()
        .with_context(|| format!("Failed to fetch vehicles for line {}", cli.api.line_ref))?;

    write_csv(&cli.output, &snapshot)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}
