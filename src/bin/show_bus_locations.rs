//! Prints the active buses on one line and their coordinates.

use anyhow::{Context, Result};
use clap::Parser;
use siri_bus_snapshot::{cli::ApiArgs, output::print_report, telemetry};

#[derive(Parser)]
#[command(name = "show_bus_locations")]
#[command(about = "Print the live positions of a bus line", long_about = None)]
struct Cli {
    #[command(flatten)]
    api: ApiArgs,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let _log_guard = telemetry::init_logging().context("Failed to initialize logging")?;

    let snapshot = cli
        .api
        .fetch_snapshot()
        .with_context(|| format!("Failed to fetch vehicles for line {}", cli.api.line_ref))?;

    let stdout = std::io::stdout();
    print_report(&mut stdout.lock(), &snapshot).context("Failed to print report")?;

    Ok(())
}
