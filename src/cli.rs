use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Multi-source daily reference evapotranspiration pipeline.
#[derive(Parser)]
#[command(
    name = "etofuse",
    version,
    about = "Multi-source daily reference evapotranspiration (FAO-56) pipeline"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full QC -> fusion -> ETo pipeline over a JSON job file.
    Compute(ComputeArgs),
    /// Resolve region, operation mode, and eligible providers for a request.
    Sources(SourcesArgs),
}

/// Arguments for the `compute` subcommand.
#[derive(clap::Args)]
pub struct ComputeArgs {
    /// Path to the JSON job file (request plus provider observations).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the JSON response; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the outlier-fraction warning ceiling (default 0.05).
    #[arg(long = "outlier-ceiling")]
    pub outlier_ceiling: Option<f64>,
}

/// Arguments for the `sources` subcommand.
#[derive(clap::Args)]
pub struct SourcesArgs {
    /// Site latitude in degrees.
    #[arg(long)]
    pub lat: f64,

    /// Site longitude in degrees.
    #[arg(long)]
    pub lon: f64,

    /// First requested day (YYYY-MM-DD).
    #[arg(long)]
    pub start: chrono::NaiveDate,

    /// Last requested day (YYYY-MM-DD).
    #[arg(long)]
    pub end: chrono::NaiveDate,

    /// Reference "today"; defaults to the local calendar date.
    #[arg(long)]
    pub today: Option<chrono::NaiveDate>,

    /// Operation mode hint (historical_email, dashboard_current,
    /// dashboard_forecast); inferred from the range when omitted.
    #[arg(long)]
    pub mode: Option<String>,
}
