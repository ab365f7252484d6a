//! Election Trace Analyzer CLI
//!
//! Parses two ring-network leader election simulation logs and prints a
//! comparative performance report, with an optional comparison chart.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use election_trace_analyzer::commands::{execute_compare, validate_args, CompareArgs};
use election_trace_analyzer::utils::config::DEFAULT_CHART_FILE;

/// Election Trace Analyzer - compare two leader election runs
#[derive(Parser, Debug)]
#[command(name = "election-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the arbitrary election trace log
    arbitrary_log: PathBuf,

    /// Path to the anonymous election trace log
    anonymous_log: PathBuf,

    /// Output path for the comparison chart
    #[arg(long, default_value = DEFAULT_CHART_FILE)]
    chart: PathBuf,

    /// Skip chart generation
    #[arg(long)]
    no_chart: bool,

    /// Output path for a JSON report (optional)
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments; wrong argument counts print usage and exit non-zero
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = CompareArgs {
        arbitrary_log: cli.arbitrary_log,
        anonymous_log: cli.anonymous_log,
        chart_output: cli.chart,
        skip_chart: cli.no_chart,
        output_json: cli.json,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute comparison
    execute_compare(args)?;

    Ok(())
}
