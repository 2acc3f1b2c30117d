//! # Post Office
//!
//! Command-line entry point. Parses the five run parameters, opens the event
//! log and runs one simulation. See the library docs for the log format.

use clap::Parser;
use post_office::framework::FileSink;
use post_office::lifecycle::{setup_tracing, simulate, SimConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Command line arguments definition.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Number of customers (NZ).
    customers: u32,

    /// Number of clerks (NU).
    clerks: u32,

    /// Max customer arrival delay in milliseconds (TZ, 0..=10000).
    customer_arrival_max_ms: u64,

    /// Max clerk break length in milliseconds (TU, 0..=100).
    clerk_break_max_ms: u64,

    /// Max time before the office closes in milliseconds (F, 0..=10000).
    closing_max_ms: u64,

    /// Event log file, truncated at start.
    #[arg(short, long, default_value = "proj2.out")]
    output: PathBuf,
}

impl CliArgs {
    fn sanitize(&self) -> Result<SimConfig, String> {
        SimConfig::new(
            self.customers,
            self.clerks,
            self.customer_arrival_max_ms,
            self.clerk_break_max_ms,
            self.closing_max_ms,
        )
        .map_err(|e| e.to_string())
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let args = CliArgs::parse();
    let config = match args.sanitize() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("post-office: {e}");
            return ExitCode::FAILURE;
        }
    };

    let sink = match FileSink::create(&args.output) {
        Ok(sink) => sink,
        Err(e) => {
            eprintln!("post-office: cannot open {}: {e}", args.output.display());
            return ExitCode::FAILURE;
        }
    };

    info!(?config, output = %args.output.display(), "Starting simulation");
    match simulate(config, sink).await {
        Ok(report) => {
            info!(?report, "Simulation finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Simulation aborted");
            eprintln!("post-office: {e}");
            ExitCode::FAILURE
        }
    }
}
