//! daily-ta command-line interface
//!
//! Augments a daily OHLCV CSV file with technical indicator columns.

use std::process::ExitCode;

use clap::Parser;
use daily_ta_cli::{run, Args};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_json);

    match run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "daily-ta failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
