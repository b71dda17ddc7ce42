//! daily-ta CLI library
//!
//! The binary is a thin wrapper around [`run`]; the argument, CSV and error
//! modules are exposed for testing and reuse.

pub mod args;
pub mod csv_io;
pub mod error;

use std::io;

use daily_ta::IndicatorEngine;
use tracing::info;

pub use args::Args;
pub use error::{CliError, Result};

/// Reads the input CSV, applies the configured indicators, and writes the
/// augmented CSV to the output file or stdout.
///
/// Returns the names of the derived columns written.
///
/// # Errors
///
/// Returns any configuration, CSV, I/O or engine error. Nothing is written
/// when the engine fails.
pub fn run(args: &Args) -> Result<Vec<String>> {
    let config = args.engine_config()?;
    let date_column = config.columns.date.as_str();

    let mut frame = csv_io::read_frame_from_path(&args.input, date_column)?;
    info!(
        input = %args.input.display(),
        rows = frame.len(),
        instrument = %config.instrument,
        "loaded price data"
    );

    let written = IndicatorEngine::from_config(&config).apply(&mut frame, &config.indicators)?;
    info!(columns = written.len(), "computed indicators");

    match &args.output {
        Some(path) => {
            csv_io::write_frame_to_path(&frame, date_column, path)?;
            info!(output = %path.display(), "wrote augmented data");
        }
        None => csv_io::write_frame(&frame, date_column, io::stdout().lock())?,
    }
    Ok(written)
}
