//! CLI argument parsing module.
//!
//! The CLI follows the pattern
//! `daily-ta <input.csv> [-o output.csv] [-c config.json] [--instrument NAME]`.
//!
//! # Examples
//!
//! ```bash
//! # Default indicator set, instrument named after the file, CSV on stdout
//! daily-ta spx.csv
//!
//! # Configured indicators written to a file
//! daily-ta spx.csv -c indicators.json -o spx_ta.csv
//!
//! # Override the column prefix and log as JSON
//! RUST_LOG=debug daily-ta spx.csv --instrument SPX --log-json
//! ```

use std::path::PathBuf;

use clap::Parser;
use daily_ta::{EngineConfig, IndicatorSet};

use crate::error::{CliError, Result};

/// daily-ta: augment a daily OHLCV CSV with technical indicator columns
#[derive(Parser, Debug, Clone)]
#[command(name = "daily-ta")]
#[command(author, version, about = "Augment a daily OHLCV CSV with technical indicator columns")]
#[command(long_about = "daily-ta reads a date-ordered CSV with Open, High, Low, Close and \
    optional Volume columns, computes the configured indicator families, and writes the \
    input rows back out with one extra column per indicator output.")]
pub struct Args {
    /// Input CSV file
    pub input: PathBuf,

    /// Output CSV file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON engine configuration (defaults to a standard daily set)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Column prefix for derived columns (defaults to the input file stem)
    #[arg(long)]
    pub instrument: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Args {
    /// Resolves the engine configuration for this invocation.
    ///
    /// Without `--config` the standard daily set is used. The instrument is
    /// taken from `--instrument`, then the configuration, then the input
    /// file stem.
    ///
    /// # Errors
    ///
    /// Returns `CliError::IndicatorError` if the configuration file cannot be
    /// read or parsed, and `CliError::InvalidArgument` if no instrument name
    /// can be derived.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_path(path)?,
            None => EngineConfig {
                indicators: standard_indicator_set(),
                ..EngineConfig::default()
            },
        };

        if let Some(instrument) = &self.instrument {
            config.instrument.clone_from(instrument);
        }
        if config.instrument.is_empty() {
            config.instrument = self
                .input
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
                .ok_or_else(|| CliError::InvalidArgument {
                    argument: "instrument".to_string(),
                    reason: format!(
                        "cannot derive a name from '{}'; pass --instrument",
                        self.input.display()
                    ),
                })?;
        }
        Ok(config)
    }
}

/// The indicator set used when no configuration file is given.
#[must_use]
pub fn standard_indicator_set() -> IndicatorSet {
    IndicatorSet {
        daily_relative_change: true,
        average_relative_change: vec![5],
        moving_average: vec![5, 20, 50],
        exponential_moving_average: vec![12, 26],
        average_true_range: vec![14],
        week_high: vec![4, 52],
        week_low: vec![4, 52],
        rsi: vec![14],
        momentum: vec![10],
        williams_r: vec![14],
        ad_oscillator: true,
        disparity: vec![5, 20],
        macd: vec![(12, 26)],
        bollinger: vec![20],
        obv: true,
        obv_stddev: vec![20],
        ..IndicatorSet::default()
    }
}
