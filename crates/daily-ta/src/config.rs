//! Engine configuration.
//!
//! An [`EngineConfig`] names the instrument, the input columns, and the
//! indicator families to compute. It deserializes from JSON with every field
//! optional:
//!
//! ```
//! use daily_ta::config::EngineConfig;
//!
//! let config = EngineConfig::from_json_str(r#"{
//!     "instrument": "SPX",
//!     "indicators": {
//!         "moving_average": [5, 20],
//!         "macd": [[12, 26]],
//!         "obv": true
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(config.instrument, "SPX");
//! assert_eq!(config.columns.close, "Close");
//! assert_eq!(config.indicators.moving_average, vec![5, 20]);
//! assert_eq!(config.indicators.macd, vec![(12, 26)]);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::indicators::rsi::RsiEviction;
use crate::key::{IndicatorKey, IndicatorKind};
use crate::traits::{validate_period, validate_period_at_least_two};

/// Names of the input columns on a price frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Date key column
    pub date: String,
    /// Open price column
    pub open: String,
    /// High price column
    pub high: String,
    /// Low price column
    pub low: String,
    /// Close price column
    pub close: String,
    /// Volume column (optional on the frame)
    pub volume: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            date: "Date".to_string(),
            open: "Open".to_string(),
            high: "High".to_string(),
            low: "Low".to_string(),
            close: "Close".to_string(),
            volume: "Volume".to_string(),
        }
    }
}

/// Which indicator families to compute, and with which periods.
///
/// Period lists produce one output per entry. Week extrema take week counts,
/// converted to trading days at five per week.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSet {
    /// Daily relative open-to-close change
    pub daily_relative_change: bool,
    /// Average relative change periods
    pub average_relative_change: Vec<usize>,
    /// Simple moving average periods
    pub moving_average: Vec<usize>,
    /// Exponential moving average periods
    pub exponential_moving_average: Vec<usize>,
    /// Average true range periods
    pub average_true_range: Vec<usize>,
    /// Highest-high week counts
    pub week_high: Vec<usize>,
    /// Lowest-low week counts
    pub week_low: Vec<usize>,
    /// RSI periods
    pub rsi: Vec<usize>,
    /// Stochastic %K periods
    pub stochastic_k: Vec<usize>,
    /// Stochastic %D periods
    pub stochastic_d: Vec<usize>,
    /// Momentum periods
    pub momentum: Vec<usize>,
    /// Williams %R periods
    pub williams_r: Vec<usize>,
    /// Accumulation/distribution oscillator
    pub ad_oscillator: bool,
    /// Disparity periods
    pub disparity: Vec<usize>,
    /// MACD `(fast, slow)` period pairs
    pub macd: Vec<(usize, usize)>,
    /// Bollinger Band periods
    pub bollinger: Vec<usize>,
    /// On-balance volume
    pub obv: bool,
    /// OBV standard deviation periods
    pub obv_stddev: Vec<usize>,
}

impl IndicatorSet {
    /// Returns every configured indicator in computation order.
    #[must_use]
    pub fn keys(&self) -> Vec<IndicatorKey> {
        let mut keys = Vec::new();
        if self.daily_relative_change {
            keys.push(IndicatorKey::relative_change());
        }
        let periodic: [(&[usize], fn(usize) -> IndicatorKey); 12] = [
            (self.average_relative_change.as_slice(), IndicatorKey::average_relative_change),
            (self.moving_average.as_slice(), IndicatorKey::moving_average),
            (self.exponential_moving_average.as_slice(), IndicatorKey::exponential_moving_average),
            (self.average_true_range.as_slice(), IndicatorKey::average_true_range),
            (self.week_high.as_slice(), IndicatorKey::week_high),
            (self.week_low.as_slice(), IndicatorKey::week_low),
            (self.rsi.as_slice(), IndicatorKey::rsi),
            (self.stochastic_k.as_slice(), IndicatorKey::stochastic_k),
            (self.stochastic_d.as_slice(), IndicatorKey::stochastic_d),
            (self.momentum.as_slice(), IndicatorKey::momentum),
            (self.williams_r.as_slice(), IndicatorKey::williams_r),
            (self.disparity.as_slice(), IndicatorKey::disparity),
        ];
        for (periods, make) in periodic {
            keys.extend(periods.iter().map(|&p| make(p)));
        }
        if self.ad_oscillator {
            keys.push(IndicatorKey::ad_oscillator());
        }
        keys.extend(self.macd.iter().map(|&(fast, slow)| IndicatorKey::macd(fast, slow)));
        keys.extend(self.bollinger.iter().map(|&p| IndicatorKey::bollinger(p)));
        if self.obv {
            keys.push(IndicatorKey::obv());
        }
        keys.extend(self.obv_stddev.iter().map(|&p| IndicatorKey::obv_stddev(p)));
        keys
    }

    /// Returns true if no indicator is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Checks every configured period.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPeriod` for the first period that is zero, or
    /// below 2 where the indicator needs two rows.
    pub fn validate(&self) -> Result<()> {
        self.keys().iter().try_for_each(validate_key)
    }
}

/// Checks the parameters of one indicator key.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if a parameter is out of range.
pub fn validate_key(key: &IndicatorKey) -> Result<()> {
    match key.kind() {
        IndicatorKind::WilliamsR | IndicatorKind::Bollinger | IndicatorKind::ObvStddev => {
            validate_period_at_least_two(key.period())
        }
        _ => key.params().iter().try_for_each(|&p| validate_period(p)),
    }
}

/// Complete configuration for one engine run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Instrument name used as the output column prefix
    pub instrument: String,
    /// Input column names
    pub columns: ColumnNames,
    /// Indicators to compute
    pub indicators: IndicatorSet,
    /// RSI move-eviction policy
    pub rsi_eviction: RsiEviction,
}

impl EngineConfig {
    /// Parses a configuration from JSON and validates its periods.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for malformed JSON and `Error::InvalidPeriod`
    /// for an out-of-range period.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.indicators.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read or parsed, and
    /// `Error::InvalidPeriod` for an out-of-range period.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|err| Error::Config {
            message: format!("cannot read {}: {err}", path.display()),
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.columns.volume, "Volume");
        assert_eq!(config.rsi_eviction, RsiEviction::MatchValue);
        assert!(config.indicators.is_empty());
    }

    #[test]
    fn test_partial_columns() {
        let config = EngineConfig::from_json_str(
            r#"{"columns": {"close": "Adj Close"}, "rsi_eviction": "tagged"}"#,
        )
        .unwrap();
        assert_eq!(config.columns.close, "Adj Close");
        assert_eq!(config.columns.open, "Open");
        assert_eq!(config.rsi_eviction, RsiEviction::Tagged);
    }

    #[test]
    fn test_keys_order() {
        let set = IndicatorSet {
            daily_relative_change: true,
            moving_average: vec![3, 5],
            disparity: vec![3],
            macd: vec![(2, 4)],
            obv: true,
            ..IndicatorSet::default()
        };
        assert_eq!(
            set.keys(),
            vec![
                IndicatorKey::relative_change(),
                IndicatorKey::moving_average(3),
                IndicatorKey::moving_average(5),
                IndicatorKey::disparity(3),
                IndicatorKey::macd(2, 4),
                IndicatorKey::obv(),
            ]
        );
    }

    #[test]
    fn test_rejects_bad_periods() {
        let err = EngineConfig::from_json_str(r#"{"indicators": {"moving_average": [0]}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod { period: 0, .. }));

        let err = EngineConfig::from_json_str(r#"{"indicators": {"bollinger": [1]}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod { period: 1, .. }));

        let err = EngineConfig::from_json_str(r#"{"indicators": {"macd": [[12, 0]]}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPeriod { period: 0, .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = EngineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_path("/nonexistent/daily-ta.json").unwrap_err();
        match err {
            Error::Config { message } => assert!(message.contains("daily-ta.json")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
