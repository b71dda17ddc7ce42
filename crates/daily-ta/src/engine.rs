//! Frame-level indicator processors.
//!
//! [`IndicatorEngine`] augments a [`PriceFrame`] in place. It offers one
//! `add_*` method per indicator family, each taking a list of periods, plus
//! [`apply`](IndicatorEngine::apply) which runs a whole [`IndicatorSet`].
//!
//! Every call opens its own [`IndicatorSession`]. Dependencies such as the
//! moving average behind disparity are computed inside that session and are
//! never written to the frame unless they were requested themselves. All
//! outputs of a call are computed before any is merged, so a failing call
//! leaves the frame untouched.
//!
//! The on-balance-volume family is skipped with a warning on frames without
//! a volume column or with an empty volume cell. Other families still run.
//!
//! # Example
//!
//! ```
//! use daily_ta::engine::IndicatorEngine;
//! use daily_ta::frame::PriceFrame;
//!
//! let closes = [10.0, 11.0, 12.0, 13.0, 14.0];
//! let mut frame = PriceFrame::new(vec![1, 2, 3, 4, 5]);
//! for name in ["Open", "High", "Low", "Close"] {
//!     frame.insert_column(name, closes.iter().map(|&c| Some(c)).collect()).unwrap();
//! }
//!
//! let engine = IndicatorEngine::new("SPX");
//! engine.add_moving_average(&mut frame, &[3]).unwrap();
//!
//! assert_eq!(
//!     frame.column("SPX_MA3").unwrap(),
//!     &[None, None, Some(11.0), Some(12.0), Some(13.0)]
//! );
//! ```

use tracing::{debug, warn};

use crate::config::{validate_key, ColumnNames, EngineConfig, IndicatorSet};
use crate::error::Result;
use crate::frame::{DerivedColumn, PriceFrame};
use crate::indicators::RsiEviction;
use crate::key::IndicatorKey;
use crate::session::IndicatorSession;

/// Applies indicator families to price frames of one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorEngine {
    instrument: String,
    columns: ColumnNames,
    rsi_eviction: RsiEviction,
}

impl IndicatorEngine {
    /// Creates an engine with default column names and RSI policy.
    #[must_use]
    pub fn new(instrument: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            columns: ColumnNames::default(),
            rsi_eviction: RsiEviction::default(),
        }
    }

    /// Creates an engine from a configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            instrument: config.instrument.clone(),
            columns: config.columns.clone(),
            rsi_eviction: config.rsi_eviction,
        }
    }

    /// Sets the input column names.
    #[must_use]
    pub fn with_columns(mut self, columns: ColumnNames) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the RSI move-eviction policy.
    #[must_use]
    pub const fn with_rsi_eviction(mut self, rsi_eviction: RsiEviction) -> Self {
        self.rsi_eviction = rsi_eviction;
        self
    }

    /// Instrument name used as the output column prefix.
    #[must_use]
    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    /// Input column names.
    #[must_use]
    pub const fn columns(&self) -> &ColumnNames {
        &self.columns
    }

    /// Runs every indicator in `set` through one shared session.
    ///
    /// Returns the names of the columns written, in order.
    ///
    /// # Errors
    ///
    /// Returns the first period, input or processor error. The frame is
    /// unchanged on error.
    pub fn apply<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, set: &IndicatorSet) -> Result<Vec<String>> {
        self.run(frame, &set.keys())
    }

    /// Adds `<i>_relative_change_perc_1`.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_daily_relative_change<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>) -> Result<()> {
        self.run(frame, &[IndicatorKey::relative_change()]).map(drop)
    }

    /// Adds `<i>_relative_change_perc_<N>` for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_average_relative_change<D: Ord + Clone>(
        &self,
        frame: &mut PriceFrame<D>,
        periods: &[usize],
    ) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::average_relative_change)
    }

    /// Adds `<i>_MA<N>` for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_moving_average<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::moving_average)
    }

    /// Adds `<i>_EMA<N>` for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_exponential_moving_average<D: Ord + Clone>(
        &self,
        frame: &mut PriceFrame<D>,
        periods: &[usize],
    ) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::exponential_moving_average)
    }

    /// Adds `<i>_ATR<N>` for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_average_true_range<D: Ord + Clone>(
        &self,
        frame: &mut PriceFrame<D>,
        periods: &[usize],
    ) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::average_true_range)
    }

    /// Adds `<i>_week_high_<W>` for each week count.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_week_high<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, weeks: &[usize]) -> Result<()> {
        self.run_periods(frame, weeks, IndicatorKey::week_high)
    }

    /// Adds `<i>_week_low_<W>` for each week count.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_week_low<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, weeks: &[usize]) -> Result<()> {
        self.run_periods(frame, weeks, IndicatorKey::week_low)
    }

    /// Adds `<i>_RSI_<N>` for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_rsi<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::rsi)
    }

    /// Adds `<i>_stochastic_K_<N>` for each period.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`apply`](Self::apply), returns
    /// `Error::IndeterminateValue` when a window has zero high-low range.
    pub fn add_stochastic_k<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::stochastic_k)
    }

    /// Adds `<i>_stochastic_D_<N>_<N>` for each period.
    ///
    /// # Errors
    ///
    /// Same as [`add_stochastic_k`](Self::add_stochastic_k).
    pub fn add_stochastic_d<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::stochastic_d)
    }

    /// Adds `<i>_momentum_<N>` for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_momentum<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::momentum)
    }

    /// Adds `<i>_williams_R_<N>` for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_williams_r<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::williams_r)
    }

    /// Adds `<i>_AD_oscillator`.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_ad_oscillator<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>) -> Result<()> {
        self.run(frame, &[IndicatorKey::ad_oscillator()]).map(drop)
    }

    /// Adds `<i>_disparity_<N>` for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_disparity<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::disparity)
    }

    /// Adds `<i>_MACD_<N1>_<N2>` for each period pair.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_macd<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, pairs: &[(usize, usize)]) -> Result<()> {
        let keys: Vec<IndicatorKey> = pairs
            .iter()
            .map(|&(fast, slow)| IndicatorKey::macd(fast, slow))
            .collect();
        self.run(frame, &keys).map(drop)
    }

    /// Adds the three `<i>_bollinger_{high,middle,low}_<N>` columns for each period.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_bollinger<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::bollinger)
    }

    /// Adds `<i>_OBV`, or nothing if the frame has no complete volume column.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_obv<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>) -> Result<()> {
        self.run(frame, &[IndicatorKey::obv()]).map(drop)
    }

    /// Adds `<i>_OBV_stdev_<N>` for each period, or nothing if the frame has
    /// no complete volume column.
    ///
    /// # Errors
    ///
    /// See [`apply`](Self::apply).
    pub fn add_obv_stddev<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, periods: &[usize]) -> Result<()> {
        self.run_periods(frame, periods, IndicatorKey::obv_stddev)
    }

    fn run_periods<D: Ord + Clone>(
        &self,
        frame: &mut PriceFrame<D>,
        periods: &[usize],
        make: fn(usize) -> IndicatorKey,
    ) -> Result<()> {
        let keys: Vec<IndicatorKey> = periods.iter().map(|&p| make(p)).collect();
        self.run(frame, &keys).map(drop)
    }

    fn run<D: Ord + Clone>(&self, frame: &mut PriceFrame<D>, keys: &[IndicatorKey]) -> Result<Vec<String>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        keys.iter().try_for_each(validate_key)?;

        let inputs = frame.ohlcv(&self.columns)?;
        let data = inputs.as_ohlcv()?;
        debug!(
            instrument = %self.instrument,
            rows = data.len(),
            indicators = keys.len(),
            "applying indicators"
        );

        let mut session = IndicatorSession::new(data, self.rsi_eviction);
        let mut pending: Vec<(String, DerivedColumn<D>)> = Vec::new();
        for key in keys {
            if key.kind().requires_volume() && data.volume.is_none() {
                warn!(
                    instrument = %self.instrument,
                    indicator = %key,
                    column = %self.columns.volume,
                    "volume column missing or incomplete, skipping indicator"
                );
                continue;
            }
            let outputs = session.outputs(key)?;
            for (name, series) in key.column_names(&self.instrument).into_iter().zip(outputs) {
                pending.push((name, DerivedColumn::from_positions(frame.dates(), series)?));
            }
        }

        let written = pending.iter().map(|(name, _)| name.clone()).collect();
        for (name, column) in pending {
            frame.merge(name, &column);
        }
        Ok(written)
    }
}
