//! Per-computation memoization of indicator outputs.
//!
//! An [`IndicatorSession`] borrows the price series of one instrument and
//! caches every output it computes under its [`IndicatorKey`]. Composite
//! indicators fetch their dependency through the same cache, so a moving
//! average requested directly and again by disparity and Bollinger Bands is
//! scanned once.
//!
//! The session owns no price data and is meant to be dropped when the
//! computation ends. Nothing is cached across sessions.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::RsiEviction;
//! use daily_ta::session::{IndicatorSession, Ohlcv};
//! use daily_ta::key::IndicatorKey;
//!
//! let open = [10.0_f64, 11.0, 12.0, 13.0];
//! let high = [11.0_f64, 12.0, 13.0, 14.0];
//! let low = [9.0_f64, 10.0, 11.0, 12.0];
//! let close = [10.5_f64, 11.5, 12.5, 13.5];
//!
//! let data = Ohlcv::new(&open, &high, &low, &close, None).unwrap();
//! let mut session = IndicatorSession::new(data, RsiEviction::default());
//!
//! let disparity = session.series(&IndicatorKey::disparity(2)).unwrap().to_vec();
//! assert_eq!(disparity[0], None);
//!
//! // the moving average was computed once, as a dependency
//! assert!(session.contains(&IndicatorKey::moving_average(2)));
//! assert_eq!(session.len(), 2);
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::indicators::{
    ad_oscillator, average_relative_difference, average_true_range, bollinger_from_ma,
    disparity_from_ma, exponential_moving_average, macd_from_emas, momentum, moving_average, obv,
    obv_stddev_from_obv, relative_difference, rsi, stochastic_d_from_k, stochastic_k, week_high,
    week_low, williams_r, RsiEviction,
};
use crate::key::{IndicatorKey, IndicatorKind};
use crate::traits::{validate_same_length, SeriesElement};
use crate::utils::count_defined;

/// Parallel OHLCV slices for one instrument.
#[derive(Debug, Clone, Copy)]
pub struct Ohlcv<'a, T> {
    /// Open prices
    pub open: &'a [T],
    /// High prices
    pub high: &'a [T],
    /// Low prices
    pub low: &'a [T],
    /// Close prices
    pub close: &'a [T],
    /// Volume, when the source has it
    pub volume: Option<&'a [T]>,
}

impl<'a, T: SeriesElement> Ohlcv<'a, T> {
    /// Bundles the slices after checking that their lengths agree.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if any slice differs in length from `open`.
    pub fn new(
        open: &'a [T],
        high: &'a [T],
        low: &'a [T],
        close: &'a [T],
        volume: Option<&'a [T]>,
    ) -> Result<Self> {
        validate_same_length(&[("open", open), ("high", high), ("low", low), ("close", close)])?;
        if let Some(volume) = volume {
            validate_same_length(&[("open", open), ("volume", volume)])?;
        }
        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.close.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    fn volume(&self) -> Result<&'a [T]> {
        self.volume.ok_or_else(|| Error::MissingColumn {
            column: "volume".to_string(),
        })
    }
}

/// Memoizing evaluator for one instrument's indicators.
#[derive(Debug)]
pub struct IndicatorSession<'a, T> {
    data: Ohlcv<'a, T>,
    rsi_eviction: RsiEviction,
    cache: HashMap<IndicatorKey, Vec<Vec<Option<T>>>>,
}

impl<'a, T: SeriesElement> IndicatorSession<'a, T> {
    /// Creates an empty session over `data`.
    #[must_use]
    pub fn new(data: Ohlcv<'a, T>, rsi_eviction: RsiEviction) -> Self {
        Self {
            data,
            rsi_eviction,
            cache: HashMap::new(),
        }
    }

    /// Returns true if `key` has already been computed.
    #[must_use]
    pub fn contains(&self, key: &IndicatorKey) -> bool {
        self.cache.contains_key(key)
    }

    /// Number of cached indicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if nothing has been computed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns every output series of `key`, computing it if needed.
    ///
    /// Outputs are in [`IndicatorKey::column_names`] order.
    ///
    /// # Errors
    ///
    /// Propagates the processor's error, and returns `Error::MissingColumn`
    /// for volume indicators when the data has no volume.
    pub fn outputs(&mut self, key: &IndicatorKey) -> Result<&[Vec<Option<T>>]> {
        self.ensure(key)?;
        Ok(&self.cache[key])
    }

    /// Returns the first output series of `key`, computing it if needed.
    ///
    /// # Errors
    ///
    /// Same as [`outputs`](Self::outputs).
    pub fn series(&mut self, key: &IndicatorKey) -> Result<&[Option<T>]> {
        self.ensure(key)?;
        Ok(self.cached(key))
    }

    fn cached(&self, key: &IndicatorKey) -> &[Option<T>] {
        self.cache
            .get(key)
            .and_then(|outputs| outputs.first())
            .map_or(&[][..], Vec::as_slice)
    }

    fn ensure(&mut self, key: &IndicatorKey) -> Result<()> {
        if self.cache.contains_key(key) {
            debug!(indicator = %key, "session cache hit");
            return Ok(());
        }
        let outputs = self.compute(key)?;
        debug!(
            indicator = %key,
            rows = self.data.len(),
            defined = outputs.first().map_or(0, |s| count_defined(s)),
            "computed indicator"
        );
        self.cache.insert(key.clone(), outputs);
        Ok(())
    }

    fn compute(&mut self, key: &IndicatorKey) -> Result<Vec<Vec<Option<T>>>> {
        let Ohlcv {
            open,
            high,
            low,
            close,
            ..
        } = self.data;
        let p = key.period();

        let single = match key.kind() {
            IndicatorKind::RelativeChange => relative_difference(open, close)?,
            IndicatorKind::AverageRelativeChange => average_relative_difference(open, close, p)?,
            IndicatorKind::MovingAverage => moving_average(close, p)?,
            IndicatorKind::ExponentialMovingAverage => exponential_moving_average(close, p)?,
            IndicatorKind::AverageTrueRange => average_true_range(high, low, close, p)?,
            IndicatorKind::WeekHigh => week_high(high, p)?,
            IndicatorKind::WeekLow => week_low(low, p)?,
            IndicatorKind::Rsi => rsi(open, close, p, self.rsi_eviction)?,
            IndicatorKind::StochasticK => stochastic_k(high, low, close, p)?,
            IndicatorKind::StochasticD => {
                let k = IndicatorKey::stochastic_k(p);
                self.ensure(&k)?;
                stochastic_d_from_k(self.cached(&k), p)?
            }
            IndicatorKind::Momentum => momentum(close, p)?,
            IndicatorKind::WilliamsR => williams_r(high, low, close, p)?,
            IndicatorKind::AdOscillator => ad_oscillator(high, low, close)?,
            IndicatorKind::Disparity => {
                let ma = IndicatorKey::moving_average(p);
                self.ensure(&ma)?;
                disparity_from_ma(close, self.cached(&ma), p)?
            }
            IndicatorKind::Macd => {
                let slow_period = key.params().get(1).copied().unwrap_or(0);
                let fast = IndicatorKey::exponential_moving_average(p);
                let slow = IndicatorKey::exponential_moving_average(slow_period);
                self.ensure(&fast)?;
                self.ensure(&slow)?;
                macd_from_emas(self.cached(&fast), self.cached(&slow), p, slow_period)?
            }
            IndicatorKind::Bollinger => {
                let ma = IndicatorKey::moving_average(p);
                self.ensure(&ma)?;
                let bands = bollinger_from_ma(close, self.cached(&ma), p)?;
                return Ok(vec![bands.high, bands.middle, bands.low]);
            }
            IndicatorKind::Obv => obv(open, close, self.data.volume()?)?,
            IndicatorKind::ObvStddev => {
                let base = IndicatorKey::obv();
                self.ensure(&base)?;
                obv_stddev_from_obv(self.cached(&base), p)?
            }
        };
        Ok(vec![single])
    }
}
