//! Indicator identity and output column naming.
//!
//! An [`IndicatorKey`] names one configured indicator: its [`IndicatorKind`]
//! plus its integer parameters. Keys are hashable and serve as the
//! memoization key inside an [`IndicatorSession`](crate::session::IndicatorSession),
//! and they know the names of the columns they produce.
//!
//! # Example
//!
//! ```
//! use daily_ta::key::{IndicatorKey, IndicatorKind};
//!
//! let ma = IndicatorKey::moving_average(20);
//! assert_eq!(ma.kind(), IndicatorKind::MovingAverage);
//! assert_eq!(ma.column_names("SPX"), vec!["SPX_MA20"]);
//!
//! let macd = IndicatorKey::macd(12, 26);
//! assert_eq!(macd.column_names("SPX"), vec!["SPX_MACD_12_26"]);
//! ```

use std::fmt;

/// Enumeration of the indicator families the engine computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IndicatorKind {
    /// Daily relative open-to-close change
    RelativeChange,
    /// Average relative change over a window
    AverageRelativeChange,
    /// Simple moving average
    MovingAverage,
    /// Exponential moving average
    ExponentialMovingAverage,
    /// Average true range
    AverageTrueRange,
    /// Highest high over whole weeks
    WeekHigh,
    /// Lowest low over whole weeks
    WeekLow,
    /// Relative strength index
    Rsi,
    /// Stochastic %K
    StochasticK,
    /// Stochastic %D
    StochasticD,
    /// Momentum
    Momentum,
    /// Williams %R
    WilliamsR,
    /// Accumulation/distribution oscillator
    AdOscillator,
    /// Disparity
    Disparity,
    /// Moving average convergence divergence
    Macd,
    /// Bollinger Bands
    Bollinger,
    /// On-balance volume
    Obv,
    /// Rolling standard deviation of on-balance volume
    ObvStddev,
}

impl IndicatorKind {
    /// Returns a short human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RelativeChange => "relative_change",
            Self::AverageRelativeChange => "average_relative_change",
            Self::MovingAverage => "MA",
            Self::ExponentialMovingAverage => "EMA",
            Self::AverageTrueRange => "ATR",
            Self::WeekHigh => "week_high",
            Self::WeekLow => "week_low",
            Self::Rsi => "RSI",
            Self::StochasticK => "stochastic_K",
            Self::StochasticD => "stochastic_D",
            Self::Momentum => "momentum",
            Self::WilliamsR => "williams_R",
            Self::AdOscillator => "AD_oscillator",
            Self::Disparity => "disparity",
            Self::Macd => "MACD",
            Self::Bollinger => "bollinger",
            Self::Obv => "OBV",
            Self::ObvStddev => "OBV_stdev",
        }
    }

    /// Returns the number of integer parameters the kind takes.
    #[must_use]
    pub const fn param_count(self) -> usize {
        match self {
            Self::RelativeChange | Self::AdOscillator | Self::Obv => 0,
            Self::Macd => 2,
            _ => 1,
        }
    }

    /// Returns the number of output columns produced.
    #[must_use]
    pub const fn output_count(self) -> usize {
        match self {
            Self::Bollinger => 3,
            _ => 1,
        }
    }

    /// Returns true if the kind needs a Volume column.
    #[must_use]
    pub const fn requires_volume(self) -> bool {
        matches!(self, Self::Obv | Self::ObvStddev)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One configured indicator: a kind and its integer parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndicatorKey {
    kind: IndicatorKind,
    params: Vec<usize>,
}

impl IndicatorKey {
    fn with_params(kind: IndicatorKind, params: Vec<usize>) -> Self {
        debug_assert_eq!(params.len(), kind.param_count());
        Self { kind, params }
    }

    /// Daily relative change.
    #[must_use]
    pub fn relative_change() -> Self {
        Self::with_params(IndicatorKind::RelativeChange, Vec::new())
    }

    /// Average relative change over `period` rows.
    #[must_use]
    pub fn average_relative_change(period: usize) -> Self {
        Self::with_params(IndicatorKind::AverageRelativeChange, vec![period])
    }

    /// Simple moving average over `period` rows.
    #[must_use]
    pub fn moving_average(period: usize) -> Self {
        Self::with_params(IndicatorKind::MovingAverage, vec![period])
    }

    /// Exponential moving average over `period` rows.
    #[must_use]
    pub fn exponential_moving_average(period: usize) -> Self {
        Self::with_params(IndicatorKind::ExponentialMovingAverage, vec![period])
    }

    /// Average true range over `period` rows.
    #[must_use]
    pub fn average_true_range(period: usize) -> Self {
        Self::with_params(IndicatorKind::AverageTrueRange, vec![period])
    }

    /// Highest high over `weeks` weeks.
    #[must_use]
    pub fn week_high(weeks: usize) -> Self {
        Self::with_params(IndicatorKind::WeekHigh, vec![weeks])
    }

    /// Lowest low over `weeks` weeks.
    #[must_use]
    pub fn week_low(weeks: usize) -> Self {
        Self::with_params(IndicatorKind::WeekLow, vec![weeks])
    }

    /// RSI over `period` moves.
    #[must_use]
    pub fn rsi(period: usize) -> Self {
        Self::with_params(IndicatorKind::Rsi, vec![period])
    }

    /// Stochastic %K over `period` rows.
    #[must_use]
    pub fn stochastic_k(period: usize) -> Self {
        Self::with_params(IndicatorKind::StochasticK, vec![period])
    }

    /// Stochastic %D over `period` rows.
    #[must_use]
    pub fn stochastic_d(period: usize) -> Self {
        Self::with_params(IndicatorKind::StochasticD, vec![period])
    }

    /// Momentum over `period` rows.
    #[must_use]
    pub fn momentum(period: usize) -> Self {
        Self::with_params(IndicatorKind::Momentum, vec![period])
    }

    /// Williams %R over `period` rows.
    #[must_use]
    pub fn williams_r(period: usize) -> Self {
        Self::with_params(IndicatorKind::WilliamsR, vec![period])
    }

    /// Accumulation/distribution oscillator.
    #[must_use]
    pub fn ad_oscillator() -> Self {
        Self::with_params(IndicatorKind::AdOscillator, Vec::new())
    }

    /// Disparity against the `period`-row moving average.
    #[must_use]
    pub fn disparity(period: usize) -> Self {
        Self::with_params(IndicatorKind::Disparity, vec![period])
    }

    /// MACD line `EMA_fast - EMA_slow`.
    #[must_use]
    pub fn macd(fast: usize, slow: usize) -> Self {
        Self::with_params(IndicatorKind::Macd, vec![fast, slow])
    }

    /// Bollinger Bands over `period` rows.
    #[must_use]
    pub fn bollinger(period: usize) -> Self {
        Self::with_params(IndicatorKind::Bollinger, vec![period])
    }

    /// On-balance volume.
    #[must_use]
    pub fn obv() -> Self {
        Self::with_params(IndicatorKind::Obv, Vec::new())
    }

    /// Standard deviation of on-balance volume over `period` rows.
    #[must_use]
    pub fn obv_stddev(period: usize) -> Self {
        Self::with_params(IndicatorKind::ObvStddev, vec![period])
    }

    /// Returns the indicator kind.
    #[must_use]
    pub const fn kind(&self) -> IndicatorKind {
        self.kind
    }

    /// Returns the integer parameters.
    #[must_use]
    pub fn params(&self) -> &[usize] {
        &self.params
    }

    /// Returns the first parameter, or 0 for parameterless kinds.
    #[must_use]
    pub fn period(&self) -> usize {
        self.params.first().copied().unwrap_or(0)
    }

    /// Returns the output column names for `instrument`, in output order.
    ///
    /// Bollinger Bands produce `high`, `middle`, `low` in that order.
    #[must_use]
    pub fn column_names(&self, instrument: &str) -> Vec<String> {
        let p = self.period();
        match self.kind {
            IndicatorKind::RelativeChange => vec![format!("{instrument}_relative_change_perc_1")],
            IndicatorKind::AverageRelativeChange => {
                vec![format!("{instrument}_relative_change_perc_{p}")]
            }
            IndicatorKind::MovingAverage => vec![format!("{instrument}_MA{p}")],
            IndicatorKind::ExponentialMovingAverage => vec![format!("{instrument}_EMA{p}")],
            IndicatorKind::AverageTrueRange => vec![format!("{instrument}_ATR{p}")],
            IndicatorKind::StochasticD => vec![format!("{instrument}_stochastic_D_{p}_{p}")],
            IndicatorKind::AdOscillator | IndicatorKind::Obv => {
                vec![format!("{instrument}_{}", self.kind.name())]
            }
            IndicatorKind::Macd => {
                let slow = self.params.get(1).copied().unwrap_or(0);
                vec![format!("{instrument}_MACD_{p}_{slow}")]
            }
            IndicatorKind::Bollinger => ["high", "middle", "low"]
                .iter()
                .map(|band| format!("{instrument}_bollinger_{band}_{p}"))
                .collect(),
            IndicatorKind::WeekHigh
            | IndicatorKind::WeekLow
            | IndicatorKind::Rsi
            | IndicatorKind::StochasticK
            | IndicatorKind::Momentum
            | IndicatorKind::WilliamsR
            | IndicatorKind::Disparity
            | IndicatorKind::ObvStddev => vec![format!("{instrument}_{}_{p}", self.kind.name())],
        }
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
            write!(f, "({})", params.join(", "))?;
        }
        Ok(())
    }
}
