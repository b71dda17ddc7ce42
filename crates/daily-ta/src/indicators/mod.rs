//! Indicator processors.
//!
//! Each processor is a single left-to-right scan over plain slices. It returns
//! one `Option` per input row, and `None` marks rows before the warm-up
//! completes. Every processor has a matching `*_lookback` function giving the
//! first defined position.
//!
//! # Indicators
//!
//! - [`relative_change`]: daily and averaged relative open-to-close change
//! - [`moving_average`]: simple moving average
//! - [`ema`]: exponential moving average seeded with the simple mean
//! - [`atr`]: average true range
//! - [`extrema`]: rolling highest high and lowest low over whole weeks
//! - [`rsi`]: relative strength index over intraday moves
//! - [`stochastic`]: stochastic %K and %D
//! - [`momentum`]: close minus the close `N` rows back
//! - [`williams_r`]: Williams %R
//! - [`ad_oscillator`]: accumulation/distribution oscillator
//! - [`disparity`]: close over its moving average
//! - [`macd`]: difference of two EMAs
//! - [`bollinger`]: bands at two sample deviations around the moving average
//! - [`obv`]: on-balance volume and its rolling sample deviation
//!
//! The composite processors (%D, disparity, MACD, Bollinger, OBV deviation)
//! each come in two forms: one that computes its dependency privately, and a
//! `*_from_*` form that takes the dependency precomputed.

pub mod ad_oscillator;
pub mod atr;
pub mod bollinger;
pub mod disparity;
pub mod ema;
pub mod extrema;
pub mod macd;
pub mod momentum;
pub mod moving_average;
pub mod obv;
pub mod relative_change;
pub mod rsi;
pub mod stochastic;
pub mod williams_r;

pub use ad_oscillator::ad_oscillator;
pub use atr::{average_true_range, true_range};
pub use bollinger::{bollinger, bollinger_from_ma, BollingerOutput};
pub use disparity::{disparity, disparity_from_ma};
pub use ema::exponential_moving_average;
pub use extrema::{week_high, week_low, weeks_to_days};
pub use macd::{macd, macd_from_emas};
pub use momentum::momentum;
pub use moving_average::moving_average;
pub use obv::{obv, obv_stddev, obv_stddev_from_obv};
pub use relative_change::{average_relative_difference, relative_difference};
pub use rsi::{rsi, RsiEviction};
pub use stochastic::{stochastic, stochastic_d, stochastic_d_from_k, stochastic_k, StochasticOutput};
pub use williams_r::williams_r;
