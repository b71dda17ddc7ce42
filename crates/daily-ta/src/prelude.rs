//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use daily_ta::prelude::*;
//!
//! let open = vec![10.0_f64, 10.0, 11.0];
//! let close = vec![10.0_f64, 11.0, 10.5];
//! let volume = vec![100.0_f64, 150.0, 120.0];
//!
//! let balance = obv(&open, &close, &volume).unwrap();
//! assert_eq!(balance[2], Some(130.0));
//! ```

// Error types
pub use crate::error::{Error, Result};

// Traits
pub use crate::traits::SeriesElement;

// Frame-level API
pub use crate::config::{ColumnNames, EngineConfig, IndicatorSet};
pub use crate::engine::IndicatorEngine;
pub use crate::frame::{DerivedColumn, PriceFrame};
pub use crate::key::{IndicatorKey, IndicatorKind};
pub use crate::session::{IndicatorSession, Ohlcv};

// Indicator functions
pub use crate::indicators::{
    ad_oscillator, average_relative_difference, average_true_range, bollinger, bollinger_from_ma,
    disparity, disparity_from_ma, exponential_moving_average, macd, macd_from_emas, momentum,
    moving_average, obv, obv_stddev, obv_stddev_from_obv, relative_difference, rsi, stochastic,
    stochastic_d, stochastic_d_from_k, stochastic_k, true_range, week_high, week_low,
    weeks_to_days, williams_r,
};

// Multi-output types and options
pub use crate::indicators::{BollingerOutput, RsiEviction, StochasticOutput};

// Lookback functions
pub use crate::indicators::ad_oscillator::ad_oscillator_lookback;
pub use crate::indicators::atr::atr_lookback;
pub use crate::indicators::bollinger::bollinger_lookback;
pub use crate::indicators::disparity::disparity_lookback;
pub use crate::indicators::ema::ema_lookback;
pub use crate::indicators::extrema::week_extrema_lookback;
pub use crate::indicators::macd::macd_lookback;
pub use crate::indicators::momentum::momentum_lookback;
pub use crate::indicators::moving_average::moving_average_lookback;
pub use crate::indicators::obv::{obv_lookback, obv_stddev_lookback};
pub use crate::indicators::relative_change::{
    average_relative_difference_lookback, relative_difference_lookback,
};
pub use crate::indicators::rsi::rsi_lookback;
pub use crate::indicators::stochastic::{stochastic_d_lookback, stochastic_k_lookback};
pub use crate::indicators::williams_r::williams_r_lookback;
