//! daily-ta: single-pass technical indicators over daily OHLCV rows
//!
//! This crate turns date-ordered open/high/low/close/volume series into
//! sixteen indicator families. Each processor makes one left-to-right scan,
//! keeps a small bounded window, and emits a value once its warm-up is
//! complete. Rows before that are absent (`None`), never zero.
//!
//! # Layers
//!
//! - [`indicators`]: pure functions over slices returning `Vec<Option<T>>`,
//!   generic over `f32` and `f64`
//! - [`session`]: a per-computation cache so composite indicators reuse
//!   their dependency instead of rescanning
//! - [`frame`] and [`engine`]: a date-keyed frame augmented with named
//!   columns such as `SPX_MA20` or `SPX_bollinger_high_20`
//! - [`config`]: serde-backed selection of columns and indicator periods
//!
//! # Quick Start
//!
//! ```
//! use daily_ta::prelude::*;
//!
//! let close = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
//! let ma = moving_average(&close, 3).unwrap();
//!
//! assert_eq!(ma, vec![None, None, Some(11.0), Some(12.0), Some(13.0)]);
//! ```
//!
//! # Numeric edge cases
//!
//! Zero denominators in relative difference, Williams %R, the AD oscillator
//! and the RSI down-move average are replaced by `1e-7`. Stochastic %K has no
//! such guard: a flat window fails with [`Error::IndeterminateValue`].
//!
//! ```
//! use daily_ta::prelude::*;
//!
//! let flat = vec![5.0_f64; 3];
//! let result = stochastic_k(&flat, &flat, &flat, 3);
//! assert!(matches!(result, Err(Error::IndeterminateValue { index: 2, .. })));
//! ```
//!
//! # Logging
//!
//! Diagnostics go through `tracing`. The crate never installs a subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod engine;
pub mod error;
pub mod frame;
pub mod indicators;
pub mod kernels;
pub mod key;
pub mod prelude;
pub mod session;
pub mod traits;
pub mod utils;

// Re-export commonly used types at crate root
pub use config::{ColumnNames, EngineConfig, IndicatorSet};
pub use engine::IndicatorEngine;
pub use error::{Error, Result};
pub use frame::{DerivedColumn, PriceFrame};
pub use indicators::RsiEviction;
pub use key::{IndicatorKey, IndicatorKind};
pub use session::{IndicatorSession, Ohlcv};
pub use traits::SeriesElement;
pub use utils::{approx_eq, count_absent_prefix, EPSILON, LOOSE_EPSILON, PSEUDO_ZERO};
