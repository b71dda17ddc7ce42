//! Stochastic oscillator %K and %D.
//!
//! # Formula
//!
//! ```text
//! %K[t] = (close[t] - min(low[t-N+1 ..= t])) / (max(high[t-N+1 ..= t]) - min(low[t-N+1 ..= t]))
//! %D[t] = mean(%K over its last N defined values)
//! ```
//!
//! %K is first defined at position `N - 1`; %D needs `N` values of %K and is
//! first defined at position `2N - 2`.
//!
//! # Zero range
//!
//! Unlike the other oscillators, %K has no pseudo-zero guard. A trailing
//! window whose highest high equals its lowest low is reported as
//! [`Error::IndeterminateValue`] carrying the row position, and the whole
//! computation fails. %D propagates the same error when it computes %K itself.

use crate::error::{Error, Result};
use crate::kernels::{rolling_max, rolling_min, WindowBuffer};
use crate::traits::{validate_period, validate_same_length, SeriesElement};

/// Output of a combined %K / %D computation.
#[derive(Debug, Clone, PartialEq)]
pub struct StochasticOutput<T> {
    /// The %K line.
    pub k: Vec<Option<T>>,
    /// The %D line (mean of %K).
    pub d: Vec<Option<T>>,
}

/// First defined position of `period`-row %K.
#[inline]
#[must_use]
pub const fn stochastic_k_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// First defined position of `period`-row %D.
#[inline]
#[must_use]
pub const fn stochastic_d_lookback(period: usize) -> usize {
    period.saturating_mul(2).saturating_sub(2)
}

/// Computes stochastic %K.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - The series have different lengths (`Error::LengthMismatch`)
/// - A trailing window has zero high-low range (`Error::IndeterminateValue`)
///
/// # Example
///
/// ```
/// use daily_ta::indicators::stochastic::stochastic_k;
///
/// let high = vec![10.0_f64, 12.0, 11.0];
/// let low = vec![8.0_f64, 9.0, 9.0];
/// let close = vec![9.0_f64, 11.0, 10.0];
///
/// let k = stochastic_k(&high, &low, &close, 2).unwrap();
/// assert_eq!(k[0], None);
/// assert_eq!(k[1], Some(0.75)); // (11 - 8) / (12 - 8)
/// ```
pub fn stochastic_k<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<Option<T>>> {
    validate_period(period)?;
    validate_same_length(&[("high", high), ("low", low), ("close", close)])?;

    let highest = rolling_max(high, period)?;
    let lowest = rolling_min(low, period)?;

    let mut result = vec![None; close.len()];
    for i in stochastic_k_lookback(period)..close.len() {
        let (Some(hh), Some(ll)) = (highest[i], lowest[i]) else {
            continue;
        };
        let range = hh - ll;
        if range == T::zero() {
            return Err(Error::IndeterminateValue {
                indicator: "stochastic_k",
                index: i,
            });
        }
        result[i] = Some((close[i] - ll) / range);
    }
    Ok(result)
}

/// Computes stochastic %D, computing %K internally.
///
/// # Errors
///
/// Same as [`stochastic_k`].
pub fn stochastic_d<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<Option<T>>> {
    let k = stochastic_k(high, low, close, period)?;
    stochastic_d_from_k(&k, period)
}

/// Computes %D from a precomputed %K series.
///
/// Only defined %K values enter the window.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
pub fn stochastic_d_from_k<T: SeriesElement>(k: &[Option<T>], period: usize) -> Result<Vec<Option<T>>> {
    validate_period(period)?;

    let mut window = WindowBuffer::new(period);
    let mut result = vec![None; k.len()];
    for (i, value) in k.iter().enumerate() {
        if i < stochastic_k_lookback(period) {
            continue;
        }
        let Some(value) = *value else { continue };
        window.push(value);
        if window.is_full() {
            result[i] = window.mean();
        }
    }
    Ok(result)
}

/// Computes %K and %D together.
///
/// # Errors
///
/// Same as [`stochastic_k`].
pub fn stochastic<T: SeriesElement>(
    high: &[T],
    low: &[T],
    close: &[T],
    period: usize,
) -> Result<StochasticOutput<T>> {
    let k = stochastic_k(high, low, close, period)?;
    let d = stochastic_d_from_k(&k, period)?;
    Ok(StochasticOutput { k, d })
}
