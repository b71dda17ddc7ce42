//! Shared numeric helpers.
//!
//! # Pseudo-zero guard
//!
//! Relative difference, Williams %R, the AD oscillator and the RSI down-move
//! average replace a zero denominator with [`PSEUDO_ZERO`] instead of failing.
//! Stochastic %K is the exception and reports
//! [`Error::IndeterminateValue`](crate::Error::IndeterminateValue).
//!
//! # Example
//!
//! ```
//! use daily_ta::utils::{guard_zero, PSEUDO_ZERO};
//!
//! assert_eq!(guard_zero(0.0_f64), PSEUDO_ZERO);
//! assert_eq!(guard_zero(2.5_f64), 2.5);
//! ```

use crate::traits::SeriesElement;

/// Substitute denominator used when a guarded division would divide by zero.
pub const PSEUDO_ZERO: f64 = 1e-7;

/// Standard epsilon for high-precision floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for results built from many accumulated operations.
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Returns `value`, or the pseudo-zero if `value` is exactly zero.
#[inline]
#[must_use]
pub fn guard_zero<T: SeriesElement>(value: T) -> T {
    if value == T::zero() {
        T::pseudo_zero()
    } else {
        value
    }
}

/// Approximate equality check for floating-point values.
///
/// Returns `true` if `a` and `b` are within `tolerance` of each other,
/// or if both are NaN.
///
/// ```
/// use daily_ta::utils::{approx_eq, EPSILON};
///
/// assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
/// assert!(!approx_eq(1.0, 2.0, EPSILON));
/// ```
#[inline]
#[must_use]
pub fn approx_eq<T: SeriesElement>(a: T, b: T, tolerance: T) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < tolerance
}

/// Counts the absent values at the start of a series.
///
/// For every processor this equals its lookback when the input is long enough.
///
/// ```
/// use daily_ta::utils::count_absent_prefix;
///
/// assert_eq!(count_absent_prefix(&[None, None, Some(1.0), None]), 2);
/// ```
#[inline]
#[must_use]
pub fn count_absent_prefix<T>(series: &[Option<T>]) -> usize {
    series.iter().take_while(|v| v.is_none()).count()
}

/// Counts the defined values in a series.
#[inline]
#[must_use]
pub fn count_defined<T>(series: &[Option<T>]) -> usize {
    series.iter().filter(|v| v.is_some()).count()
}
