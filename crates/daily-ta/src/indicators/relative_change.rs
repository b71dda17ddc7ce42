//! Daily and averaged relative difference between open and close.
//!
//! # Formula
//!
//! ```text
//! RD[i]     = (close[i] - open[i]) / open[i]        (open == 0 → 1e-7)
//! AvgRD[i]  = mean(RD[i-N+1 ..= i])
//! ```
//!
//! The daily value has no warm-up. The N-day average is first defined at
//! position N - 1.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::relative_change::relative_difference;
//!
//! let open = vec![10.0_f64, 5.0];
//! let close = vec![11.0_f64, 5.0];
//! let rd = relative_difference(&open, &close).unwrap();
//! assert!((rd[0].unwrap() - 0.1).abs() < 1e-12);
//! assert_eq!(rd[1], Some(0.0));
//! ```

use crate::error::Result;
use crate::kernels::WindowBuffer;
use crate::traits::{validate_period, validate_same_length, SeriesElement};
use crate::utils::guard_zero;

/// First defined position of the daily relative difference.
#[inline]
#[must_use]
pub const fn relative_difference_lookback() -> usize {
    0
}

/// First defined position of the `period`-day average relative difference.
#[inline]
#[must_use]
pub const fn average_relative_difference_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

#[inline]
fn daily<T: SeriesElement>(open: T, close: T) -> T {
    (close - open) / guard_zero(open)
}

/// Computes `(close - open) / open` for every row.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` if `open` and `close` differ in length.
pub fn relative_difference<T: SeriesElement>(open: &[T], close: &[T]) -> Result<Vec<Option<T>>> {
    validate_same_length(&[("open", open), ("close", close)])?;
    Ok(open
        .iter()
        .zip(close)
        .map(|(&o, &c)| Some(daily(o, c)))
        .collect())
}

/// Computes the rolling mean of the daily relative difference over `period` rows.
///
/// # Errors
///
/// Returns an error if:
/// - The period is zero (`Error::InvalidPeriod`)
/// - `open` and `close` differ in length (`Error::LengthMismatch`)
pub fn average_relative_difference<T: SeriesElement>(
    open: &[T],
    close: &[T],
    period: usize,
) -> Result<Vec<Option<T>>> {
    validate_period(period)?;
    validate_same_length(&[("open", open), ("close", close)])?;

    let mut window = WindowBuffer::new(period);
    let mut result = vec![None; open.len()];
    for (i, (&o, &c)) in open.iter().zip(close).enumerate() {
        window.push(daily(o, c));
        if i >= average_relative_difference_lookback(period) {
            result[i] = window.mean();
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, EPSILON};

    #[test]
    fn test_zero_open_uses_pseudo_zero() {
        let rd = relative_difference(&[0.0_f64], &[1.0]).unwrap();
        assert!(approx_eq(rd[0].unwrap(), 1.0 / 1e-7, 1e-3));

        let flat = relative_difference(&[5.0_f64], &[5.0]).unwrap();
        assert_eq!(flat[0], Some(0.0));
    }

    #[test]
    fn test_average_warm_up() {
        let open = vec![10.0_f64, 10.0, 10.0, 10.0];
        let close = vec![11.0_f64, 12.0, 9.0, 10.0];
        let avg = average_relative_difference(&open, &close, 3).unwrap();

        assert_eq!(avg[0], None);
        assert_eq!(avg[1], None);
        // (0.1 + 0.2 - 0.1) / 3
        assert!(approx_eq(avg[2].unwrap(), 0.2 / 3.0, EPSILON));
        // (0.2 - 0.1 + 0.0) / 3
        assert!(approx_eq(avg[3].unwrap(), 0.1 / 3.0, EPSILON));
    }

    #[test]
    fn test_average_period_one_equals_daily() {
        let open = vec![4.0_f64, 8.0];
        let close = vec![5.0_f64, 6.0];
        assert_eq!(
            average_relative_difference(&open, &close, 1).unwrap(),
            relative_difference(&open, &close).unwrap()
        );
    }

    #[test]
    fn test_length_mismatch() {
        let result = relative_difference(&[1.0_f64, 2.0], &[1.0]);
        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }
}
