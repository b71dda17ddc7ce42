//! Simple moving average of the close.
//!
//! The mean is taken over the trailing `period` closes and is first defined
//! once `index + 1 >= period`. Each emitted value is the mean of the window
//! buffer itself rather than a running sum, so a constant series yields that
//! constant exactly.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::moving_average::moving_average;
//!
//! let close = vec![10.0_f64, 11.0, 12.0, 13.0, 14.0];
//! let ma = moving_average(&close, 3).unwrap();
//!
//! assert_eq!(ma[..2], [None, None]);
//! assert_eq!(ma[2..], [Some(11.0), Some(12.0), Some(13.0)]);
//! ```

use crate::error::Result;
use crate::kernels::WindowBuffer;
use crate::traits::{validate_period, SeriesElement};

/// First defined position of a `period`-row moving average.
#[inline]
#[must_use]
pub const fn moving_average_lookback(period: usize) -> usize {
    period.saturating_sub(1)
}

/// Computes the `period`-row simple moving average of `close`.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
pub fn moving_average<T: SeriesElement>(close: &[T], period: usize) -> Result<Vec<Option<T>>> {
    validate_period(period)?;

    let mut window = WindowBuffer::new(period);
    let mut result = vec![None; close.len()];
    for (i, &c) in close.iter().enumerate() {
        window.push(c);
        if i + 1 >= period {
            result[i] = window.mean();
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::count_absent_prefix;

    #[test]
    fn test_constant_series() {
        let close = vec![7.25_f64; 12];
        let ma = moving_average(&close, 5).unwrap();
        assert_eq!(count_absent_prefix(&ma), moving_average_lookback(5));
        for value in ma.iter().flatten() {
            assert_eq!(*value, 7.25);
        }
    }

    #[test]
    fn test_f32() {
        let close = vec![1.0_f32, 2.0, 3.0];
        let ma = moving_average(&close, 2).unwrap();
        assert_eq!(ma, vec![None, Some(1.5), Some(2.5)]);
    }

    #[test]
    fn test_shorter_than_period() {
        let close = vec![1.0_f64, 2.0];
        assert_eq!(moving_average(&close, 3).unwrap(), vec![None, None]);
    }

    #[test]
    fn test_empty() {
        let close: Vec<f64> = Vec::new();
        assert!(moving_average(&close, 3).unwrap().is_empty());
    }
}
