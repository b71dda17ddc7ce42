//! Bollinger Bands around the simple moving average.
//!
//! # Formula
//!
//! ```text
//! middle[t] = MA_N[t]
//! high[t]   = MA_N[t] + 2 * sd(close[t-N+1 ..= t])
//! low[t]    = MA_N[t] - 2 * sd(close[t-N+1 ..= t])
//! ```
//!
//! `sd` is the sample standard deviation (`N - 1` denominator), so the period
//! must be at least 2. All three bands share the moving average's warm-up and
//! the middle band is the moving average value itself, not a recomputation.
//!
//! # Example
//!
//! ```
//! use daily_ta::indicators::bollinger::bollinger;
//!
//! let close = vec![1.0_f64, 3.0, 5.0];
//! let bands = bollinger(&close, 2).unwrap();
//!
//! assert_eq!(bands.middle[0], None);
//! assert_eq!(bands.middle[1], Some(2.0));
//! // sample sd of [1, 3] is sqrt(2)
//! let sd = 2.0_f64.sqrt();
//! assert!((bands.high[1].unwrap() - (2.0 + 2.0 * sd)).abs() < 1e-12);
//! assert!((bands.low[1].unwrap() - (2.0 - 2.0 * sd)).abs() < 1e-12);
//! ```

use crate::error::Result;
use crate::indicators::moving_average::{moving_average, moving_average_lookback};
use crate::kernels::WindowBuffer;
use crate::traits::{validate_lengths, validate_period_at_least_two, SeriesElement};

/// The three Bollinger bands.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerOutput<T> {
    /// Upper band.
    pub high: Vec<Option<T>>,
    /// Middle band (the moving average).
    pub middle: Vec<Option<T>>,
    /// Lower band.
    pub low: Vec<Option<T>>,
}

/// First defined position of `period`-row Bollinger Bands.
#[inline]
#[must_use]
pub const fn bollinger_lookback(period: usize) -> usize {
    moving_average_lookback(period)
}

/// Computes Bollinger Bands, computing the moving average privately.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is below 2.
pub fn bollinger<T: SeriesElement>(close: &[T], period: usize) -> Result<BollingerOutput<T>> {
    validate_period_at_least_two(period)?;
    let ma = moving_average(close, period)?;
    bollinger_from_ma(close, &ma, period)
}

/// Computes Bollinger Bands from a precomputed `period`-row moving average.
///
/// # Errors
///
/// Returns an error if:
/// - The period is below 2 (`Error::InvalidPeriod`)
/// - `close` and `ma` differ in length (`Error::LengthMismatch`)
pub fn bollinger_from_ma<T: SeriesElement>(
    close: &[T],
    ma: &[Option<T>],
    period: usize,
) -> Result<BollingerOutput<T>> {
    validate_period_at_least_two(period)?;
    validate_lengths(&[("close", close.len()), ("moving average", ma.len())])?;

    let len = close.len();
    let mut out = BollingerOutput {
        high: vec![None; len],
        middle: vec![None; len],
        low: vec![None; len],
    };

    let mut window = WindowBuffer::new(period);
    for (i, &c) in close.iter().enumerate() {
        window.push(c);
        if i < bollinger_lookback(period) {
            continue;
        }
        let (Some(mid), Some(sd)) = (ma[i], window.sample_stddev()) else {
            continue;
        };
        let width = T::two() * sd;
        out.high[i] = Some(mid + width);
        out.middle[i] = Some(mid);
        out.low[i] = Some(mid - width);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::utils::{approx_eq, count_absent_prefix, EPSILON};

    #[test]
    fn test_middle_equals_moving_average() {
        let close = vec![10.1_f64, 10.7, 9.8, 11.2, 12.4, 11.9, 12.8, 13.3];
        let ma = moving_average(&close, 4).unwrap();
        let bands = bollinger(&close, 4).unwrap();
        assert_eq!(bands.middle, ma);
        assert_eq!(count_absent_prefix(&bands.high), 3);
        assert_eq!(count_absent_prefix(&bands.low), 3);
    }

    #[test]
    fn test_bands_symmetric() {
        let close = vec![2.0_f64, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let bands = bollinger(&close, 3).unwrap();
        for i in 2..close.len() {
            let mid = bands.middle[i].unwrap();
            let up = bands.high[i].unwrap() - mid;
            let down = mid - bands.low[i].unwrap();
            assert!(up >= 0.0);
            assert!(approx_eq(up, down, EPSILON));
        }
    }

    #[test]
    fn test_constant_series_collapses() {
        let close = vec![3.0_f64; 5];
        let bands = bollinger(&close, 3).unwrap();
        assert_eq!(bands.high[4], Some(3.0));
        assert_eq!(bands.low[4], Some(3.0));
    }

    #[test]
    fn test_rejects_period_one() {
        let close = vec![1.0_f64, 2.0];
        assert!(matches!(
            bollinger(&close, 1),
            Err(Error::InvalidPeriod { period: 1, .. })
        ));
    }
}
