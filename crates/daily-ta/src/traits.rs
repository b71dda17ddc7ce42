//! Core numeric traits and input validation.
//!
//! [`SeriesElement`] abstracts the processors over `f32` and `f64`. The
//! validation helpers here run before any scan starts, so a processor either
//! rejects its arguments up front or completes its single pass.

use num_traits::{Float, NumCast};

use crate::error::{Error, Result};

/// A numeric type usable as an element of a price or indicator series.
///
/// # Example
///
/// ```
/// use daily_ta::traits::SeriesElement;
///
/// fn half_period<T: SeriesElement>(period: usize) -> daily_ta::Result<T> {
///     Ok(T::from_usize(period)? / T::two())
/// }
///
/// assert_eq!(half_period::<f64>(10).unwrap(), 5.0);
/// ```
pub trait SeriesElement: Float + NumCast + Copy + Default + Send + Sync + 'static {
    /// Creates a series element from a `usize` value.
    ///
    /// # Errors
    ///
    /// Returns `Error::NumericConversion` if the value cannot be represented in this type.
    #[inline]
    fn from_usize(value: usize) -> Result<Self> {
        <Self as NumCast>::from(value).ok_or(Error::NumericConversion {
            context: "usize to series element",
        })
    }

    /// Returns the constant 2 as this type.
    #[inline]
    #[must_use]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Returns the constant 100 as this type.
    #[inline]
    #[must_use]
    fn hundred() -> Self {
        let ten = Self::two() * Self::two() + Self::two() * Self::two() + Self::two();
        ten * ten
    }

    /// Returns the pseudo-zero (1e-7) substituted for zero denominators.
    ///
    /// Falls back to the type's epsilon if 1e-7 were ever unrepresentable.
    #[inline]
    #[must_use]
    fn pseudo_zero() -> Self {
        <Self as NumCast>::from(crate::utils::PSEUDO_ZERO).unwrap_or_else(Self::epsilon)
    }
}

impl<T: Float + NumCast + Copy + Default + Send + Sync + 'static> SeriesElement for T {}

/// Validates that a period is at least 1.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is zero.
#[inline]
pub const fn validate_period(period: usize) -> Result<()> {
    if period == 0 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 1",
        })
    } else {
        Ok(())
    }
}

/// Validates that a period is at least 2.
///
/// Used by the sample-standard-deviation indicators and Williams %R.
///
/// # Errors
///
/// Returns `Error::InvalidPeriod` if the period is below 2.
#[inline]
pub const fn validate_period_at_least_two(period: usize) -> Result<()> {
    if period < 2 {
        Err(Error::InvalidPeriod {
            period,
            reason: "period must be at least 2",
        })
    } else {
        Ok(())
    }
}

/// Validates that every named series has the same length as the first.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` naming the first series that disagrees.
pub fn validate_same_length<T>(series: &[(&str, &[T])]) -> Result<()> {
    let lengths: Vec<(&str, usize)> = series.iter().map(|&(name, s)| (name, s.len())).collect();
    validate_lengths(&lengths)
}

/// Validates that every named length equals the first.
///
/// # Errors
///
/// Returns `Error::LengthMismatch` naming the first length that disagrees.
pub fn validate_lengths(lengths: &[(&str, usize)]) -> Result<()> {
    let Some(&(first_name, first_len)) = lengths.first() else {
        return Ok(());
    };
    for &(name, len) in &lengths[1..] {
        if len != first_len {
            return Err(Error::LengthMismatch {
                description: format!("{first_name} has {first_len} elements, {name} has {len}"),
            });
        }
    }
    Ok(())
}
