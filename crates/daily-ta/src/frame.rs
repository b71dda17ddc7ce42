//! Date-keyed price frame and derived columns.
//!
//! A [`PriceFrame`] is the row sequence the engine augments: one date per
//! row plus named columns of optional cells. Rows are expected in ascending
//! date order with unique dates; the frame keeps them in the order given and
//! never sorts or removes them.
//!
//! Indicator output travels as a [`DerivedColumn`], a sparse date-to-value
//! map. [`PriceFrame::merge`] joins it back by date, so rows the map does not
//! mention get an absent cell rather than zero.
//!
//! # Example
//!
//! ```
//! use daily_ta::frame::{DerivedColumn, PriceFrame};
//!
//! let mut frame = PriceFrame::new(vec![1_u32, 2, 3]);
//! frame.insert_column("Close", vec![Some(10.0), Some(11.0), Some(12.0)]).unwrap();
//!
//! let derived = DerivedColumn::from_positions(frame.dates(), &[None, Some(10.5), Some(11.5)]).unwrap();
//! frame.merge("X_MA2", &derived);
//!
//! assert_eq!(frame.column("X_MA2").unwrap(), &[None, Some(10.5), Some(11.5)]);
//! ```

use std::collections::BTreeMap;

use crate::config::ColumnNames;
use crate::error::{Error, Result};
use crate::session::Ohlcv;
use crate::traits::validate_lengths;

/// Sparse mapping from date to value for one indicator output.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedColumn<D> {
    values: BTreeMap<D, f64>,
}

impl<D: Ord + Clone> DerivedColumn<D> {
    /// Creates an empty column.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Builds a column from a positional series aligned with `dates`.
    ///
    /// Absent positions are left out of the map.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if `series` and `dates` differ in length.
    pub fn from_positions(dates: &[D], series: &[Option<f64>]) -> Result<Self> {
        validate_lengths(&[("dates", dates.len()), ("series", series.len())])?;
        let values = dates
            .iter()
            .zip(series)
            .filter_map(|(date, value)| value.map(|v| (date.clone(), v)))
            .collect();
        Ok(Self { values })
    }

    /// Sets the value for `date`.
    pub fn insert(&mut self, date: D, value: f64) {
        self.values.insert(date, value);
    }

    /// Returns the value for `date`, if any.
    #[must_use]
    pub fn get(&self, date: &D) -> Option<f64> {
        self.values.get(date).copied()
    }

    /// Number of dates with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no date has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (&D, f64)> + '_ {
        self.values.iter().map(|(d, v)| (d, *v))
    }
}

impl<D: Ord + Clone> Default for DerivedColumn<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owned OHLCV series extracted from a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OhlcvColumns {
    /// Open prices
    pub open: Vec<f64>,
    /// High prices
    pub high: Vec<f64>,
    /// Low prices
    pub low: Vec<f64>,
    /// Close prices
    pub close: Vec<f64>,
    /// Volume, `None` when the frame has no complete volume column
    pub volume: Option<Vec<f64>>,
}

impl OhlcvColumns {
    /// Borrows the columns as parallel slices.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the columns differ in length.
    pub fn as_ohlcv(&self) -> Result<Ohlcv<'_, f64>> {
        Ohlcv::new(
            &self.open,
            &self.high,
            &self.low,
            &self.close,
            self.volume.as_deref(),
        )
    }
}

/// An ordered sequence of dated rows with named optional-valued columns.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceFrame<D> {
    dates: Vec<D>,
    columns: Vec<(String, Vec<Option<f64>>)>,
}

impl<D: Ord + Clone> PriceFrame<D> {
    /// Creates a frame with the given row dates and no columns.
    #[must_use]
    pub fn new(dates: Vec<D>) -> Self {
        Self {
            dates,
            columns: Vec::new(),
        }
    }

    /// Row dates in frame order.
    #[must_use]
    pub fn dates(&self) -> &[D] {
        &self.dates
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the frame has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Returns true if a column called `name` exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Returns the cells of column `name`.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.position(name).map(|i| self.columns[i].1.as_slice())
    }

    /// Adds a positional column, replacing any column of the same name in place.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if `values` does not have one cell per row.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> Result<()> {
        let name = name.into();
        validate_lengths(&[("frame", self.dates.len()), (name.as_str(), values.len())])?;
        match self.position(&name) {
            Some(i) => self.columns[i].1 = values,
            None => self.columns.push((name, values)),
        }
        Ok(())
    }

    /// Joins `derived` onto the frame by date under `name`.
    ///
    /// Rows whose date has no value get `None`. An existing column of the
    /// same name is replaced.
    pub fn merge(&mut self, name: impl Into<String>, derived: &DerivedColumn<D>) {
        let name = name.into();
        let values: Vec<Option<f64>> = self.dates.iter().map(|d| derived.get(d)).collect();
        match self.position(&name) {
            Some(i) => self.columns[i].1 = values,
            None => self.columns.push((name, values)),
        }
    }

    /// Extracts the OHLCV inputs named by `names`.
    ///
    /// Volume is optional: a missing volume column, or one with any empty
    /// cell, yields `volume: None`.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingColumn` if an open, high, low or close column is
    /// absent, and `Error::MissingValue` for the first empty cell in one of
    /// those columns.
    pub fn ohlcv(&self, names: &ColumnNames) -> Result<OhlcvColumns> {
        let volume = self
            .column(&names.volume)
            .and_then(|cells| cells.iter().copied().collect::<Option<Vec<f64>>>());
        Ok(OhlcvColumns {
            open: self.required(&names.open)?,
            high: self.required(&names.high)?,
            low: self.required(&names.low)?,
            close: self.required(&names.close)?,
            volume,
        })
    }

    fn required(&self, name: &str) -> Result<Vec<f64>> {
        let cells = self.column(name).ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
        })?;
        cells
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                cell.ok_or_else(|| Error::MissingValue {
                    column: name.to_string(),
                    index,
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|(n, _)| n == name)
    }
}
