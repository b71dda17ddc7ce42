//! CSV input and output for price frames.
//!
//! The date column is kept as text and used as the row key. Every other
//! column must be numeric; an empty cell becomes an absent value. Rows keep
//! the order they have in the file, which must already be ascending by date.
//!
//! On output, absent values are written as empty fields and numbers use the
//! shortest representation that round-trips.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use daily_ta::PriceFrame;

use crate::error::{CliError, Result};

/// Parse a cell, treating an empty one as absent.
fn parse_cell(value: &str) -> std::result::Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("cannot parse '{trimmed}' as number"))
}

/// Reads a price frame from CSV data.
///
/// # Errors
///
/// Returns `CliError::CsvError` if the CSV is malformed, has no
/// `date_column`, or holds a non-numeric value outside the date column.
pub fn read_frame<R: Read>(reader: R, date_column: &str) -> Result<PriceFrame<String>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers: Vec<String> = csv_reader.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let date_idx = headers
        .iter()
        .position(|h| h == date_column)
        .ok_or_else(|| CliError::CsvError {
            message: format!("no '{date_column}' column in header {headers:?}"),
            line: Some(1),
        })?;

    let mut dates = Vec::new();
    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len()];
    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(csv::Position::line);
        for (idx, values) in columns.iter_mut().enumerate() {
            let cell = record.get(idx).unwrap_or("");
            if idx == date_idx {
                dates.push(cell.trim().to_string());
                continue;
            }
            let value = parse_cell(cell).map_err(|message| CliError::CsvError {
                message: format!("column '{}': {message}", headers[idx]),
                line,
            })?;
            values.push(value);
        }
    }

    let mut frame = PriceFrame::new(dates);
    for (idx, (name, values)) in headers.into_iter().zip(columns).enumerate() {
        if idx != date_idx {
            frame.insert_column(name, values)?;
        }
    }
    Ok(frame)
}

/// Reads a price frame from a CSV file.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be opened, otherwise as
/// [`read_frame`].
pub fn read_frame_from_path<P: AsRef<Path>>(path: P, date_column: &str) -> Result<PriceFrame<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::io(e, path.display().to_string()))?;
    read_frame(BufReader::new(file), date_column)
}

/// Writes a price frame as CSV, date column first.
///
/// # Errors
///
/// Returns `CliError::CsvError` if a record cannot be written.
pub fn write_frame<W: Write>(frame: &PriceFrame<String>, date_column: &str, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    let names: Vec<&str> = frame.column_names().collect();
    csv_writer.write_record(std::iter::once(date_column).chain(names.iter().copied()))?;

    let columns: Vec<&[Option<f64>]> = names.iter().filter_map(|name| frame.column(name)).collect();
    let mut record = Vec::with_capacity(columns.len() + 1);
    for (row, date) in frame.dates().iter().enumerate() {
        record.clear();
        record.push(date.clone());
        record.extend(
            columns
                .iter()
                .map(|column| column[row].map(|v| v.to_string()).unwrap_or_default()),
        );
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush().map_err(|e| CliError::io(e, "output"))?;
    Ok(())
}

/// Writes a price frame to a CSV file, creating or truncating it.
///
/// # Errors
///
/// Returns `CliError::IoError` if the file cannot be created, otherwise as
/// [`write_frame`].
pub fn write_frame_to_path<P: AsRef<Path>>(frame: &PriceFrame<String>, date_column: &str, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| CliError::io(e, path.display().to_string()))?;
    write_frame(frame, date_column, BufWriter::new(file))
}
