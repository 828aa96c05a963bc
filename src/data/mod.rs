//! CSV ingest for the sample series.
//!
//! The source table is read once at chart initialization. Rows are kept in
//! file order and then sorted by date (stable) by `SampleSeries`.
//! Rows with unreadable dates are skipped and reported; unreadable values
//! are kept as missing so they render as `N/A`.

use std::fs::File;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use crate::core::{Sample, SampleSeries};
use crate::error::{ChartError, ChartResult};

/// Column names accepted for the value column when none is configured.
pub const VALUE_COLUMN_ALIASES: [&str; 3] = ["population", "value", "close"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    /// chrono pattern for the date column (`day-month-year` by default).
    pub date_format: String,
    pub date_column: String,
    /// Explicit value column; `None` tries [`VALUE_COLUMN_ALIASES`].
    pub value_column: Option<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            date_format: "%d-%m-%Y".to_owned(),
            date_column: "date".to_owned(),
            value_column: None,
        }
    }
}

/// A row that could not be turned into a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    pub line: u64,
    pub message: String,
}

/// Ingest output: the ordered series plus what happened to each row.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSeries {
    pub series: SampleSeries,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub missing_values: usize,
}

pub fn load_csv_path(path: impl AsRef<Path>) -> ChartResult<LoadedSeries> {
    load_csv_path_with(path, &CsvOptions::default())
}

pub fn load_csv_path_with(path: impl AsRef<Path>, options: &CsvOptions) -> ChartResult<LoadedSeries> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| {
        ChartError::Io(io::Error::new(
            err.kind(),
            format!("failed to open `{}`: {err}", path.display()),
        ))
    })?;
    debug!(path = %path.display(), "loading sample csv");
    load_csv_reader_with(file, options)
}

pub fn load_csv_reader<R: io::Read>(reader: R) -> ChartResult<LoadedSeries> {
    load_csv_reader_with(reader, &CsvOptions::default())
}

pub fn load_csv_reader_with<R: io::Read>(
    reader: R,
    options: &CsvOptions,
) -> ChartResult<LoadedSeries> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let date_idx = find_column(&headers, &options.date_column).ok_or_else(|| {
        ChartError::InvalidData(format!("missing `{}` column", options.date_column))
    })?;
    let value_idx = match &options.value_column {
        Some(name) => find_column(&headers, name)
            .ok_or_else(|| ChartError::InvalidData(format!("missing `{name}` column")))?,
        None => VALUE_COLUMN_ALIASES
            .iter()
            .find_map(|name| find_column(&headers, name))
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "missing value column (expected one of {})",
                    VALUE_COLUMN_ALIASES.join(", ")
                ))
            })?,
    };

    let mut samples = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut missing_values = 0usize;

    for record in reader.byte_records() {
        let record = record?;
        rows_read += 1;
        let line = record.position().map_or(rows_read as u64 + 1, |pos| pos.line());

        // Fields are decoded one by one so a single bad byte only affects its row.
        let raw_date = match std::str::from_utf8(record.get(date_idx).unwrap_or_default()) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(line, "skipping row with non-UTF-8 date");
                row_errors.push(RowError {
                    line,
                    message: format!("date is not valid UTF-8: {err}"),
                });
                continue;
            }
        };
        let date = match NaiveDate::parse_from_str(raw_date, &options.date_format) {
            Ok(date) => date,
            Err(err) => {
                warn!(line, raw_date, "skipping row with unreadable date");
                row_errors.push(RowError {
                    line,
                    message: format!("invalid date `{raw_date}`: {err}"),
                });
                continue;
            }
        };

        let value = std::str::from_utf8(record.get(value_idx).unwrap_or_default())
            .ok()
            .and_then(parse_value);
        if value.is_none() {
            debug!(line, %date, "row value is missing or malformed");
            missing_values += 1;
        }
        samples.push(Sample { date, value });
    }

    let series = SampleSeries::new(samples)?;
    info!(
        rows_read,
        samples = series.len(),
        skipped = row_errors.len(),
        missing_values,
        "loaded sample csv"
    );

    Ok(LoadedSeries {
        series,
        row_errors,
        rows_read,
        missing_values,
    })
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn parse_value(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}
