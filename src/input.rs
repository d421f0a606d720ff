//! Point ingestion: reading point files and generating random point sets
//!
//! Every point returned from here has finite coordinates.

use std::fmt;
use std::fs::File;
use std::path::Path;

use clap::ValueEnum;
use csv::{ReaderBuilder, StringRecord, Trim};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::closest::{Point, PointList};

/// Layout of a point file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PointFormat {
    /// Two lines: all x values, then all y values, comma separated
    #[default]
    Columns,
    /// One `x,y` pair per line, optional header row
    Rows,
}

#[derive(Debug)]
pub enum InputError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A field could not be parsed as a number (line and column are 1-based)
    InvalidNumber {
        line: u64,
        column: usize,
        value: String,
    },
    MismatchedColumns {
        xs: usize,
        ys: usize,
    },
    /// Columns file without a second (y) line
    MissingRow,
    /// Rows file line with fewer than two fields
    ShortRow {
        line: u64,
    },
    NonFinite {
        line: u64,
    },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {}", e),
            Self::Csv(e) => write!(f, "CSV error: {}", e),
            Self::InvalidNumber {
                line,
                column,
                value,
            } => write!(
                f,
                "Invalid number '{}' at line {}, column {}",
                value, line, column
            ),
            Self::MismatchedColumns { xs, ys } => write!(
                f,
                "Got {} x coordinates but {} y coordinates",
                xs, ys
            ),
            Self::MissingRow => write!(f, "Expected a line of x values followed by a line of y values"),
            Self::ShortRow { line } => write!(f, "Expected at least 2 fields at line {}", line),
            Self::NonFinite { line } => write!(f, "Coordinate is not a finite number at line {}", line),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for InputError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads points from a file in the given format
pub fn read_points(path: &Path, format: PointFormat) -> Result<PointList, InputError> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(file);

    let records = reader
        .records()
        .filter(|r| !matches!(r, Ok(rec) if is_blank(rec)))
        .collect::<Result<Vec<_>, _>>()?;

    match format {
        PointFormat::Columns => parse_columns(&records),
        PointFormat::Rows => parse_rows(&records),
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.is_empty())
}

fn line_of(record: &StringRecord, fallback: usize) -> u64 {
    record
        .position()
        .map_or(fallback as u64 + 1, |pos| pos.line())
}

fn parse_field(record: &StringRecord, idx: usize, line: u64) -> Result<f64, InputError> {
    let value = &record[idx];
    value.parse::<f64>().map_err(|_| InputError::InvalidNumber {
        line,
        column: idx + 1,
        value: value.to_string(),
    })
}

/// Parses the two-line layout: x values on the first line, y values on the second
fn parse_columns(records: &[StringRecord]) -> Result<PointList, InputError> {
    let (xs, ys) = match records {
        [xs, ys, ..] => (xs, ys),
        [] => return Ok(PointList::new()),
        [_] => return Err(InputError::MissingRow),
    };

    if xs.len() != ys.len() {
        return Err(InputError::MismatchedColumns {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    let x_line = line_of(xs, 0);
    let y_line = line_of(ys, 1);

    let mut points = PointList::with_capacity(xs.len());
    for i in 0..xs.len() {
        let x = parse_field(xs, i, x_line)?;
        let y = parse_field(ys, i, y_line)?;
        let point = Point::new(x, y);
        if !point.is_finite() {
            return Err(InputError::NonFinite { line: x_line });
        }
        points.push(point);
    }

    Ok(points)
}

/// Parses one `x,y` pair per line; a first line whose first field is not a
/// number is taken as a header
fn parse_rows(records: &[StringRecord]) -> Result<PointList, InputError> {
    let has_header = records
        .first()
        .is_some_and(|rec| rec.get(0).is_some_and(|f| f.parse::<f64>().is_err()));
    let start_idx = if has_header { 1 } else { 0 };

    let mut points = PointList::with_capacity(records.len());
    for (i, record) in records.iter().enumerate().skip(start_idx) {
        let line = line_of(record, i);
        if record.len() < 2 {
            return Err(InputError::ShortRow { line });
        }

        let point = Point::new(parse_field(record, 0, line)?, parse_field(record, 1, line)?);
        if !point.is_finite() {
            return Err(InputError::NonFinite { line });
        }
        points.push(point);
    }

    Ok(points)
}

/// Generates `count` points uniformly distributed in `[0, max]^2`
///
/// The same seed always yields the same points.
pub fn random_points(count: usize, max: f64, seed: u64) -> PointList {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..=max), rng.gen_range(0.0..=max)))
        .collect()
}
