//! Reading and writing matrix descriptions
//!
//! A description is a line oriented text format. The first two lines declare
//! the shape, and every following non-blank line declares a non-zero value
//! as a `(row, col, value)` triplet of integers:
//!
//! ```text
//! rows=3
//! cols=4
//! (0, 1, 5)
//! (2, 3, -1)
//! ```
//!
//! Lines are trimmed before being read. The declarations are case sensitive
//! and allow no whitespace around `=`. Inside a triplet, whitespace may only
//! follow a comma. Integers are plain decimal digits, only the value may carry
//! a leading `-`. A triplet with a zero value is legal but stores nothing,
//! and a coordinate declared twice keeps its last value.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use num_traits::{Num, NumCast};
use thiserror::Error;
use tracing::debug;

use crate::errors::{FormatError, FormatErrorKind};
use crate::sparse::visu::sparse_formatter;
use crate::sparse::DokMat;

#[derive(Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl PartialEq for IoError {
    fn eq(&self, rhs: &IoError) -> bool {
        match (self, rhs) {
            (IoError::Format(lhs), IoError::Format(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

/// Parse a matrix description into a sparse matrix.
///
/// Values are read as 64 bit integers, then converted into `N`.
///
/// # Errors
///
/// A `FormatError` pointing at the first offending line if the header is
/// malformed, if a line is not a well formed triplet, if a token is not an
/// integer (or does not fit in `N`), or if a coordinate lies outside the
/// declared shape. No partial matrix is returned.
pub fn parse_description<N>(text: &str) -> Result<DokMat<N>, FormatError>
where
    N: Num + Copy + NumCast,
{
    let mut lines = text.lines().map(str::trim).enumerate();

    let rows = match lines.next() {
        Some((i, line)) => parse_declaration(line, "rows")
            .ok_or(FormatError::new(i + 1, FormatErrorKind::BadRows))?,
        None => return Err(FormatError::new(1, FormatErrorKind::MissingRows)),
    };
    let cols = match lines.next() {
        Some((i, line)) => parse_declaration(line, "cols")
            .ok_or(FormatError::new(i + 1, FormatErrorKind::BadCols))?,
        None => return Err(FormatError::new(2, FormatErrorKind::MissingCols)),
    };

    let mut mat = DokMat::new(rows, cols);
    for (i, line) in lines {
        if line.is_empty() {
            continue;
        }
        let (row, col, val) =
            parse_triplet(line).map_err(|kind| FormatError::new(i + 1, kind))?;
        mat.set(row, col, val)
            .map_err(|_| FormatError::new(i + 1, FormatErrorKind::OutOfRange))?;
    }
    debug!(rows, cols, nnz = mat.nnz(), "parsed matrix description");
    Ok(mat)
}

/// Parse a `<key>=<int>` line
fn parse_declaration(line: &str, key: &str) -> Option<usize> {
    let value = line.strip_prefix(key)?.strip_prefix('=')?;
    if !is_integer(value, false) {
        return None;
    }
    value.parse().ok()
}

/// Whether `token` is a non-empty run of ASCII digits, possibly preceded by
/// a `-` when `signed`
fn is_integer(token: &str, signed: bool) -> bool {
    let digits = match token.strip_prefix('-') {
        Some(digits) if signed => digits,
        _ => token,
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a `(<row>, <col>, <value>)` line
fn parse_triplet<N>(line: &str) -> Result<(usize, usize, N), FormatErrorKind>
where
    N: NumCast,
{
    let inner = line
        .strip_prefix('(')
        .and_then(|l| l.strip_suffix(')'))
        .ok_or(FormatErrorKind::BadTriplet)?;
    let mut tokens = inner.split(',');
    let (row, col, val) =
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(row), Some(col), Some(val), None) => {
                (row, col.trim_start(), val.trim_start())
            }
            _ => return Err(FormatErrorKind::BadTriplet),
        };
    for token in [row, col, val] {
        if token.starts_with(char::is_whitespace)
            || token.ends_with(char::is_whitespace)
        {
            return Err(FormatErrorKind::BadTriplet);
        }
    }
    if !is_integer(row, false) || !is_integer(col, false) || !is_integer(val, true)
    {
        return Err(FormatErrorKind::BadInteger);
    }
    let row = row
        .parse::<usize>()
        .map_err(|_| FormatErrorKind::BadInteger)?;
    let col = col
        .parse::<usize>()
        .map_err(|_| FormatErrorKind::BadInteger)?;
    let val = val
        .parse::<i64>()
        .ok()
        .and_then(<N as NumCast>::from)
        .ok_or(FormatErrorKind::BadInteger)?;
    Ok((row, col, val))
}

/// Read a matrix description file.
pub fn read_description<N, P>(path: P) -> Result<DokMat<N>, IoError>
where
    N: Num + Copy + NumCast,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "reading matrix description");
    let text = fs::read_to_string(path)?;
    Ok(parse_description(&text)?)
}

/// Renders a matrix as a description that `parse_description` reads back.
pub struct DescriptionFormatter<'a, N> {
    mat: &'a DokMat<N>,
}

impl<'a, N: fmt::Display> fmt::Display for DescriptionFormatter<'a, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows={}", self.mat.rows())?;
        writeln!(f, "cols={}", self.mat.cols())?;
        write!(f, "{}", sparse_formatter(self.mat))
    }
}

pub fn description_formatter<N>(mat: &DokMat<N>) -> DescriptionFormatter<'_, N> {
    DescriptionFormatter { mat }
}

/// Write a sparse matrix as a description file.
///
/// # Example
///
/// ```rust,no_run
/// use dokmat::DokMatInt;
/// # use std::io;
/// # fn save_id5() -> Result<(), io::Error> {
/// let save_path = "/tmp/identity5.txt";
/// let eye = DokMatInt::eye(5);
/// dokmat::io::write_description(&save_path, &eye)?;
/// # Ok(())
/// # }
/// ```
pub fn write_description<N, P>(path: P, mat: &DokMat<N>) -> Result<(), io::Error>
where
    N: fmt::Display,
    P: AsRef<Path>,
{
    let f = File::create(path)?;
    let mut writer = BufWriter::new(f);
    write!(writer, "{}", description_formatter(mat))?;
    writer.flush()
}
