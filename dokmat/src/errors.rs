//! Error types for dokmat

use thiserror::Error;

use crate::ops::Operation;
use crate::Shape;

/// Errors raised by sparse matrix construction, mutation and arithmetic.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
pub enum DokError {
    /// The operands of an arithmetic operation have incompatible shapes.
    #[error("{}", mismatch_message(.op, .lhs, .rhs))]
    DimensionMismatch {
        op: Operation,
        lhs: Shape,
        rhs: Shape,
    },
    /// A coordinate lies outside the shape of the matrix it is written to.
    #[error("index ({row}, {col}) is out of range for a {nrows}x{ncols} matrix")]
    OutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// The result at `(row, col)` does not fit in the scalar type.
    #[error("arithmetic overflow at ({row}, {col})")]
    Overflow { row: usize, col: usize },
    #[error(transparent)]
    Format(#[from] FormatError),
}

fn mismatch_message(op: &Operation, lhs: &Shape, rhs: &Shape) -> String {
    let reason = match op {
        Operation::Add => "Matrices dimensions do not match for addition",
        Operation::Subtract => {
            "Matrices dimensions do not match for subtraction"
        }
        Operation::Multiply => {
            "Number of columns in the first matrix must equal the number of \
             rows in the second matrix"
        }
    };
    format!(
        "{} (lhs is {}x{}, rhs is {}x{})",
        reason, lhs.0, lhs.1, rhs.0, rhs.1
    )
}

/// Failure to parse a matrix description.
///
/// The message always starts with `Input file has wrong format`, whatever
/// the cause; the offending line and the cause are appended.
#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
#[error("Input file has wrong format (line {line}: {kind})")]
pub struct FormatError {
    /// 1-based line number of the offending line
    pub line: usize,
    pub kind: FormatErrorKind,
}

impl FormatError {
    pub fn new(line: usize, kind: FormatErrorKind) -> Self {
        Self { line, kind }
    }
}

#[derive(Error, PartialEq, Eq, Debug, Clone, Copy)]
pub enum FormatErrorKind {
    #[error("missing `rows=` declaration")]
    MissingRows,
    #[error("missing `cols=` declaration")]
    MissingCols,
    #[error("expected `rows=<int>`")]
    BadRows,
    #[error("expected `cols=<int>`")]
    BadCols,
    #[error("expected `(<row>, <col>, <value>)`")]
    BadTriplet,
    #[error("token is not an integer")]
    BadInteger,
    #[error("coordinate lies outside the declared shape")]
    OutOfRange,
}

/// An operation name other than `add`, `subtract` or `multiply`.
#[derive(Error, PartialEq, Eq, Debug, Clone)]
#[error("Invalid operation selected: {0:?}")]
pub struct UnknownOperation(pub String);
