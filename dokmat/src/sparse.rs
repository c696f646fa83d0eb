use std::collections::BTreeMap;

/// Location of a matrix element.
///
/// Coordinates are ordered row-major, so that iterating over a map keyed by
/// `Coord` visits a matrix row by row, and the non-zeros of a single row form
/// a contiguous range.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Sparse matrix in the dictionary of keys format.
///
/// A `DokMat` stores its shape, `rows x cols`, and an ordered map from
/// [`Coord`] to value holding every non-zero element. The shape is fixed at
/// construction. The content can be changed with [`set`], which removes the
/// stored entry when given a zero, so that no zero is ever stored: a
/// coordinate absent from the map has the logical value `0`.
///
/// Since the storage is canonical, two matrices compare equal exactly when
/// they have the same shape and the same logical value at every coordinate.
///
/// ## Arithmetic
///
/// [`checked_add`], [`checked_sub`] and [`checked_mul`] borrow both operands
/// and return a new matrix, or a [`DokError::DimensionMismatch`] when the
/// shapes are incompatible. The `+`, `-` and `*` operators are implemented for
/// references and panic on incompatible shapes.
///
/// ## Bounds
///
/// Writing outside of the shape fails with [`DokError::OutOfRange`], so that
/// every stored entry is a valid coordinate of the matrix. Reading outside of
/// the shape returns zero.
///
/// [`set`]: struct.DokMat.html#method.set
/// [`checked_add`]: struct.DokMat.html#method.checked_add
/// [`checked_sub`]: struct.DokMat.html#method.checked_sub
/// [`checked_mul`]: struct.DokMat.html#method.checked_mul
/// [`DokError::DimensionMismatch`]: ../errors/enum.DokError.html
/// [`DokError::OutOfRange`]: ../errors/enum.DokError.html
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct DokMat<N> {
    nrows: usize,
    ncols: usize,
    entries: BTreeMap<Coord, N>,
}

/// Integer matrix, the scalar type of the description format.
pub type DokMatInt = DokMat<i64>;

pub mod binop;
pub mod dokmat;
pub mod prod;
#[cfg(feature = "serde")]
mod serde_traits;
#[cfg(feature = "approx")]
mod approx_eq;
pub mod to_dense;
pub mod visu;
