//! Construction, element access and mutation of `DokMat`

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{Num, NumCast};

use crate::checked_arith::CheckedArith;
use crate::errors::{DokError, FormatError};
use crate::sparse::{binop, prod, Coord, DokMat};
use crate::Shape;

impl<N> DokMat<N> {
    /// Create an empty matrix of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            nrows: rows,
            ncols: cols,
            entries: BTreeMap::new(),
        }
    }

    /// The number of rows of this matrix
    pub fn rows(&self) -> usize {
        self.nrows
    }

    /// The number of cols of this matrix
    pub fn cols(&self) -> usize {
        self.ncols
    }

    /// The shape of the matrix, as `(rows, cols)`
    pub fn shape(&self) -> Shape {
        (self.nrows, self.ncols)
    }

    /// The number of stored, hence non-zero, entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Ratio of the number of non-zero entries to the number of elements.
    /// An empty shape has a density of zero.
    pub fn density(&self) -> f64 {
        let size = self.nrows as f64 * self.ncols as f64;
        if size == 0. {
            0.
        } else {
            self.nnz() as f64 / size
        }
    }

    /// Whether every element of the matrix is zero
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a value is stored at `(row, col)`
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&Coord::new(row, col))
    }

    /// Iterate over the stored entries, row by row.
    pub fn iter(&self) -> btree_map::Iter<'_, Coord, N> {
        self.entries.iter()
    }

    /// Iterate over the stored entries of a single row, by increasing
    /// column.
    pub fn row_iter(&self, row: usize) -> btree_map::Range<'_, Coord, N> {
        self.entries
            .range(Coord::new(row, 0)..=Coord::new(row, usize::MAX))
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), DokError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(DokError::OutOfRange {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }
}

impl<N: Copy> DokMat<N> {
    /// Iterate over the stored entries as `(row, col, value)` triplets.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, N)> + '_ {
        self.entries.iter().map(|(c, &v)| (c.row, c.col, v))
    }
}

impl<N: Num + Copy> DokMat<N> {
    /// Identity matrix of size `n x n`.
    pub fn eye(n: usize) -> Self {
        let mut mat = Self::new(n, n);
        for i in 0..n {
            mat.store(Coord::new(i, i), N::one());
        }
        mat
    }

    /// Build a matrix from `(row, col, value)` triplets.
    ///
    /// Triplets are applied in order with the semantics of [`set`]: a
    /// repeated coordinate keeps its last value, and zeros are not stored.
    ///
    /// [`set`]: struct.DokMat.html#method.set
    pub fn from_triplets<T>(shape: Shape, triplets: T) -> Result<Self, DokError>
    where
        T: IntoIterator<Item = (usize, usize, N)>,
    {
        let mut mat = Self::new(shape.0, shape.1);
        for (row, col, val) in triplets {
            mat.set(row, col, val)?;
        }
        Ok(mat)
    }

    /// The logical value at `(row, col)`: the stored value, or zero.
    ///
    /// Coordinates outside of the shape are never stored, so reading them
    /// returns zero.
    pub fn get(&self, row: usize, col: usize) -> N {
        self.entries
            .get(&Coord::new(row, col))
            .copied()
            .unwrap_or_else(N::zero)
    }

    /// Write `val` at `(row, col)`.
    ///
    /// Writing zero removes the stored entry, if any. Fails if the
    /// coordinate is outside of the shape of the matrix.
    pub fn set(&mut self, row: usize, col: usize, val: N) -> Result<(), DokError> {
        self.check_bounds(row, col)?;
        self.store(Coord::new(row, col), val);
        Ok(())
    }

    /// Store without bounds checking, dropping zeros. Callers guarantee
    /// `coord` lies within the shape.
    pub(crate) fn store(&mut self, coord: Coord, val: N) {
        if val.is_zero() {
            self.entries.remove(&coord);
        } else {
            self.entries.insert(coord, val);
        }
    }
}

impl<N: Num + Copy + CheckedArith> DokMat<N> {
    /// Multiply every element by `factor`, failing if a product does not
    /// fit in `N`.
    pub fn scale(&self, factor: N) -> Result<Self, DokError> {
        let mut res = Self::new(self.nrows, self.ncols);
        for (&coord, &val) in self.iter() {
            let prod = val.mul_checked(factor).ok_or(DokError::Overflow {
                row: coord.row,
                col: coord.col,
            })?;
            res.store(coord, prod);
        }
        Ok(res)
    }

    /// Sparse matrix addition, failing when the shapes differ or when a sum
    /// overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self, DokError> {
        binop::add_mat(self, other)
    }

    /// Sparse matrix subtraction, failing when the shapes differ or when a
    /// difference overflows.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, DokError> {
        binop::sub_mat(self, other)
    }

    /// Sparse matrix product, failing when the number of columns of `self`
    /// differs from the number of rows of `other`, or when the result
    /// overflows.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, DokError> {
        prod::mul_mat(self, other)
    }
}

impl<N: Num + Copy + NumCast> DokMat<N> {
    /// Parse a matrix description, see the [`io`](../io/index.html) module
    /// for the format.
    pub fn from_description(text: &str) -> Result<Self, FormatError> {
        crate::io::parse_description(text)
    }
}

impl<N: Num + Copy + NumCast> FromStr for DokMat<N> {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_description(s)
    }
}

impl<'a, N> IntoIterator for &'a DokMat<N> {
    type Item = (&'a Coord, &'a N);
    type IntoIter = btree_map::Iter<'a, Coord, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, N: Num + Copy + CheckedArith> Add<&'b DokMat<N>> for &'a DokMat<N> {
    type Output = DokMat<N>;

    fn add(self, rhs: &'b DokMat<N>) -> DokMat<N> {
        binop::add_mat(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<'a, 'b, N: Num + Copy + CheckedArith> Sub<&'b DokMat<N>> for &'a DokMat<N> {
    type Output = DokMat<N>;

    fn sub(self, rhs: &'b DokMat<N>) -> DokMat<N> {
        binop::sub_mat(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<'a, 'b, N: Num + Copy + CheckedArith> Mul<&'b DokMat<N>> for &'a DokMat<N> {
    type Output = DokMat<N>;

    fn mul(self, rhs: &'b DokMat<N>) -> DokMat<N> {
        prod::mul_mat(self, rhs).unwrap_or_else(|e| panic!("{}", e))
    }
}

/// Panics if a value has no negation in `N`, as scalar negation does.
impl<'a, N: Num + Copy> Neg for &'a DokMat<N> {
    type Output = DokMat<N>;

    fn neg(self) -> DokMat<N> {
        let mut res = DokMat::new(self.nrows, self.ncols);
        for (&coord, &val) in self.iter() {
            res.store(coord, N::zero() - val);
        }
        res
    }
}

impl<N: Num + Copy> Neg for DokMat<N> {
    type Output = DokMat<N>;

    fn neg(self) -> DokMat<N> {
        -&self
    }
}
