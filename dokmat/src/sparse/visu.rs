//! Text renderings of a sparse matrix
use std::fmt;

use num_traits::Num;

use crate::sparse::DokMat;

pub fn print_dense<N>(mat: &DokMat<N>)
where
    N: Num + Copy + fmt::Display,
{
    print!("{}", dense_formatter(mat));
}

pub fn print_sparse<N>(mat: &DokMat<N>)
where
    N: fmt::Display,
{
    print!("{}", sparse_formatter(mat));
}

/// Renders every element, zeros included: one line per row, values
/// separated by tabs.
pub struct DenseFormatter<'a, N> {
    mat: &'a DokMat<N>,
}

impl<'a, N> fmt::Display for DenseFormatter<'a, N>
where
    N: Num + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.mat.rows() {
            for col in 0..self.mat.cols() {
                if col > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{}", self.mat.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Renders the stored entries only, one `(row, col, value)` line each, in
/// row-major order.
pub struct SparseFormatter<'a, N> {
    mat: &'a DokMat<N>,
}

impl<'a, N> fmt::Display for SparseFormatter<'a, N>
where
    N: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (coord, val) in self.mat.iter() {
            writeln!(f, "({}, {}, {})", coord.row, coord.col, val)?;
        }
        Ok(())
    }
}

pub fn dense_formatter<N>(mat: &DokMat<N>) -> DenseFormatter<'_, N> {
    DenseFormatter { mat }
}

pub fn sparse_formatter<N>(mat: &DokMat<N>) -> SparseFormatter<'_, N> {
    SparseFormatter { mat }
}
