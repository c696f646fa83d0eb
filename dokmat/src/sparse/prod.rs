//! Sparse matrix product

use num_traits::Num;
use tracing::trace;

use crate::checked_arith::CheckedArith;
use crate::errors::DokError;
use crate::ops::Operation;
use crate::sparse::{Coord, DokMat};

/// Multiply two sparse matrices.
///
/// For every non-zero `lhs[i, j]`, the non-zeros `rhs[j, k]` of row `j` of
/// `rhs` are accumulated into `res[i, k]`. The rows of `rhs` are contiguous
/// ranges of its ordered storage, so the zeros of `rhs` are never visited.
/// Partial sums which cancel out are removed from the result, as with any
/// write of a zero.
///
/// # Errors
///
/// `DimensionMismatch` if `lhs.cols() != rhs.rows()`, `Overflow` if a
/// product or a partial sum does not fit in `N`.
pub fn mul_mat<N>(lhs: &DokMat<N>, rhs: &DokMat<N>) -> Result<DokMat<N>, DokError>
where
    N: Num + Copy + CheckedArith,
{
    if lhs.cols() != rhs.rows() {
        return Err(DokError::DimensionMismatch {
            op: Operation::Multiply,
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }
    let mut res: DokMat<N> = DokMat::new(lhs.rows(), rhs.cols());
    for (&Coord { row: i, col: j }, &lval) in lhs.iter() {
        for (&Coord { col: k, .. }, &rval) in rhs.row_iter(j) {
            let acc = lval
                .mul_checked(rval)
                .and_then(|prod| res.get(i, k).add_checked(prod))
                .ok_or(DokError::Overflow { row: i, col: k })?;
            res.store(Coord::new(i, k), acc);
        }
    }
    trace!(
        lhs_nnz = lhs.nnz(),
        rhs_nnz = rhs.nnz(),
        res_nnz = res.nnz(),
        "sparse product"
    );
    Ok(res)
}
