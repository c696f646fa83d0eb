//! Sparse matrix addition, subtraction
use num_traits::Num;
use tracing::trace;

use crate::checked_arith::CheckedArith;
use crate::errors::DokError;
use crate::ops::Operation;
use crate::sparse::{Coord, DokMat};

/// Sparse matrix addition
///
/// # Errors
///
/// `DimensionMismatch` if the operands do not have the same shape,
/// `Overflow` if a sum does not fit in `N`.
pub fn add_mat<N>(lhs: &DokMat<N>, rhs: &DokMat<N>) -> Result<DokMat<N>, DokError>
where
    N: Num + Copy + CheckedArith,
{
    dokmat_binop(lhs, rhs, Operation::Add, N::add_checked)
}

/// Sparse matrix subtraction
///
/// # Errors
///
/// `DimensionMismatch` if the operands do not have the same shape,
/// `Overflow` if a difference does not fit in `N`.
pub fn sub_mat<N>(lhs: &DokMat<N>, rhs: &DokMat<N>) -> Result<DokMat<N>, DokError>
where
    N: Num + Copy + CheckedArith,
{
    dokmat_binop(lhs, rhs, Operation::Subtract, N::sub_checked)
}

/// Applies a binary operation to matching elements of two sparse matrices
/// of the same shape. When only one operand stores a value at a given
/// location, `0` is inferred for the other one.
///
/// Thus the behaviour is correct iff `binop(N::zero(), N::zero()) == N::zero()`
///
/// `binop` returns `None` when the result is not representable, which
/// aborts the operation with an `Overflow` error.
///
/// The entries of `lhs` are visited first, combined with the logical value
/// of `rhs` at the same location. The entries of `rhs` stored at a location
/// absent from `lhs` are then combined with zero. No location is visited
/// twice, and results equal to zero are not stored.
fn dokmat_binop<N, F>(
    lhs: &DokMat<N>,
    rhs: &DokMat<N>,
    op: Operation,
    binop: F,
) -> Result<DokMat<N>, DokError>
where
    N: Num + Copy,
    F: Fn(N, N) -> Option<N>,
{
    if lhs.shape() != rhs.shape() {
        return Err(DokError::DimensionMismatch {
            op,
            lhs: lhs.shape(),
            rhs: rhs.shape(),
        });
    }
    let overflow = |coord: Coord| DokError::Overflow {
        row: coord.row,
        col: coord.col,
    };
    let mut res = DokMat::new(lhs.rows(), lhs.cols());
    for (&coord, &lval) in lhs.iter() {
        let val = binop(lval, rhs.get(coord.row, coord.col))
            .ok_or_else(|| overflow(coord))?;
        res.store(coord, val);
    }
    for (&coord, &rval) in rhs.iter() {
        if !lhs.contains(coord.row, coord.col) {
            let val =
                binop(N::zero(), rval).ok_or_else(|| overflow(coord))?;
            res.store(coord, val);
        }
    }
    trace!(
        %op,
        lhs_nnz = lhs.nnz(),
        rhs_nnz = rhs.nnz(),
        res_nnz = res.nnz(),
        "elementwise binop"
    );
    Ok(res)
}
