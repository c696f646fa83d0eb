//! Utilities for sparse-to-dense conversion
use ndarray::{Array2, ArrayViewMut2};
use num_traits::Zero;

use crate::sparse::DokMat;

/// Assign a sparse matrix into a dense matrix
///
/// The dense matrix will not be zeroed prior to assignment,
/// so existing values not corresponding to non-zeroes will be preserved.
pub fn assign_to_dense<N>(mut array: ArrayViewMut2<N>, spmat: &DokMat<N>)
where
    N: Clone,
{
    if spmat.cols() != array.shape()[1] {
        panic!("Dimension mismatch");
    }
    if spmat.rows() != array.shape()[0] {
        panic!("Dimension mismatch");
    }
    for (coord, val) in spmat.iter() {
        array[[coord.row, coord.col]] = val.clone();
    }
}

impl<N: Clone + Zero> DokMat<N> {
    /// Dense copy of this matrix.
    pub fn to_dense(&self) -> Array2<N> {
        let mut res = Array2::zeros((self.rows(), self.cols()));
        assign_to_dense(res.view_mut(), self);
        res
    }
}

#[cfg(test)]
mod test {
    use crate::sparse::{DokMat, DokMatInt};
    use crate::test_data::mat1;
    use ndarray::{arr2, Array};

    #[test]
    fn to_dense() {
        let speye: DokMatInt = DokMat::eye(3);
        let mut deye = Array::zeros((3, 3));

        super::assign_to_dense(deye.view_mut(), &speye);

        let res = Array::eye(3);
        assert_eq!(deye, res);
        assert_eq!(speye.to_dense(), res);

        let res = mat1().to_dense();
        let expected = arr2(&[
            [0, 0, 3, 4, 0],
            [0, 0, 0, 2, 5],
            [0, 0, 5, 0, 0],
            [0, 8, 0, 0, 0],
            [0, 0, 0, 7, 0],
        ]);
        assert_eq!(expected, res);
    }

    #[test]
    fn assign_keeps_background() {
        let mut dense = Array::from_elem((2, 2), 9_i64);
        let sp = DokMatInt::from_triplets((2, 2), vec![(1, 0, 1)]).unwrap();
        super::assign_to_dense(dense.view_mut(), &sp);
        assert_eq!(dense, arr2(&[[9, 9], [1, 9]]));
    }

    #[test]
    #[should_panic(expected = "Dimension mismatch")]
    fn assign_dimension_mismatch() {
        let mut dense = Array::zeros((2, 3));
        let sp: DokMatInt = DokMat::new(3, 2);
        super::assign_to_dense(dense.view_mut(), &sp);
    }
}
