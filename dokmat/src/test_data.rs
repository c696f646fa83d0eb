//! Some matrices used in tests

use crate::sparse::{DokMat, DokMatInt};

pub fn mat1() -> DokMatInt {
    DokMat::from_triplets(
        (5, 5),
        vec![
            (0, 2, 3),
            (0, 3, 4),
            (1, 3, 2),
            (1, 4, 5),
            (2, 2, 5),
            (3, 1, 8),
            (4, 3, 7),
        ],
    )
    .unwrap()
}

pub fn mat2() -> DokMatInt {
    DokMat::from_triplets(
        (5, 5),
        vec![
            (0, 0, 6),
            (0, 1, 7),
            (0, 2, 3),
            (0, 4, 3),
            (1, 0, 8),
            (1, 3, 9),
            (3, 2, 2),
            (3, 3, 4),
            (4, 1, 4),
            (4, 2, 4),
        ],
    )
    .unwrap()
}

pub fn mat3() -> DokMatInt {
    DokMat::from_triplets(
        (5, 4),
        vec![
            (0, 2, 3),
            (0, 3, 4),
            (1, 2, 2),
            (1, 3, 5),
            (2, 2, 5),
            (3, 1, 8),
            (4, 3, 7),
        ],
    )
    .unwrap()
}

/// Description of a 2x2 matrix with every element set
pub const SMALL_DESCRIPTION: &str = "rows=2\ncols=2\n(0,0,1)\n(0,1,2)\n(1,0,3)\n(1,1,4)";
