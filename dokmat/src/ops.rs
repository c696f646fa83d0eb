//! Dispatch of the arithmetic operations by name

use std::fmt;
use std::str::FromStr;

use num_traits::Num;
use tracing::debug;

use crate::checked_arith::CheckedArith;
use crate::errors::{DokError, UnknownOperation};
use crate::sparse::DokMat;

/// A binary operation between two sparse matrices
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] =
        [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    /// Only the exact lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_owned()))
    }
}

/// Compute `lhs <op> rhs`.
pub fn apply<N>(
    op: Operation,
    lhs: &DokMat<N>,
    rhs: &DokMat<N>,
) -> Result<DokMat<N>, DokError>
where
    N: Num + Copy + CheckedArith,
{
    debug!(%op, lhs = ?lhs.shape(), rhs = ?rhs.shape(), "applying operation");
    match op {
        Operation::Add => lhs.checked_add(rhs),
        Operation::Subtract => lhs.checked_sub(rhs),
        Operation::Multiply => lhs.checked_mul(rhs),
    }
}

#[cfg(test)]
mod test {
    use super::{apply, Operation};
    use crate::errors::{DokError, UnknownOperation};
    use crate::sparse::DokMatInt;
    use crate::test_data::{mat1, mat3, SMALL_DESCRIPTION};

    #[test]
    fn parse_names() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("subtract".parse::<Operation>(), Ok(Operation::Subtract));
        assert_eq!("multiply".parse::<Operation>(), Ok(Operation::Multiply));
        assert_eq!(
            "divide".parse::<Operation>(),
            Err(UnknownOperation("divide".to_owned()))
        );
        assert!("Add".parse::<Operation>().is_err());
        assert!("".parse::<Operation>().is_err());
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn apply_small() {
        let a: DokMatInt = SMALL_DESCRIPTION.parse().unwrap();
        let sum = apply(Operation::Add, &a, &a).unwrap();
        assert_eq!(
            sum.triplets().collect::<Vec<_>>(),
            vec![(0, 0, 2), (0, 1, 4), (1, 0, 6), (1, 1, 8)]
        );
        let diff = apply(Operation::Subtract, &a, &a).unwrap();
        assert!(diff.is_zero());
        let eye: DokMatInt = "rows=2\ncols=2\n(0,0,1)\n(1,1,1)".parse().unwrap();
        assert_eq!(apply(Operation::Multiply, &a, &eye).unwrap(), a);
    }

    #[test]
    fn apply_reports_mismatch() {
        let res = apply(Operation::Add, &mat1(), &mat3());
        assert!(matches!(
            res,
            Err(DokError::DimensionMismatch {
                op: Operation::Add,
                ..
            })
        ));
        let res = apply(Operation::Multiply, &mat3(), &mat3());
        assert!(matches!(
            res,
            Err(DokError::DimensionMismatch {
                op: Operation::Multiply,
                ..
            })
        ));
    }

    #[test]
    fn apply_reports_overflow() {
        let a: DokMatInt =
            "rows=1\ncols=1\n(0, 0, 4294967296)".parse().unwrap();
        assert_eq!(apply(Operation::Add, &a, &a).unwrap().get(0, 0), 1 << 33);
        assert_eq!(
            apply(Operation::Multiply, &a, &a),
            Err(DokError::Overflow { row: 0, col: 0 })
        );
        let b: DokMatInt =
            "rows=1\ncols=1\n(0, 0, 9223372036854775807)".parse().unwrap();
        assert_eq!(
            apply(Operation::Add, &b, &b),
            Err(DokError::Overflow { row: 0, col: 0 })
        );
        assert_eq!(
            apply(Operation::Subtract, &-&b, &b),
            Err(DokError::Overflow { row: 0, col: 0 })
        );
    }
}
