//! Approximate equality of matrices with floating point values

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use num_traits::Num;

use crate::sparse::{Coord, DokMat};

impl<N> DokMat<N> {
    /// Locations stored in either matrix, possibly repeated
    fn union_coords<'a>(
        &'a self,
        other: &'a Self,
    ) -> impl Iterator<Item = Coord> + 'a {
        self.entries.keys().chain(other.entries.keys()).copied()
    }
}

impl<N> AbsDiffEq for DokMat<N>
where
    N: Num + Copy + AbsDiffEq,
    N::Epsilon: Copy,
{
    type Epsilon = N::Epsilon;

    fn default_epsilon() -> N::Epsilon {
        N::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: N::Epsilon) -> bool {
        self.shape() == other.shape()
            && self.union_coords(other).all(|c| {
                self.get(c.row, c.col)
                    .abs_diff_eq(&other.get(c.row, c.col), epsilon)
            })
    }
}

impl<N> RelativeEq for DokMat<N>
where
    N: Num + Copy + RelativeEq,
    N::Epsilon: Copy,
{
    fn default_max_relative() -> N::Epsilon {
        N::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: N::Epsilon,
        max_relative: N::Epsilon,
    ) -> bool {
        self.shape() == other.shape()
            && self.union_coords(other).all(|c| {
                self.get(c.row, c.col).relative_eq(
                    &other.get(c.row, c.col),
                    epsilon,
                    max_relative,
                )
            })
    }
}

impl<N> UlpsEq for DokMat<N>
where
    N: Num + Copy + UlpsEq,
    N::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        N::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: N::Epsilon, max_ulps: u32) -> bool {
        self.shape() == other.shape()
            && self.union_coords(other).all(|c| {
                self.get(c.row, c.col)
                    .ulps_eq(&other.get(c.row, c.col), epsilon, max_ulps)
            })
    }
}
