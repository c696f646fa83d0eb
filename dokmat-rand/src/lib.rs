//! Random sparse matrix generation

use crate::rand::distr::{Bernoulli, Distribution, Uniform};
use crate::rand::Rng;
use dokmat::{DokMat, DokMatInt};
use num_traits::Num;

/// Re-export [`rand`](https://docs.rs/rand/0.9/rand/)
/// for version compatibility
pub mod rand {
    pub use rand::*;
}

/// Generate a random sparse matrix matching the given density and sampling
/// the values of its non-zero elements from the provided distribution.
///
/// Every element is independently kept with probability `density`. Sampled
/// zeros are not stored, so the resulting density can be lower when `dist`
/// can produce zero.
pub fn rand_dok<R, N, D>(
    rng: &mut R,
    dist: D,
    shape: (usize, usize),
    density: f64,
) -> DokMat<N>
where
    R: Rng + ?Sized,
    D: Distribution<N>,
    N: Num + Copy,
{
    assert!((0. ..=1.).contains(&density));
    let struct_dist =
        Bernoulli::new(density).expect("density lies in [0, 1]");
    let mut mat = DokMat::new(shape.0, shape.1);
    for row in 0..shape.0 {
        for col in 0..shape.1 {
            if struct_dist.sample(rng) {
                mat.set(row, col, dist.sample(rng))
                    .expect("coordinates lie within the shape");
            }
        }
    }
    mat
}

/// Convenient wrapper for the common case of sampling an integer matrix
/// with values uniformly drawn in `-9..=9`, using the thread rng for
/// convenience.
pub fn rand_dok_int(shape: (usize, usize), density: f64) -> DokMatInt {
    let mut rng = rand::rng();
    let dist = Uniform::new_inclusive(-9_i64, 9).expect("non-empty range");
    rand_dok(&mut rng, dist, shape, density)
}
