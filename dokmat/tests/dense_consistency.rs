use dokmat::{DokMat, DokMatInt, Operation};
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_mat<R: Rng>(rng: &mut R, shape: (usize, usize), density: f64) -> DokMatInt {
    let mut mat = DokMat::new(shape.0, shape.1);
    for row in 0..shape.0 {
        for col in 0..shape.1 {
            if rng.random_bool(density) {
                mat.set(row, col, rng.random_range(-5..=5)).unwrap();
            }
        }
    }
    mat
}

fn dense_nnz(arr: &Array2<i64>) -> usize {
    arr.iter().filter(|&&v| v != 0).count()
}

#[test]
fn arithmetic_matches_dense() {
    let mut rng = SmallRng::seed_from_u64(374);
    for _ in 0..20 {
        let a = random_mat(&mut rng, (7, 5), 0.3);
        let b = random_mat(&mut rng, (7, 5), 0.3);
        let c = random_mat(&mut rng, (5, 6), 0.3);

        let sum = dokmat::ops::apply(Operation::Add, &a, &b).unwrap();
        let dense_sum = a.to_dense() + b.to_dense();
        assert_eq!(sum.to_dense(), dense_sum);
        assert_eq!(sum.nnz(), dense_nnz(&dense_sum));

        let diff = dokmat::ops::apply(Operation::Subtract, &a, &b).unwrap();
        let dense_diff = a.to_dense() - b.to_dense();
        assert_eq!(diff.to_dense(), dense_diff);
        assert_eq!(diff.nnz(), dense_nnz(&dense_diff));

        let prod = dokmat::ops::apply(Operation::Multiply, &a, &c).unwrap();
        let dense_prod = a.to_dense().dot(&c.to_dense());
        assert_eq!(prod.shape(), (7, 6));
        assert_eq!(prod.to_dense(), dense_prod);
        assert_eq!(prod.nnz(), dense_nnz(&dense_prod));
    }
}

#[test]
fn no_stored_zero_after_arithmetic() {
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..20 {
        let a = random_mat(&mut rng, (6, 6), 0.5);
        let b = random_mat(&mut rng, (6, 6), 0.5);
        for res in [
            a.checked_add(&b).unwrap(),
            a.checked_sub(&b).unwrap(),
            a.checked_mul(&b).unwrap(),
        ] {
            assert!(res.iter().all(|(_, &v)| v != 0));
        }
    }
}
