#[macro_use]
extern crate bencher;

use bencher::Bencher;
use dokmat::{DokMat, DokMatInt};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_mat(shape: (usize, usize), density: f64, seed: u64) -> DokMatInt {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut mat = DokMat::new(shape.0, shape.1);
    for row in 0..shape.0 {
        for col in 0..shape.1 {
            if rng.random_bool(density) {
                mat.set(row, col, rng.random_range(1..100)).unwrap();
            }
        }
    }
    mat
}

fn dokmat_add(bench: &mut Bencher) {
    let a = random_mat((500, 500), 0.01, 1);
    let b = random_mat((500, 500), 0.01, 2);
    bench.iter(|| a.checked_add(&b).unwrap());
}

fn dokmat_sub_self(bench: &mut Bencher) {
    let a = random_mat((500, 500), 0.01, 3);
    bench.iter(|| a.checked_sub(&a).unwrap());
}

fn dokmat_mul(bench: &mut Bencher) {
    let a = random_mat((300, 400), 0.01, 4);
    let b = random_mat((400, 200), 0.01, 5);
    bench.iter(|| a.checked_mul(&b).unwrap());
}

fn dokmat_parse(bench: &mut Bencher) {
    let a = random_mat((500, 500), 0.02, 6);
    let text = dokmat::io::description_formatter(&a).to_string();
    bench.iter(|| text.parse::<DokMatInt>().unwrap());
}

benchmark_group!(benches, dokmat_add, dokmat_sub_self, dokmat_mul, dokmat_parse);
benchmark_main!(benches);
