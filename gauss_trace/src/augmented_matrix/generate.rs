use rand::Rng;

use super::AugmentedMatrix;
use crate::elimination::error::SolveError;

/// Random strictly diagonally dominant system, which is always
/// nonsingular. Off-diagonal entries and constants lie in [-10, 10].
pub fn random_nonsingular_system<R: Rng>(
    n: usize,
    rng: &mut R,
) -> Result<AugmentedMatrix, SolveError> {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row: Vec<f64> = (0..=n).map(|_| rng.gen_range(-10.0..=10.0)).collect();
        let off_diagonal: f64 = row[..n]
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, v)| v.abs())
            .sum();
        let magnitude = off_diagonal + rng.gen_range(1.0..10.0);
        row[i] = if rng.gen_bool(0.5) { magnitude } else { -magnitude };
        rows.push(row);
    }
    AugmentedMatrix::new(n, rows)
}
