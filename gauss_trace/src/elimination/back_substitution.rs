use std::ops::Index;

use super::error::SolveError;
use crate::augmented_matrix::AugmentedMatrix;

/// Values of the unknowns; index `i` holds `x_{i+1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution(Vec<f64>);

impl Solution {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for Solution {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Solves an upper triangular augmented matrix from the last row up.
/// A diagonal entry within `zero_tolerance` of zero is reported as
/// singular instead of dividing by it.
pub fn back_substitute(
    matrix: &AugmentedMatrix,
    zero_tolerance: f64,
) -> Result<Solution, SolveError> {
    let n = matrix.number_of_unknowns;
    let rhs = matrix.last_col_idx();
    let mut solution = vec![0.0; n];
    let mut i = n;
    while i > 0 {
        i -= 1;
        let row = &matrix.rows()[i];
        let mut value = row[rhs];
        for j in i + 1..n {
            value -= row[j] * solution[j];
        }
        let diag = row[i];
        // exact zero is singular whatever tolerance the caller passed
        if diag == 0.0 || diag.abs() <= zero_tolerance {
            log::debug!("zero diagonal at R{} during back substitution", i + 1);
            return Err(SolveError::SingularMatrix { column: i });
        }
        solution[i] = value / diag;
    }
    Ok(Solution(solution))
}
