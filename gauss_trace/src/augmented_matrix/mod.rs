pub mod generate;

use crate::elimination::{
    back_substitution::Solution,
    error::{ShapeMismatch, SolveError},
};

/// Coefficients of a square system with the right-hand side appended as
/// the last column. Always `n` rows of `n + 1` finite entries.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentedMatrix {
    pub number_of_unknowns: usize,
    pub(crate) rows: Vec<Vec<f64>>,
}

impl AugmentedMatrix {
    pub fn new(n: usize, rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        if n == 0 {
            return Err(ShapeMismatch::NoUnknowns.into());
        }
        if rows.len() != n {
            return Err(ShapeMismatch::RowCount {
                expected: n,
                found: rows.len(),
            }
            .into());
        }
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != n + 1 {
                return Err(ShapeMismatch::RowLength {
                    row: row_idx,
                    expected: n + 1,
                    found: row.len(),
                }
                .into());
            }
            if let Some(column) = row.iter().position(|v| !v.is_finite()) {
                return Err(SolveError::NonFiniteEntry {
                    row: row_idx,
                    column,
                });
            }
        }
        Ok(Self {
            number_of_unknowns: n,
            rows,
        })
    }

    /// Same as [`AugmentedMatrix::new`] with `n` taken from the row count.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        Self::new(rows.len(), rows)
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    /// Index of the right-hand-side column.
    pub fn last_col_idx(&self) -> usize {
        self.number_of_unknowns
    }

    pub(crate) fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// `sum(a_ij * x_j) - b_i` for every equation.
    pub fn residuals(&self, solution: &Solution) -> Vec<f64> {
        debug_assert_eq!(solution.len(), self.number_of_unknowns);
        let n = self.number_of_unknowns;
        self.rows
            .iter()
            .map(|row| {
                let lhs = row[..n]
                    .iter()
                    .zip(solution.iter())
                    .fold(0.0, |acc, (&a, &x)| acc + a * x);
                lhs - row[n]
            })
            .collect()
    }

    /// Largest absolute residual; NaN if any residual is NaN.
    pub fn max_residual(&self, solution: &Solution) -> f64 {
        self.residuals(solution).into_iter().fold(0.0_f64, |max, r| {
            if max.is_nan() || r.is_nan() {
                f64::NAN
            } else {
                max.max(r.abs())
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_well_formed_system() {
        let m =
            AugmentedMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.number_of_unknowns, 2);
        assert_eq!(m.last_col_idx(), 2);
        assert_eq!(m.get(1, 2), 6.0);
    }

    #[test]
    fn rejects_wrong_row_count() {
        let err = AugmentedMatrix::new(3, vec![vec![1.0, 2.0, 3.0, 4.0]]).unwrap_err();
        assert_eq!(
            err,
            SolveError::DimensionMismatch(ShapeMismatch::RowCount {
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let err =
            AugmentedMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
        assert_eq!(
            err,
            SolveError::DimensionMismatch(ShapeMismatch::RowLength {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn rejects_empty_system() {
        assert_eq!(
            AugmentedMatrix::from_rows(vec![]).unwrap_err(),
            SolveError::DimensionMismatch(ShapeMismatch::NoUnknowns)
        );
    }

    #[test]
    fn rejects_nan_and_infinity() {
        let err = AugmentedMatrix::from_rows(vec![vec![1.0, f64::NAN]]).unwrap_err();
        assert_eq!(err, SolveError::NonFiniteEntry { row: 0, column: 1 });
        let err = AugmentedMatrix::from_rows(vec![vec![f64::INFINITY, 1.0]]).unwrap_err();
        assert_eq!(err, SolveError::NonFiniteEntry { row: 0, column: 0 });
    }

    #[test]
    fn residuals_vanish_for_exact_solution() {
        let m =
            AugmentedMatrix::from_rows(vec![vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]]).unwrap();
        let x = Solution::new(vec![2.0, 1.0]);
        assert_eq!(m.residuals(&x), vec![0.0, 0.0]);
        let off = Solution::new(vec![2.0, 2.0]);
        assert_eq!(m.residuals(&off), vec![1.0, -1.0]);
        assert_eq!(m.max_residual(&off), 1.0);
    }

    #[test]
    fn nan_solution_has_nan_residual() {
        let m =
            AugmentedMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]]).unwrap();
        assert!(m.max_residual(&Solution::new(vec![f64::NAN, f64::NAN])).is_nan());
        assert!(m.max_residual(&Solution::new(vec![1.0, f64::NAN])).is_nan());
        assert_eq!(m.max_residual(&Solution::new(vec![1.0, 1.0])), 0.0);
    }
}
