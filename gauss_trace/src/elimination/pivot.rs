use strum_macros::{Display, EnumIter};

use crate::augmented_matrix::AugmentedMatrix;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, clap::ValueEnum,
)]
pub enum PivotPolicy {
    /// Always take the row with the largest magnitude in the column.
    #[default]
    #[strum(serialize = "partial-pivoting")]
    PartialPivoting,
    /// Keep the current row unless its entry is zero, then fall back to
    /// the largest magnitude.
    #[strum(serialize = "only-when-zero")]
    OnlyWhenZero,
}

/// Picks the row in `start_row..n` that should hold the pivot of `col`.
/// Ties go to the lowest index. When every candidate is zero the
/// result is `start_row` and the caller reports the singularity.
pub fn select_pivot_row(
    matrix: &AugmentedMatrix,
    start_row: usize,
    col: usize,
    policy: PivotPolicy,
    zero_tolerance: f64,
) -> usize {
    if policy == PivotPolicy::OnlyWhenZero && matrix.get(start_row, col).abs() > zero_tolerance {
        return start_row;
    }
    let mut max_row = start_row;
    let mut max_value = zero_tolerance;
    for (row_idx, row) in matrix.rows().iter().enumerate().skip(start_row) {
        let candidate = row[col].abs();
        if candidate > max_value {
            max_value = candidate;
            max_row = row_idx;
        }
    }
    max_row
}
