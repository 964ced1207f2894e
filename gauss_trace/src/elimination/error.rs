use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeMismatch {
    #[error("a system needs at least one unknown")]
    NoUnknowns,
    #[error("expected {expected} equations, found {found}")]
    RowCount { expected: usize, found: usize },
    #[error("row {} has {found} entries, expected {expected}", .row + 1)]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Terminal failure of a solve. No partial solution accompanies it.
/// Indices are 0-based; messages print them 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] ShapeMismatch),
    #[error("matrix is singular: no nonzero pivot in column {}", .column + 1)]
    SingularMatrix { column: usize },
    #[error("entry at row {}, column {} is not a finite number", .row + 1, .column + 1)]
    NonFiniteEntry { row: usize, column: usize },
    #[error("zero tolerance must be a finite, non-negative number")]
    InvalidZeroTolerance,
}
