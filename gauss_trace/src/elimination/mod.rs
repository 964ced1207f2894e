pub mod back_substitution;
pub mod error;
pub mod gaussian_elimination;
pub mod pivot;
pub mod row_operations;
pub mod solver_params;

pub use back_substitution::Solution;
pub use error::{ShapeMismatch, SolveError};
pub use gaussian_elimination::{solve, solve_rows, GaussianElimination, Phase};
pub use pivot::PivotPolicy;
pub use solver_params::SolverParams;
