use strum_macros::Display;

use super::{
    back_substitution::{back_substitute, Solution},
    error::SolveError,
    pivot::select_pivot_row,
    row_operations::{eliminate_below, normalize, swap},
    solver_params::SolverParams,
};
use crate::{augmented_matrix::AugmentedMatrix, trace::TraceSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    Ready,
    SelectPivot,
    Swap,
    CheckPivot,
    Normalize,
    EliminateBelow,
    BackSubstitution,
    Solved,
    Failed,
}

/// Drives one solve: per column select a pivot, swap it into place,
/// check it, normalize, eliminate below; then back substitute.
pub struct GaussianElimination<S: TraceSink> {
    matrix: AugmentedMatrix,
    params: SolverParams,
    sink: S,
    active_column: usize,
    phase: Phase,
    outcome: Option<Result<Solution, SolveError>>,
}

impl<S: TraceSink> GaussianElimination<S> {
    pub fn new(matrix: AugmentedMatrix, params: SolverParams, sink: S) -> Self {
        Self {
            matrix,
            params,
            sink,
            active_column: 0,
            phase: Phase::Ready,
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn matrix(&self) -> &AugmentedMatrix {
        &self.matrix
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs the whole pipeline. Later calls return the first outcome
    /// without touching the matrix again.
    pub fn run(&mut self) -> Result<Solution, SolveError> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }
        let outcome = self.eliminate_and_substitute();
        match &outcome {
            Ok(solution) => {
                self.enter(Phase::Solved);
                self.sink.finish(solution);
            }
            Err(err) => {
                log::debug!("solve failed: {err}");
                self.enter(Phase::Failed);
            }
        }
        self.outcome = Some(outcome.clone());
        outcome
    }

    fn eliminate_and_substitute(&mut self) -> Result<Solution, SolveError> {
        self.go_to_row_echelon_form()?;
        self.enter(Phase::BackSubstitution);
        back_substitute(&self.matrix, self.params.zero_tolerance())
    }

    fn go_to_row_echelon_form(&mut self) -> Result<(), SolveError> {
        while self.is_not_in_row_echelon_form() {
            self.pivot_active_column()?;
            self.go_to_next_column();
        }
        Ok(())
    }

    fn is_not_in_row_echelon_form(&self) -> bool {
        self.active_column < self.matrix.number_of_unknowns
    }

    fn pivot_active_column(&mut self) -> Result<(), SolveError> {
        let col = self.active_column;
        self.enter(Phase::SelectPivot);
        let pivot_row = select_pivot_row(
            &self.matrix,
            col,
            col,
            self.params.pivot_policy,
            self.params.zero_tolerance(),
        );
        if pivot_row != col {
            log::debug!("column {}: pivot moves from R{} to R{}", col + 1, pivot_row + 1, col + 1);
        }

        self.enter(Phase::Swap);
        swap(&mut self.matrix, col, pivot_row, &mut self.sink);

        self.enter(Phase::CheckPivot);
        let pivot_value = self.matrix.get(col, col);
        if self.params.is_zero(pivot_value) {
            log::debug!("column {}: no nonzero pivot candidate", col + 1);
            return Err(SolveError::SingularMatrix { column: col });
        }

        self.enter(Phase::Normalize);
        normalize(&mut self.matrix, col, pivot_value, &mut self.sink);

        self.enter(Phase::EliminateBelow);
        eliminate_below(&mut self.matrix, col, &mut self.sink);
        Ok(())
    }

    fn go_to_next_column(&mut self) {
        self.active_column += 1;
    }

    fn enter(&mut self, phase: Phase) {
        log::trace!("column {}: {} -> {}", self.active_column + 1, self.phase, phase);
        self.phase = phase;
    }
}

/// Solves `matrix` with the given parameters, reporting each step to
/// `sink`. Pass `&mut sink` to keep the sink afterwards.
pub fn solve<S: TraceSink>(
    matrix: AugmentedMatrix,
    params: &SolverParams,
    sink: S,
) -> Result<Solution, SolveError> {
    GaussianElimination::new(matrix, *params, sink).run()
}

/// Like [`solve`], starting from raw rows that still need their shape
/// checked.
pub fn solve_rows<S: TraceSink>(
    rows: Vec<Vec<f64>>,
    params: &SolverParams,
    sink: S,
) -> Result<Solution, SolveError> {
    let matrix = AugmentedMatrix::from_rows(rows)?;
    solve(matrix, params, sink)
}
