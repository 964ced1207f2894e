pub mod transcript;

use crate::{augmented_matrix::AugmentedMatrix, elimination::back_substitution::Solution};

/// One elementary row operation. Row indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepEvent {
    Swap { row1: usize, row2: usize },
    Normalize { row: usize, pivot_value: f64 },
    EliminateRow {
        source_row: usize,
        target_row: usize,
        factor: f64,
    },
}

/// An event together with the matrix as it stood right after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub event: StepEvent,
    pub snapshot: AugmentedMatrix,
}

/// Receives every step of a solve. Sinks shared between threads must
/// serialize their own writes.
pub trait TraceSink {
    fn record(&mut self, event: StepEvent, snapshot: &AugmentedMatrix);

    /// Called once with the final solution when a solve succeeds.
    fn finish(&mut self, _solution: &Solution) {}
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, event: StepEvent, snapshot: &AugmentedMatrix) {
        (**self).record(event, snapshot)
    }

    fn finish(&mut self, solution: &Solution) {
        (**self).finish(solution)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl TraceSink for NoopSink {
    fn record(&mut self, _event: StepEvent, _snapshot: &AugmentedMatrix) {}
}

/// Keeps every step in memory, for tests and table-style displays.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub steps: Vec<Step>,
    pub solution: Option<Solution>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn events(&self) -> impl Iterator<Item = &StepEvent> + '_ {
        self.steps.iter().map(|step| &step.event)
    }

    pub fn swap_count(&self) -> usize {
        self.events()
            .filter(|e| matches!(e, StepEvent::Swap { .. }))
            .count()
    }

    pub fn normalize_count(&self) -> usize {
        self.events()
            .filter(|e| matches!(e, StepEvent::Normalize { .. }))
            .count()
    }

    pub fn elimination_count(&self) -> usize {
        self.events()
            .filter(|e| matches!(e, StepEvent::EliminateRow { .. }))
            .count()
    }
}

impl TraceSink for RecordingSink {
    fn record(&mut self, event: StepEvent, snapshot: &AugmentedMatrix) {
        self.steps.push(Step {
            event,
            snapshot: snapshot.clone(),
        });
    }

    fn finish(&mut self, solution: &Solution) {
        self.solution = Some(solution.clone());
    }
}

/// Forwards steps to the `log` facade.
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    pub precision: usize,
}

impl TraceSink for LogSink {
    fn record(&mut self, event: StepEvent, snapshot: &AugmentedMatrix) {
        log::debug!(
            "{}\n{}",
            transcript::render_event(&event, self.precision),
            transcript::render_matrix(snapshot, self.precision)
        );
    }

    fn finish(&mut self, solution: &Solution) {
        log::debug!("{}", transcript::render_solution(solution, self.precision));
    }
}
