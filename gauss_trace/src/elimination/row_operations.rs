use crate::{
    augmented_matrix::AugmentedMatrix,
    trace::{StepEvent, TraceSink},
};

/// Exchanges rows `i` and `j`. Nothing happens, and nothing is recorded,
/// when they are the same row.
pub fn swap<S: TraceSink + ?Sized>(
    matrix: &mut AugmentedMatrix,
    i: usize,
    j: usize,
    sink: &mut S,
) {
    if i == j {
        return;
    }
    matrix.swap_rows(i, j);
    sink.record(StepEvent::Swap { row1: i, row2: j }, matrix);
}

/// Divides `row` by `pivot_value` so its pivot becomes 1. The caller
/// guarantees a nonzero pivot.
pub fn normalize<S: TraceSink + ?Sized>(
    matrix: &mut AugmentedMatrix,
    row: usize,
    pivot_value: f64,
    sink: &mut S,
) {
    debug_assert!(pivot_value != 0.0, "normalizing R{} by zero", row + 1);
    for v in matrix.rows[row].iter_mut() {
        *v /= pivot_value;
    }
    sink.record(StepEvent::Normalize { row, pivot_value }, matrix);
}

fn eliminate_row(matrix: &mut AugmentedMatrix, source_row: usize, target_row: usize) -> StepEvent {
    let pivot_col = source_row;
    let factor = matrix.rows[target_row][pivot_col] / matrix.rows[source_row][pivot_col];
    debug_assert!(source_row < target_row);
    let (upper, lower) = matrix.rows.split_at_mut(target_row);
    let source = &upper[source_row];
    for (t, s) in lower[0].iter_mut().zip(source.iter()).skip(pivot_col) {
        *t -= factor * s;
    }
    StepEvent::EliminateRow {
        source_row,
        target_row,
        factor,
    }
}

/// Zeroes the column of `row`'s pivot in every row beneath it, recording
/// one event per row touched.
pub fn eliminate_below<S: TraceSink + ?Sized>(
    matrix: &mut AugmentedMatrix,
    row: usize,
    sink: &mut S,
) {
    debug_assert!(matrix.get(row, row) != 0.0, "eliminating below a zero pivot");
    for target_row in row + 1..matrix.number_of_unknowns {
        let event = eliminate_row(matrix, row, target_row);
        sink.record(event, matrix);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trace::RecordingSink;

    fn matrix(rows: Vec<Vec<f64>>) -> AugmentedMatrix {
        AugmentedMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn swap_exchanges_rows_and_records() {
        let mut m = matrix(vec![vec![0.0, 1.0, 5.0], vec![1.0, 1.0, 7.0]]);
        let mut sink = RecordingSink::new();
        swap(&mut m, 0, 1, &mut sink);
        assert_eq!(m.rows(), &[vec![1.0, 1.0, 7.0], vec![0.0, 1.0, 5.0]]);
        assert_eq!(sink.steps.len(), 1);
        assert_eq!(sink.steps[0].event, StepEvent::Swap { row1: 0, row2: 1 });
        assert_eq!(sink.steps[0].snapshot, m);
    }

    #[test]
    fn swap_with_itself_is_silent() {
        let mut m = matrix(vec![vec![2.0, 1.0]]);
        let before = m.clone();
        let mut sink = RecordingSink::new();
        swap(&mut m, 0, 0, &mut sink);
        assert_eq!(m, before);
        assert!(sink.steps.is_empty());
    }

    #[test]
    fn normalize_makes_pivot_one() {
        let mut m = matrix(vec![vec![4.0, 2.0, 8.0], vec![1.0, 1.0, 1.0]]);
        let mut sink = RecordingSink::new();
        normalize(&mut m, 0, 4.0, &mut sink);
        assert_eq!(m.rows()[0], vec![1.0, 0.5, 2.0]);
        assert_eq!(m.rows()[1], vec![1.0, 1.0, 1.0]);
        assert_eq!(
            sink.steps[0].event,
            StepEvent::Normalize {
                row: 0,
                pivot_value: 4.0
            }
        );
    }

    #[test]
    fn eliminate_below_zeroes_the_column() {
        let mut m = matrix(vec![
            vec![1.0, 2.0, -1.0, 3.0],
            vec![3.0, 1.0, 2.0, 4.0],
            vec![-2.0, 0.0, 1.0, 5.0],
        ]);
        let mut sink = RecordingSink::new();
        eliminate_below(&mut m, 0, &mut sink);
        assert_eq!(m.rows()[0], vec![1.0, 2.0, -1.0, 3.0]);
        assert_eq!(m.rows()[1], vec![0.0, -5.0, 5.0, -5.0]);
        assert_eq!(m.rows()[2], vec![0.0, 4.0, -1.0, 11.0]);
        let events: Vec<_> = sink.events().copied().collect();
        assert_eq!(
            events,
            vec![
                StepEvent::EliminateRow {
                    source_row: 0,
                    target_row: 1,
                    factor: 3.0
                },
                StepEvent::EliminateRow {
                    source_row: 0,
                    target_row: 2,
                    factor: -2.0
                },
            ]
        );
        // each snapshot is taken right after its own row operation
        assert_eq!(sink.steps[0].snapshot.rows()[2], vec![-2.0, 0.0, 1.0, 5.0]);
    }

    #[test]
    fn eliminate_below_last_row_does_nothing() {
        let mut m = matrix(vec![vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 2.0]]);
        let mut sink = RecordingSink::new();
        eliminate_below(&mut m, 1, &mut sink);
        assert!(sink.steps.is_empty());
    }
}
