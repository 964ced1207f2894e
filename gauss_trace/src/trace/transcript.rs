use itertools::Itertools;

use super::{StepEvent, TraceSink};
use crate::{augmented_matrix::AugmentedMatrix, elimination::back_substitution::Solution};

pub const DEFAULT_PRECISION: usize = 6;

const CELL_WIDTH: usize = 10;

// printf("%g") semantics: `precision` significant digits, trailing zeros
// dropped, scientific notation outside 1e-4 <= |v| < 10^precision.
pub fn format_number(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        // inf and NaN have no exponent
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

pub fn render_matrix(matrix: &AugmentedMatrix, precision: usize) -> String {
    matrix
        .rows()
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|v| format!("{:>width$}", format_number(*v, precision), width = CELL_WIDTH))
                .join(" ");
            // every cell carries a trailing space before the bar
            format!("| {cells}  |")
        })
        .join("\n")
}

pub fn render_event(event: &StepEvent, precision: usize) -> String {
    match *event {
        StepEvent::Swap { row1, row2 } => format!("R{} <---> R{}", row1 + 1, row2 + 1),
        StepEvent::Normalize { row, pivot_value } => format!(
            "R{} / {} -> R{}",
            row + 1,
            format_number(pivot_value, precision),
            row + 1
        ),
        StepEvent::EliminateRow {
            source_row,
            target_row,
            factor,
        } => format!(
            "-({}) * R{} + R{} -> R{}",
            format_number(factor, precision),
            source_row + 1,
            target_row + 1,
            target_row + 1
        ),
    }
}

pub fn render_solution(solution: &Solution, precision: usize) -> String {
    let lines = solution
        .iter()
        .enumerate()
        .map(|(i, x)| format!("x{} = {}", i + 1, format_number(*x, precision)))
        .join("\n");
    format!("Solution:\n{lines}")
}

/// Accumulates the full human-readable transcript of a solve.
#[derive(Debug, Clone)]
pub struct TranscriptSink {
    precision: usize,
    text: String,
}

impl TranscriptSink {
    pub fn new(precision: usize) -> Self {
        Self {
            precision,
            text: String::new(),
        }
    }

    pub fn with_initial_matrix(precision: usize, matrix: &AugmentedMatrix) -> Self {
        let mut sink = Self::new(precision);
        sink.push_block("Initial Matrix:", &render_matrix(matrix, precision));
        sink
    }

    fn push_block(&mut self, heading: &str, body: &str) {
        self.text.push_str(heading);
        self.text.push('\n');
        self.text.push_str(body);
        self.text.push_str("\n\n");
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TraceSink for TranscriptSink {
    fn record(&mut self, event: StepEvent, snapshot: &AugmentedMatrix) {
        let heading = format!("{}:", render_event(&event, self.precision));
        let body = render_matrix(snapshot, self.precision);
        self.push_block(&heading, &body);
    }

    fn finish(&mut self, solution: &Solution) {
        self.text.push_str(&render_solution(solution, self.precision));
        self.text.push('\n');
    }
}
