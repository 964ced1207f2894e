use anyhow::{bail, ensure, Context, Result};

use crate::augmented_matrix::AugmentedMatrix;

/// Parses `n` followed by `n * (n + 1)` numbers, row by row. Tokens are
/// separated by any whitespace; text after `#` on a line is ignored.
pub fn parse_system(text: &str) -> Result<AugmentedMatrix> {
    let mut tokens = text
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(content, _)| content))
        .flat_map(str::split_whitespace);

    let Some(n_token) = tokens.next() else {
        bail!("input is empty, expected the number of unknowns");
    };
    let n: usize = n_token
        .parse()
        .with_context(|| format!("number of unknowns {n_token:?} is not a positive integer"))?;
    ensure!(n > 0, "number of unknowns must be at least 1");

    let mut rows = Vec::with_capacity(n);
    for r in 0..n {
        let mut row = Vec::with_capacity(n + 1);
        for c in 0..=n {
            let Some(token) = tokens.next() else {
                bail!(
                    "expected {} entries for {n} unknowns, input ends at row {}, column {}",
                    n * (n + 1),
                    r + 1,
                    c + 1
                );
            };
            let value: f64 = token
                .parse()
                .with_context(|| format!("entry {token:?} at row {}, column {}", r + 1, c + 1))?;
            row.push(value);
        }
        rows.push(row);
    }
    if let Some(extra) = tokens.next() {
        bail!("unexpected trailing input {extra:?} after {n} rows");
    }
    AugmentedMatrix::new(n, rows).context("building augmented matrix")
}
