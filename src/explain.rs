use std::fmt::Write as _;

use crate::linalg::types::{Matrix, Vector};

/// Step-by-step derivation of `Av`, one line per output row.
///
/// Every number is printed with two decimals. Row `i` reads
/// `= (a_i0×v_0 + .. + a_in×v_n) = t_i` where `t_i` is `transformed[i]`.
pub fn explain(vector: &Vector, matrix: &Matrix, transformed: &Vector) -> String {
    let n = vector.len();
    let mut out = String::new();

    out.push_str("Linear transformation:\n");
    let _ = writeln!(out, "Original vector: v = {vector}");
    out.push_str("Transformation matrix: A =\n");
    let _ = writeln!(out, "{matrix}");

    out.push_str("\nOperation performed: Av =\n");
    for (i, row) in matrix.rows().iter().enumerate().take(n) {
        let terms = row
            .iter()
            .zip(vector.components())
            .map(|(a, v)| format!("{a:.2}×{v:.2}"))
            .collect::<Vec<_>>()
            .join(" + ");
        let value = transformed.components().get(i).copied().unwrap_or(0.0);
        let _ = writeln!(out, "= ({terms}) = {value:.2}");
    }

    let _ = write!(out, "\nResult: Av = {transformed}");
    out
}

/// One-line summary for the status bar.
pub fn status_line(transformed: &Vector) -> String {
    format!("Transformation applied: {transformed}")
}

#[cfg(test)]
#[path = "../tests/unit/explain.rs"]
mod tests;
