use crate::{
    foundation::error::{VetorError, VetorResult},
    linalg::types::{Matrix, Vector},
};

/// Parse a single numeric field.
///
/// Leading/trailing whitespace is ignored; empty, non-numeric and non-finite input is rejected.
pub fn parse_component(text: &str) -> VetorResult<f64> {
    let t = text.trim();
    if t.is_empty() {
        return Err(VetorError::parse("empty field, expected a number"));
    }
    let v: f64 = t
        .parse()
        .map_err(|_| VetorError::parse(format!("'{t}' is not a number")))?;
    if !v.is_finite() {
        return Err(VetorError::parse(format!("'{t}' is not a finite number")));
    }
    Ok(v)
}

/// Parse `"1, 2, 3"` or `"1 2 3"` into a vector.
pub fn parse_vector(text: &str) -> VetorResult<Vector> {
    let comps = split_components(text)
        .map(parse_component)
        .collect::<VetorResult<Vec<_>>>()?;
    if comps.is_empty() {
        return Err(VetorError::parse("vector has no components"));
    }
    Ok(Vector::new(comps))
}

/// Parse `"2,0; 0,3"` into a matrix, one row per `;`.
pub fn parse_matrix(text: &str) -> VetorResult<Matrix> {
    let mut rows = Vec::new();
    for (i, row) in matrix_rows(text)?.into_iter().enumerate() {
        let comps = split_components(row)
            .map(|c| parse_component(c).map_err(|e| e.in_field(format!("matrix row {}", i + 1))))
            .collect::<VetorResult<Vec<_>>>()?;
        rows.push(comps);
    }
    Ok(Matrix::from_rows(rows))
}

/// The `;`-separated rows of `text`. One trailing `;` is allowed, empty rows elsewhere are not.
pub(crate) fn matrix_rows(text: &str) -> VetorResult<Vec<&str>> {
    let mut rows: Vec<&str> = text.split(';').collect();
    if rows.len() > 1 && rows.last().is_some_and(|r| r.trim().is_empty()) {
        rows.pop();
    }
    if rows.iter().all(|r| r.trim().is_empty()) {
        return Err(VetorError::parse("matrix has no rows"));
    }
    if let Some(i) = rows.iter().position(|r| r.trim().is_empty()) {
        return Err(VetorError::parse(format!("matrix row {} is empty", i + 1)));
    }
    Ok(rows)
}

fn split_components(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/linalg/parse.rs"]
mod tests;
