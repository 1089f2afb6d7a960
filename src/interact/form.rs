use crate::{
    animation::timeline::Speed,
    exercise::Exercise,
    foundation::{
        core::Dimension,
        error::{VetorError, VetorResult},
    },
    linalg::{
        parse::{matrix_rows, parse_component},
        types::{Matrix, Vector},
    },
};

/// Text contents of the input form.
///
/// Entries are kept as the user typed them and only parsed on [`FormState::read_vector`] /
/// [`FormState::read_matrix`].
#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    dimension: Dimension,
    vector: Vec<String>,
    matrix: Vec<Vec<String>>,
    speed: Speed,
    step_by_step: bool,
}

impl FormState {
    /// Zero vector and identity matrix.
    pub fn new(dimension: Dimension) -> Self {
        let n = dimension.len();
        Self {
            dimension,
            vector: vec![format_entry(0.0); n],
            matrix: (0..n)
                .map(|r| {
                    (0..n)
                        .map(|c| format_entry(if r == c { 1.0 } else { 0.0 }))
                        .collect()
                })
                .collect(),
            speed: Speed::default(),
            step_by_step: false,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Rebuilds every entry for `dimension`; speed and step-by-step survive.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        let fresh = Self::new(dimension);
        self.dimension = fresh.dimension;
        self.vector = fresh.vector;
        self.matrix = fresh.matrix;
    }

    pub fn vector_entry(&self, i: usize) -> Option<&str> {
        self.vector.get(i).map(String::as_str)
    }

    pub fn matrix_entry(&self, r: usize, c: usize) -> Option<&str> {
        self.matrix.get(r)?.get(c).map(String::as_str)
    }

    pub fn set_vector_entry(&mut self, i: usize, text: impl Into<String>) -> VetorResult<()> {
        let n = self.vector.len();
        let slot = self.vector.get_mut(i).ok_or_else(|| {
            VetorError::stale_widget(format!(
                "vector entry {} does not exist in a {} form",
                i + 1,
                dimension_label(n)
            ))
        })?;
        *slot = text.into();
        Ok(())
    }

    pub fn set_matrix_entry(
        &mut self,
        r: usize,
        c: usize,
        text: impl Into<String>,
    ) -> VetorResult<()> {
        let n = self.matrix.len();
        let slot = self
            .matrix
            .get_mut(r)
            .and_then(|row| row.get_mut(c))
            .ok_or_else(|| {
                VetorError::stale_widget(format!(
                    "matrix entry ({}, {}) does not exist in a {} form",
                    r + 1,
                    c + 1,
                    dimension_label(n)
                ))
            })?;
        *slot = text.into();
        Ok(())
    }

    /// Fill the vector row from a comma/space separated line.
    pub fn set_vector_text(&mut self, text: &str) -> VetorResult<()> {
        let parts = split_entries(text);
        if parts.len() != self.vector.len() {
            return Err(VetorError::shape(format!(
                "expected {} vector components, got {}",
                self.vector.len(),
                parts.len()
            )));
        }
        self.vector = parts;
        Ok(())
    }

    /// Fill the matrix from `"a,b; c,d"`, one row per `;`.
    pub fn set_matrix_text(&mut self, text: &str) -> VetorResult<()> {
        let n = self.matrix.len();
        let rows: Vec<Vec<String>> = matrix_rows(text)?.into_iter().map(split_entries).collect();
        if rows.len() != n || rows.iter().any(|r| r.len() != n) {
            return Err(VetorError::shape(format!("expected a {n}x{n} matrix")));
        }
        self.matrix = rows;
        Ok(())
    }

    pub fn read_vector(&self) -> VetorResult<Vector> {
        self.vector
            .iter()
            .enumerate()
            .map(|(i, t)| parse_component(t).map_err(|e| e.in_field(format!("v[{}]", i + 1))))
            .collect::<VetorResult<Vec<_>>>()
            .map(Vector::new)
    }

    pub fn read_matrix(&self) -> VetorResult<Matrix> {
        self.matrix
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, t)| {
                        parse_component(t)
                            .map_err(|e| e.in_field(format!("A[{},{}]", r + 1, c + 1)))
                    })
                    .collect::<VetorResult<Vec<_>>>()
            })
            .collect::<VetorResult<Vec<_>>>()
            .map(Matrix::from_rows)
    }

    /// Write a generated exercise into the entries.
    pub fn fill_from(&mut self, exercise: &Exercise) -> VetorResult<()> {
        let dim = exercise.vector.dimension()?;
        if dim != self.dimension {
            self.set_dimension(dim);
        }
        self.vector = exercise
            .vector
            .components()
            .iter()
            .copied()
            .map(format_entry)
            .collect();
        self.matrix = exercise
            .matrix
            .rows()
            .iter()
            .map(|row| row.iter().copied().map(format_entry).collect())
            .collect();
        Ok(())
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn set_speed(&mut self, value: f64) -> Speed {
        self.speed = Speed::new(value);
        self.speed
    }

    pub fn step_by_step(&self) -> bool {
        self.step_by_step
    }

    pub fn set_step_by_step(&mut self, on: bool) {
        self.step_by_step = on;
    }
}

/// `1.0`, `-0.3`, `2.5`: one decimal, like the generated exercises.
fn format_entry(x: f64) -> String {
    format!("{x:.1}")
}

fn split_entries(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn dimension_label(n: usize) -> String {
    format!("{n}D")
}

#[cfg(test)]
#[path = "../../tests/unit/interact/form.rs"]
mod tests;
