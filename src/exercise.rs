use rand::Rng;

use crate::{
    foundation::{core::Dimension, error::VetorResult},
    linalg::{
        ops::transform,
        types::{Matrix, Vector},
    },
};

/// Closed range for generated vector components.
pub const VECTOR_RANGE: (f64, f64) = (-3.0, 3.0);
/// Closed range for generated matrix entries.
pub const MATRIX_RANGE: (f64, f64) = (-2.0, 2.0);

/// A randomized practice exercise together with its answer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Exercise {
    pub vector: Vector,
    pub matrix: Matrix,
    pub transformed: Vector,
}

/// Draw an exercise from the thread-local generator.
pub fn generate(dim: Dimension) -> VetorResult<Exercise> {
    generate_with(&mut rand::thread_rng(), dim)
}

pub fn generate_with<R: Rng>(rng: &mut R, dim: Dimension) -> VetorResult<Exercise> {
    let n = dim.len();
    let vector = Vector::new((0..n).map(|_| draw(rng, VECTOR_RANGE)).collect());
    let matrix = Matrix::from_rows(
        (0..n)
            .map(|_| (0..n).map(|_| draw(rng, MATRIX_RANGE)).collect())
            .collect(),
    );
    let transformed = transform(&vector, &matrix)?;
    tracing::debug!(%vector, "generated exercise");
    Ok(Exercise {
        vector,
        matrix,
        transformed,
    })
}

fn draw<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    round_to_tenth(rng.gen_range(lo..=hi))
}

/// Round to one decimal place; `-0.0` becomes `0.0`.
pub(crate) fn round_to_tenth(x: f64) -> f64 {
    let r = (x * 10.0).round() / 10.0;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
#[path = "../tests/unit/exercise.rs"]
mod tests;
