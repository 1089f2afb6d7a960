use crate::{
    foundation::{
        core::Dimension,
        error::{VetorError, VetorResult},
    },
    linalg::types::{Matrix, Vector},
};

/// Check that `vector` and `matrix` describe a square 2D or 3D map.
pub fn validate(vector: &Vector, matrix: &Matrix) -> VetorResult<Dimension> {
    let n = vector.len();
    if matrix.row_count() != n {
        return Err(VetorError::shape(format!(
            "vector has {n} components but the matrix has {} rows",
            matrix.row_count()
        )));
    }
    if let Some((i, row)) = matrix.rows().iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(VetorError::shape(format!(
            "matrix row {} has {} entries, expected {n}",
            i + 1,
            row.len()
        )));
    }
    Dimension::from_len(n)
}

/// Check that `matrix` is a square 2x2 or 3x3 matrix.
pub fn validate_square(matrix: &Matrix) -> VetorResult<Dimension> {
    let dim = Dimension::from_len(matrix.row_count())?;
    validate(&Vector::zeros(dim), matrix)
}

/// `result[i] = Σ_j matrix[i][j] * vector[j]`.
pub fn transform(vector: &Vector, matrix: &Matrix) -> VetorResult<Vector> {
    validate(vector, matrix)?;
    Ok(mat_vec(vector, matrix))
}

/// Images of the canonical basis under `matrix` (its columns), in basis order.
pub fn transform_basis(matrix: &Matrix) -> VetorResult<Vec<Vector>> {
    let dim = validate_square(matrix)?;
    Ok(Vector::canonical_basis(dim)
        .iter()
        .map(|e| mat_vec(e, matrix))
        .collect())
}

fn mat_vec(vector: &Vector, matrix: &Matrix) -> Vector {
    Vector::new(
        matrix
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .zip(vector.components())
                    .map(|(a, v)| a * v)
                    .sum()
            })
            .collect(),
    )
}

/// One evaluated transformation request. Recomputed per request, never stored.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TransformationResult {
    pub dimension: Dimension,
    pub original: Vector,
    pub matrix: Matrix,
    pub transformed: Vector,
    /// `[A·e_1, .., A·e_n]`.
    pub transformed_basis: Vec<Vector>,
}

impl TransformationResult {
    #[tracing::instrument(level = "debug", skip_all, fields(dim = vector.len()))]
    pub fn compute(vector: Vector, matrix: Matrix) -> VetorResult<Self> {
        let dimension = validate(&vector, &matrix)?;
        let transformed = mat_vec(&vector, &matrix);
        let transformed_basis = transform_basis(&matrix)?;
        Ok(Self {
            dimension,
            original: vector,
            matrix,
            transformed,
            transformed_basis,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/linalg/ops.rs"]
mod tests;
