use std::{fmt, ops::Index};

use crate::foundation::{core::Dimension, error::VetorResult};

/// Column vector of 2 or 3 components.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Vector(Vec<f64>);

impl Vector {
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    pub fn zeros(dim: Dimension) -> Self {
        Self(vec![0.0; dim.len()])
    }

    /// The `i`-th canonical basis vector `e_i` (0-based).
    pub fn canonical(dim: Dimension, i: usize) -> Self {
        let mut v = vec![0.0; dim.len()];
        if let Some(c) = v.get_mut(i) {
            *c = 1.0;
        }
        Self(v)
    }

    pub fn canonical_basis(dim: Dimension) -> Vec<Self> {
        (0..dim.len()).map(|i| Self::canonical(dim, i)).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dimension(&self) -> VetorResult<Dimension> {
        Dimension::from_len(self.0.len())
    }

    pub fn components(&self) -> &[f64] {
        &self.0
    }

    /// Components padded with zeros to three entries.
    pub fn xyz(&self) -> [f64; 3] {
        let c = |i: usize| self.0.get(i).copied().unwrap_or(0.0);
        [c(0), c(1), c(2)]
    }

    pub fn scaled(&self, k: f64) -> Self {
        Self(self.0.iter().map(|c| c * k).collect())
    }

    pub fn add(&self, other: &Self) -> Self {
        Self(self.0.iter().zip(&other.0).map(|(a, b)| a + b).collect())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(v: Vec<f64>) -> Self {
        Self(v)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(v: [f64; N]) -> Self {
        Self(v.to_vec())
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c:.2}")?;
        }
        f.write_str("]")
    }
}

/// Row-major square matrix.
///
/// Rows are stored as entered so that malformed input can reach
/// [`validate`](crate::validate) and be rejected there.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Matrix(Vec<Vec<f64>>);

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self(rows)
    }

    pub fn identity(dim: Dimension) -> Self {
        Self(
            (0..dim.len())
                .map(|i| Vector::canonical(dim, i).0)
                .collect(),
        )
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }

    pub fn row_count(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        self.0.get(r).and_then(|row| row.get(c)).copied()
    }

    /// Column `j` as a vector; missing entries read as zero.
    pub fn column(&self, j: usize) -> Vector {
        Vector(
            self.0
                .iter()
                .map(|row| row.get(j).copied().unwrap_or(0.0))
                .collect(),
        )
    }
}

impl<const N: usize> From<[[f64; N]; N]> for Matrix {
    fn from(rows: [[f64; N]; N]) -> Self {
        Self(rows.iter().map(|r| r.to_vec()).collect())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str("[")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{x:.2}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
