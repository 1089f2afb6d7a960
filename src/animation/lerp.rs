use crate::linalg::types::Vector;

/// Linear interpolation `(1 - t)·a + t·b`.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (1.0 - t) * a + t * b
    }
}

impl Lerp for Vector {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vector::new(
            a.components()
                .iter()
                .zip(b.components())
                .map(|(x, y)| f64::lerp(x, y, t))
                .collect(),
        )
    }
}

impl<T: Lerp> Lerp for Vec<T> {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.iter().zip(b).map(|(x, y)| T::lerp(x, y, t)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
