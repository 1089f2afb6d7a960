use crate::{
    foundation::core::{Dimension, Point},
    scene::model::Viewport,
};

/// Half-extent of every plot axis.
pub const AXIS_EXTENT: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq)]
/// Maps plot space onto the 2D view plane.
pub enum Projection {
    Planar,
    /// Orthographic view from the given azimuth/elevation, in degrees.
    Oblique { azimuth_deg: f64, elevation_deg: f64 },
}

impl Projection {
    pub fn for_dimension(dim: Dimension) -> Self {
        match dim {
            Dimension::Two => Self::Planar,
            Dimension::Three => Self::Oblique {
                azimuth_deg: -60.0,
                elevation_deg: 30.0,
            },
        }
    }

    pub fn project(self, [x, y, z]: [f64; 3]) -> Point {
        match self {
            Self::Planar => Point::new(x, y),
            Self::Oblique {
                azimuth_deg,
                elevation_deg,
            } => {
                let (sa, ca) = azimuth_deg.to_radians().sin_cos();
                let (se, ce) = elevation_deg.to_radians().sin_cos();
                // right = (-sin a, cos a, 0), up = (-cos a sin e, -sin a sin e, cos e)
                Point::new(-x * sa + y * ca, -x * ca * se - y * sa * se + z * ce)
            }
        }
    }

    /// Smallest symmetric viewport containing the projected axis cube.
    pub fn viewport(self) -> Viewport {
        match self {
            Self::Planar => Viewport::symmetric(AXIS_EXTENT, AXIS_EXTENT),
            Self::Oblique { .. } => {
                let e = AXIS_EXTENT;
                let mut half_w: f64 = 0.0;
                let mut half_h: f64 = 0.0;
                for x in [-e, e] {
                    for y in [-e, e] {
                        for z in [-e, e] {
                            let p = self.project([x, y, z]);
                            half_w = half_w.max(p.x.abs());
                            half_h = half_h.max(p.y.abs());
                        }
                    }
                }
                Viewport::symmetric(half_w, half_h)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/projection.rs"]
mod tests;
