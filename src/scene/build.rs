use crate::{
    animation::timeline::AnimationFrame,
    foundation::core::{Dimension, Point, Rgba8},
    linalg::{ops::TransformationResult, types::Vector},
    scene::{
        model::{DrawCmd, LegendEntry, LineStyle, Scene},
        projection::{AXIS_EXTENT, Projection},
    },
};

const VECTOR_WIDTH_PX: f64 = 3.0;
const BASIS_WIDTH_PX: f64 = 2.0;
const CANONICAL_WIDTH_PX: f64 = 1.5;
const LABEL_SIZE_PX: f32 = 16.0;
const SMALL_LABEL_SIZE_PX: f32 = 13.0;
const PARALLELOGRAM_OPACITY: f32 = 0.1;
const GRID_OPACITY: f32 = 0.3;

/// Static plot: axes, grid and canonical basis, plus the transformation when given.
///
/// In 2D the transformed vector is also shown as the parallelogram spanned by the
/// transformed basis scaled by the original components. 3D has no such overlay.
#[tracing::instrument(level = "debug", skip(result), fields(with_result = result.is_some()))]
pub fn render(dim: Dimension, result: Option<&TransformationResult>) -> Scene {
    let proj = Projection::for_dimension(dim);
    let mut b = SceneBuilder::new(dim, proj);
    b.base_layer();

    let mut entries = vec![legend("Original basis", Rgba8::GRAY)];
    if let Some(r) = result {
        if dim == Dimension::Two && r.transformed_basis.len() == 2 {
            b.parallelogram(&r.original, &r.transformed_basis);
        }

        for (i, basis) in r.transformed_basis.iter().enumerate() {
            b.arrow(basis, LineStyle::dashed(Rgba8::GREEN, BASIS_WIDTH_PX));
            b.vector_label(basis, basis_label(dim, i), Rgba8::GREEN, SMALL_LABEL_SIZE_PX);
        }
        b.arrow(&r.original, LineStyle::solid(Rgba8::BLUE, VECTOR_WIDTH_PX));
        b.arrow(&r.transformed, LineStyle::solid(Rgba8::RED, VECTOR_WIDTH_PX));
        b.vector_label(&r.original, "v".to_string(), Rgba8::BLUE, LABEL_SIZE_PX);
        b.vector_label(&r.transformed, "Av".to_string(), Rgba8::RED, LABEL_SIZE_PX);

        entries.push(legend("Original", Rgba8::BLUE));
        entries.push(legend("Transformed", Rgba8::RED));
        entries.push(legend("Transformed basis", Rgba8::GREEN));
    }

    b.finish(format!("Linear Transformation {dim}"), entries)
}

/// One animation frame: the original vector stays put while the basis and the
/// transformed vector sit at their interpolated positions.
pub fn render_frame(frame: &AnimationFrame) -> Scene {
    let dim = frame.dimension;
    let mut b = SceneBuilder::new(dim, Projection::for_dimension(dim));
    b.base_layer();

    for basis in &frame.basis {
        b.arrow(basis, LineStyle::dashed(Rgba8::GREEN, BASIS_WIDTH_PX));
    }
    b.arrow(&frame.original, LineStyle::solid(Rgba8::BLUE, VECTOR_WIDTH_PX));
    b.arrow(&frame.transformed, LineStyle::solid(Rgba8::RED, VECTOR_WIDTH_PX));

    b.finish(
        format!("Linear Transformation {dim} - Animation"),
        vec![
            legend("Original", Rgba8::BLUE),
            legend("Transformed", Rgba8::RED),
            legend("Transformed basis", Rgba8::GREEN),
        ],
    )
}

fn legend(label: &str, color: Rgba8) -> LegendEntry {
    LegendEntry {
        label: label.to_string(),
        color,
    }
}

fn basis_label(dim: Dimension, i: usize) -> String {
    match (dim, i) {
        (Dimension::Two, 0) => "A·i".to_string(),
        (Dimension::Two, 1) => "A·j".to_string(),
        _ => format!("A·e{}", i + 1),
    }
}

struct SceneBuilder {
    dim: Dimension,
    proj: Projection,
    commands: Vec<DrawCmd>,
}

impl SceneBuilder {
    fn new(dim: Dimension, proj: Projection) -> Self {
        Self {
            dim,
            proj,
            commands: Vec::new(),
        }
    }

    fn point(&self, v: &Vector) -> Point {
        self.proj.project(v.xyz())
    }

    fn line(&mut self, a: [f64; 3], b: [f64; 3], style: LineStyle) {
        self.commands.push(DrawCmd::Line {
            from: self.proj.project(a),
            to: self.proj.project(b),
            style,
        });
    }

    fn arrow(&mut self, v: &Vector, style: LineStyle) {
        self.commands.push(DrawCmd::Arrow {
            from: Point::ZERO,
            to: self.point(v),
            style,
        });
    }

    fn label(&mut self, at: Point, text: String, color: Rgba8, size_px: f32) {
        self.commands.push(DrawCmd::Label {
            at,
            text,
            color,
            size_px,
        });
    }

    /// 2D labels sit at the arrow midpoint, 3D labels at the tip.
    fn vector_label(&mut self, v: &Vector, text: String, color: Rgba8, size: f32) {
        let anchor = match self.dim {
            Dimension::Two => v.scaled(0.5),
            Dimension::Three => v.clone(),
        };
        let at = self.point(&anchor);
        self.label(at, text, color, size);
    }

    fn base_layer(&mut self) {
        let e = AXIS_EXTENT;
        let grid = LineStyle::solid(Rgba8::LIGHT_GRAY, 1.0).with_opacity(GRID_OPACITY);
        let axis = LineStyle::solid(Rgba8::BLACK, 1.0);

        // 3D grid lies on the z = 0 plane.
        for k in -5..=5 {
            let k = f64::from(k);
            self.line([k, -e, 0.0], [k, e, 0.0], grid);
            self.line([-e, k, 0.0], [e, k, 0.0], grid);
        }

        self.line([-e, 0.0, 0.0], [e, 0.0, 0.0], axis);
        self.line([0.0, -e, 0.0], [0.0, e, 0.0], axis);
        let label_at = e + 0.2;
        let x_at = self.proj.project([label_at, 0.0, 0.0]);
        let y_at = self.proj.project([0.0, label_at, 0.0]);
        self.label(x_at, "X".to_string(), Rgba8::BLACK, LABEL_SIZE_PX);
        self.label(y_at, "Y".to_string(), Rgba8::BLACK, LABEL_SIZE_PX);
        if self.dim == Dimension::Three {
            self.line([0.0, 0.0, -e], [0.0, 0.0, e], axis);
            let z_at = self.proj.project([0.0, 0.0, label_at]);
            self.label(z_at, "Z".to_string(), Rgba8::BLACK, LABEL_SIZE_PX);
        }

        for e_i in Vector::canonical_basis(self.dim) {
            self.arrow(&e_i, LineStyle::solid(Rgba8::GRAY, CANONICAL_WIDTH_PX));
        }
    }

    /// Vertices `{0, b1·v1, b1·v1 + b2·v2, b2·v2}`.
    fn parallelogram(&mut self, original: &Vector, basis: &[Vector]) {
        let a = basis[0].scaled(original[0]);
        let c = basis[1].scaled(original[1]);
        let points = vec![Point::ZERO, self.point(&a), self.point(&a.add(&c)), self.point(&c)];
        self.commands.push(DrawCmd::Polygon {
            points,
            color: Rgba8::PURPLE,
            opacity: PARALLELOGRAM_OPACITY,
        });
    }

    fn finish(self, title: String, legend: Vec<LegendEntry>) -> Scene {
        Scene {
            dimension: self.dim,
            title,
            viewport: self.proj.viewport(),
            commands: self.commands,
            legend,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/build.rs"]
mod tests;
