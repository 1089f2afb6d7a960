use crate::foundation::core::{Affine, Canvas, Dimension, Point, Rgba8};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Stroke appearance for lines and arrows. Widths are in output pixels.
pub struct LineStyle {
    pub color: Rgba8,
    pub width_px: f64,
    pub dashed: bool,
    pub opacity: f32,
}

impl LineStyle {
    pub fn solid(color: Rgba8, width_px: f64) -> Self {
        Self {
            color,
            width_px,
            dashed: false,
            opacity: 1.0,
        }
    }

    pub fn dashed(color: Rgba8, width_px: f64) -> Self {
        Self {
            dashed: true,
            ..Self::solid(color, width_px)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Draw command in plot coordinates.
///
/// For 3D scenes the points are already projected onto the view plane.
pub enum DrawCmd {
    Line {
        from: Point,
        to: Point,
        style: LineStyle,
    },
    Arrow {
        from: Point,
        to: Point,
        style: LineStyle,
    },
    Polygon {
        points: Vec<Point>,
        color: Rgba8,
        opacity: f32,
    },
    Label {
        at: Point,
        text: String,
        color: Rgba8,
        size_px: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Plot-space rectangle mapped onto the canvas.
pub struct Viewport {
    pub min: Point,
    pub max: Point,
}

impl Viewport {
    pub fn symmetric(half_w: f64, half_h: f64) -> Self {
        Self {
            min: Point::new(-half_w, -half_h),
            max: Point::new(half_w, half_h),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Plot-to-pixel transform: uniform scale, centered, y pointing up.
    pub fn to_canvas(&self, canvas: Canvas, margin_px: f64) -> Affine {
        let avail_w = (f64::from(canvas.width) - 2.0 * margin_px).max(1.0);
        let avail_h = (f64::from(canvas.height) - 2.0 * margin_px).max(1.0);
        let scale = (avail_w / self.width()).min(avail_h / self.height());
        let cx = (self.min.x + self.max.x) / 2.0;
        let cy = (self.min.y + self.max.y) / 2.0;
        Affine::translate((f64::from(canvas.width) / 2.0, f64::from(canvas.height) / 2.0))
            * Affine::scale_non_uniform(scale, -scale)
            * Affine::translate((-cx, -cy))
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgba8,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Backend-agnostic description of one plot image.
pub struct Scene {
    pub dimension: Dimension,
    pub title: String,
    pub viewport: Viewport,
    pub commands: Vec<DrawCmd>,
    pub legend: Vec<LegendEntry>,
}

impl Scene {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn arrows(&self) -> impl Iterator<Item = (Point, Point, &LineStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Arrow { from, to, style } => Some((*from, *to, style)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Point]> {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}
