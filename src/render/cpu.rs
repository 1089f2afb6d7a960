use kurbo::{PathEl, Shape as _};

use crate::{
    foundation::{
        core::{Affine, BezPath, Point, Rect, Rgba8, Vec2},
        error::{VetorError, VetorResult},
        settings::RenderSettings,
    },
    render::{
        backend::{FrameRGBA, RenderBackend},
        text::{LabelTypesetter, TextBrushRgba8},
    },
    scene::model::{DrawCmd, LineStyle, Scene},
};

const STROKE_TOLERANCE: f64 = 0.1;
const DASH_PATTERN_PX: [f64; 2] = [6.0, 4.0];
const TITLE_SIZE_PX: f32 = 18.0;
const LEGEND_SIZE_PX: f32 = 13.0;
const LEGEND_SWATCH_PX: f64 = 12.0;
const LEGEND_ROW_PX: f64 = 18.0;
const LEGEND_INSET_PX: f64 = 8.0;

/// Software rasterizer built on `vello_cpu`.
///
/// Geometry is mapped from plot units to pixels before stroking, so line widths
/// and dash lengths stay in pixels regardless of the viewport.
pub struct CpuBackend {
    settings: RenderSettings,
    width: u16,
    height: u16,
    text: Option<LabelTypesetter>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("text", &self.text)
            .finish()
    }
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> VetorResult<Self> {
        settings.validate()?;
        let width: u16 = settings
            .width
            .try_into()
            .map_err(|_| VetorError::render("canvas width exceeds u16"))?;
        let height: u16 = settings
            .height
            .try_into()
            .map_err(|_| VetorError::render("canvas height exceeds u16"))?;

        let text = match &settings.font_path {
            Some(path) => Some(LabelTypesetter::from_path(path)?),
            None => match LabelTypesetter::from_system() {
                Ok(t) => Some(t),
                Err(e) => {
                    tracing::warn!(error = %e, "labels will be skipped");
                    None
                }
            },
        };

        Ok(Self {
            settings,
            width,
            height,
            text,
        })
    }

    pub fn has_text(&self) -> bool {
        self.text.is_some()
    }

    fn draw_cmd(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        to_px: Affine,
        cmd: &DrawCmd,
    ) -> VetorResult<()> {
        match cmd {
            DrawCmd::Line { from, to, style } => {
                let mut path = BezPath::new();
                path.move_to(to_px * *from);
                path.line_to(to_px * *to);
                fill_stroked(ctx, &path, style);
            }
            DrawCmd::Arrow { from, to, style } => {
                draw_arrow(ctx, to_px * *from, to_px * *to, style);
            }
            DrawCmd::Polygon {
                points,
                color,
                opacity,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                let mut path = BezPath::new();
                path.move_to(to_px * *first);
                for p in rest {
                    path.line_to(to_px * *p);
                }
                path.close_path();
                fill_px(ctx, &path, *color, *opacity);
            }
            DrawCmd::Label {
                at,
                text,
                color,
                size_px,
            } => {
                self.draw_text(ctx, to_px * *at, text, *color, *size_px, Anchor::Center)?;
            }
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        at: Point,
        text: &str,
        color: Rgba8,
        size_px: f32,
        anchor: Anchor,
    ) -> VetorResult<()> {
        let Some(typesetter) = self.text.as_mut().filter(|_| !text.is_empty()) else {
            return Ok(());
        };
        let brush = TextBrushRgba8 {
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
        };
        let layout = typesetter.layout(text, size_px, brush)?;
        let (w, h) = (f64::from(layout.width()), f64::from(layout.height()));
        let origin = match anchor {
            Anchor::Center => Point::new(at.x - w / 2.0, at.y - h / 2.0),
            Anchor::TopCenter => Point::new(at.x - w / 2.0, at.y),
            Anchor::MiddleLeft => Point::new(at.x, at.y - h / 2.0),
        };

        let font = typesetter.font().clone();
        ctx.set_transform(affine_to_cpu(Affine::translate(origin.to_vec2())));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }

    fn draw_overlay(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        scene: &Scene,
    ) -> VetorResult<()> {
        let width = f64::from(self.width);
        let title_y = (self.settings.margin_px - f64::from(TITLE_SIZE_PX)).max(0.0) / 2.0;
        self.draw_text(
            ctx,
            Point::new(width / 2.0, title_y),
            &scene.title,
            Rgba8::BLACK,
            TITLE_SIZE_PX,
            Anchor::TopCenter,
        )?;

        let swatch_x = width - self.settings.margin_px - legend_text_width_px(scene);
        for (i, entry) in scene.legend.iter().enumerate() {
            let y = self.settings.margin_px + LEGEND_INSET_PX + (i as f64) * LEGEND_ROW_PX;
            let swatch = Rect::new(
                swatch_x,
                y,
                swatch_x + LEGEND_SWATCH_PX,
                y + LEGEND_SWATCH_PX,
            );
            fill_px(ctx, &swatch.to_path(STROKE_TOLERANCE), entry.color, 1.0);
            self.draw_text(
                ctx,
                Point::new(swatch_x + LEGEND_SWATCH_PX + 4.0, y + LEGEND_SWATCH_PX / 2.0),
                &entry.label,
                Rgba8::BLACK,
                LEGEND_SIZE_PX,
                Anchor::MiddleLeft,
            )?;
        }
        Ok(())
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "trace", skip_all, fields(commands = scene.commands.len()))]
    fn render_scene(&mut self, scene: &Scene) -> VetorResult<FrameRGBA> {
        let to_px = scene
            .viewport
            .to_canvas(self.settings.canvas(), self.settings.margin_px);

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        clear_pixmap(
            &mut pixmap,
            Rgba8::from_array(self.settings.clear_rgba).premultiplied(),
        );

        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        for cmd in &scene.commands {
            self.draw_cmd(&mut ctx, to_px, cmd)?;
        }
        self.draw_overlay(&mut ctx, scene)?;
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

#[derive(Clone, Copy, Debug)]
enum Anchor {
    Center,
    TopCenter,
    MiddleLeft,
}

/// Rough legend column width, independent of the loaded font.
fn legend_text_width_px(scene: &Scene) -> f64 {
    let longest = scene
        .legend
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0);
    LEGEND_SWATCH_PX + 4.0 + (longest as f64) * f64::from(LEGEND_SIZE_PX) * 0.55
}

/// Shaft plus filled head. Zero-length arrows draw nothing.
fn draw_arrow(ctx: &mut vello_cpu::RenderContext, from: Point, to: Point, style: &LineStyle) {
    let dir = to - from;
    let len = dir.hypot();
    if !len.is_finite() || len < 1e-6 {
        return;
    }
    let unit = dir / len;
    let head_len = (style.width_px * 4.0).max(10.0).min(len);
    let head_half = head_len * 0.4;
    let base = to - unit * head_len;

    if len > head_len {
        let mut shaft = BezPath::new();
        shaft.move_to(from);
        shaft.line_to(base);
        fill_stroked(ctx, &shaft, style);
    }

    let normal = Vec2::new(-unit.y, unit.x) * head_half;
    let mut head = BezPath::new();
    head.move_to(to);
    head.line_to(base + normal);
    head.line_to(base - normal);
    head.close_path();
    fill_px(ctx, &head, style.color, style.opacity);
}

fn fill_stroked(ctx: &mut vello_cpu::RenderContext, path: &BezPath, style: &LineStyle) {
    fill_px(ctx, &stroke_outline(path, style), style.color, style.opacity);
}

/// Stroke outline in pixel space, dashed when the style asks for it.
pub(crate) fn stroke_outline(path: &BezPath, style: &LineStyle) -> BezPath {
    let mut stroke = kurbo::Stroke::new(style.width_px).with_caps(kurbo::Cap::Butt);
    if style.dashed {
        stroke = stroke.with_dashes(0.0, DASH_PATTERN_PX);
    }
    kurbo::stroke(
        path.iter(),
        &stroke,
        &kurbo::StrokeOpts::default(),
        STROKE_TOLERANCE,
    )
}

fn fill_px(ctx: &mut vello_cpu::RenderContext, path: &BezPath, color: Rgba8, opacity: f32) {
    if path.elements().is_empty() || opacity <= 0.0 {
        return;
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        color.r, color.g, color.b, color.a,
    ));
    if opacity < 1.0 {
        ctx.push_opacity_layer(opacity);
    }
    ctx.fill_path(&bezpath_to_cpu(path));
    if opacity < 1.0 {
        ctx.pop_layer();
    }
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
