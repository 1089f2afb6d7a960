//! VetorLab shows what a matrix does to a vector.
//!
//! Given a vector `v` and a square matrix `A` (2D or 3D) it computes `Av`, the images of the
//! canonical basis, a step-by-step textual explanation, and a plot of all of it. The plot can be
//! animated from the identity to `A`.
//!
//! # Pipeline overview
//!
//! 1. **Compute**: `Vector + Matrix -> TransformationResult` ([`TransformationResult::compute`])
//! 2. **Describe**: `TransformationResult -> Scene` (backend-agnostic draw commands, [`render`])
//! 3. **Rasterize**: `Scene -> FrameRGBA` (CPU backend, premultiplied RGBA8)
//! 4. **Encode** (optional): PNG files, or MP4 through the system `ffmpeg` binary
//!
//! [`ViewController`] ties the steps to an editable [`FormState`] the way an interactive shell
//! uses them; the `vetorlab` binary is one such shell.
#![forbid(unsafe_code)]

mod animation;
mod encode;
mod exercise;
mod explain;
mod foundation;
mod interact;
mod linalg;
mod render;
mod scene;

pub use animation::lerp::Lerp;
pub use animation::timeline::{
    Animation, AnimationFrame, AnimationHandle, Speed, fps_for_interval, frame_interval,
};
pub use encode::ffmpeg::{Mp4Writer, animation_fps, ffmpeg_available};
pub use encode::pipeline::{
    RenderStats, render_animation_frames, render_animation_to_mp4, render_animation_to_pngs,
};
pub use encode::png::{write_png, write_png_sequence};
pub use exercise::{Exercise, MATRIX_RANGE, VECTOR_RANGE, generate, generate_with};
pub use explain::{explain, status_line};
pub use foundation::core::{Affine, BezPath, Canvas, Dimension, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{VetorError, VetorResult};
pub use foundation::settings::{AnimationSettings, RenderSettings, Settings};
pub use interact::controller::{STATUS_EXERCISE, STATUS_READY, ViewController};
pub use interact::form::FormState;
pub use interact::questionnaire::{
    Choice, QUESTIONS, Question, QuestionnaireSession, THANK_YOU, TITLE as QUESTIONNAIRE_TITLE,
};
pub use linalg::ops::{TransformationResult, transform, transform_basis, validate, validate_square};
pub use linalg::parse::{parse_component, parse_matrix, parse_vector};
pub use linalg::types::{Matrix, Vector};
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
pub use render::cpu::CpuBackend;
pub use render::text::{LabelTypesetter, TextBrushRgba8};
pub use scene::build::{render, render_frame};
pub use scene::model::{DrawCmd, LegendEntry, LineStyle, Scene, Viewport};
pub use scene::projection::{AXIS_EXTENT, Projection};
