use std::path::{Path, PathBuf};

use crate::{
    animation::timeline::{Animation, Speed},
    encode::{
        ffmpeg::Mp4Writer,
        png::{sequence_path, write_png},
    },
    foundation::{
        error::{VetorError, VetorResult},
        settings::Settings,
    },
    render::backend::{FrameRGBA, RenderBackend},
    scene::build::render_frame,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_rendered: u64,
}

/// Renders every remaining frame of `animation` in order.
pub fn render_animation_frames(
    animation: &mut Animation,
    backend: &mut dyn RenderBackend,
) -> VetorResult<Vec<FrameRGBA>> {
    let mut out = Vec::new();
    for frame in animation.by_ref() {
        out.push(backend.render_scene(&render_frame(&frame))?);
    }
    Ok(out)
}

/// Streams the animation into an MP4 through `ffmpeg`, one frame at a time.
///
/// The frame rate follows `settings.animation` played at `speed`.
#[tracing::instrument(
    level = "debug",
    skip(animation, settings, backend),
    fields(out = %out_path.display())
)]
pub fn render_animation_to_mp4(
    animation: &mut Animation,
    out_path: &Path,
    settings: &Settings,
    speed: Speed,
    backend: &mut dyn RenderBackend,
) -> VetorResult<RenderStats> {
    if animation.is_finished() {
        return Err(VetorError::animation("animation has no frames left to encode"));
    }
    let mut writer = Mp4Writer::create(out_path, &settings.render, &settings.animation, speed)?;
    for frame in animation.by_ref() {
        writer.push(&backend.render_scene(&render_frame(&frame))?)?;
    }
    Ok(RenderStats {
        frames_rendered: writer.finish()?,
    })
}

/// Writes the animation as a numbered PNG sequence into `dir`.
#[tracing::instrument(level = "debug", skip(animation, backend), fields(dir = %dir.display()))]
pub fn render_animation_to_pngs(
    animation: &mut Animation,
    dir: &Path,
    backend: &mut dyn RenderBackend,
) -> VetorResult<Vec<PathBuf>> {
    let mut out = Vec::new();
    for (i, frame) in animation.by_ref().enumerate() {
        let rgba = backend.render_scene(&render_frame(&frame))?;
        let path = sequence_path(dir, i);
        write_png(&rgba, &path)?;
        out.push(path);
    }
    if out.is_empty() {
        return Err(VetorError::animation("animation has no frames left to write"));
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/pipeline.rs"]
mod tests;
