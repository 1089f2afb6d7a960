use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    encode::create_parent_dir,
    foundation::error::{VetorError, VetorResult},
    render::backend::FrameRGBA,
};

/// Writes `frame` as a straight-alpha RGBA8 PNG, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> VetorResult<()> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(VetorError::validation(
            "frame.data size mismatch with width*height*4",
        ));
    }
    create_parent_dir(path)?;

    let straight;
    let data = if frame.premultiplied {
        straight = unpremultiply_rgba8(&frame.data);
        straight.as_slice()
    } else {
        frame.data.as_slice()
    };

    image::save_buffer_with_format(
        path,
        data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

/// Writes `frame_00000.png`, `frame_00001.png`, ... into `dir` and returns the paths.
pub fn write_png_sequence<'a>(
    frames: impl IntoIterator<Item = &'a FrameRGBA>,
    dir: &Path,
) -> VetorResult<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    let mut out = Vec::new();
    for (i, frame) in frames.into_iter().enumerate() {
        let path = sequence_path(dir, i);
        write_png(frame, &path)?;
        out.push(path);
    }
    Ok(out)
}

pub(crate) fn sequence_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame_{index:05}.png"))
}

pub(crate) fn unpremultiply_rgba8(src: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(src.len());
    for px in src.chunks_exact(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            out.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }
        if a == 255 {
            out.extend_from_slice(px);
            continue;
        }
        let un = |c: u8| -> u8 { ((u32::from(c) * 255 + a / 2) / a).min(255) as u8 };
        out.extend_from_slice(&[un(px[0]), un(px[1]), un(px[2]), px[3]]);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
