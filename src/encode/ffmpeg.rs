use std::{
    ffi::OsString,
    io::Write as _,
    path::Path,
    process::{Child, ChildStdin, Command, Stdio},
};

use crate::{
    animation::timeline::{Speed, fps_for_interval, frame_interval},
    encode::create_parent_dir,
    foundation::{
        error::{VetorError, VetorResult},
        settings::{AnimationSettings, RenderSettings},
    },
    render::backend::FrameRGBA,
};

/// True when an `ffmpeg` binary answers `-version`.
pub fn ffmpeg_available() -> bool {
    Command::new("ffmpeg")
        .args(["-hide_banner", "-version"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}

/// Playback rate of an animation played at `speed`.
pub fn animation_fps(animation: &AnimationSettings, speed: Speed) -> u32 {
    fps_for_interval(frame_interval(animation.base_interval(), speed))
}

/// Streams plot frames into an H.264 MP4 through a system `ffmpeg`.
///
/// Frames are composited onto the plot background before they reach the pipe, so the
/// video is always opaque. An existing file at the output path is replaced.
pub struct Mp4Writer {
    width: u32,
    height: u32,
    background: [u8; 4],
    child: Child,
    stdin: Option<ChildStdin>,
    opaque: Vec<u8>,
    frames: u64,
}

impl Mp4Writer {
    pub fn create(
        out_path: &Path,
        render: &RenderSettings,
        animation: &AnimationSettings,
        speed: Speed,
    ) -> VetorResult<Self> {
        let (width, height) = (render.width, render.height);
        if width == 0 || height == 0 || !width.is_multiple_of(2) || !height.is_multiple_of(2) {
            return Err(VetorError::validation(format!(
                "mp4 output needs an even, non-zero canvas (yuv420p), got {width}x{height}"
            )));
        }
        let fps = animation_fps(animation, speed);

        if !ffmpeg_available() {
            return Err(VetorError::render("ffmpeg was not found on PATH"));
        }
        create_parent_dir(out_path)?;

        tracing::debug!(out = %out_path.display(), width, height, fps, "starting ffmpeg");
        let mut child = Command::new("ffmpeg")
            .args(encoder_args(width, height, fps, out_path))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| VetorError::render(format!("could not start ffmpeg: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| VetorError::render("ffmpeg stdin is not piped"))?;

        Ok(Self {
            width,
            height,
            background: render.clear_rgba,
            child,
            stdin: Some(stdin),
            opaque: vec![0; width as usize * height as usize * 4],
            frames: 0,
        })
    }

    pub fn push(&mut self, frame: &FrameRGBA) -> VetorResult<()> {
        if (frame.width, frame.height) != (self.width, self.height)
            || frame.data.len() != self.opaque.len()
        {
            return Err(VetorError::validation(format!(
                "frame is {}x{} ({} bytes), the video is {}x{}",
                frame.width,
                frame.height,
                frame.data.len(),
                self.width,
                self.height
            )));
        }
        for (dst, src) in self.opaque.chunks_exact_mut(4).zip(frame.data.chunks_exact(4)) {
            dst.copy_from_slice(&over_background(src, frame.premultiplied, self.background));
        }

        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| VetorError::render("mp4 writer is already closed"))?;
        stdin
            .write_all(&self.opaque)
            .map_err(|e| VetorError::render(format!("ffmpeg pipe: {e}")))?;
        self.frames += 1;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Closes the pipe and waits for ffmpeg to write the file.
    pub fn finish(mut self) -> VetorResult<u64> {
        drop(self.stdin.take());
        let output = self
            .child
            .wait_with_output()
            .map_err(|e| VetorError::render(format!("waiting for ffmpeg: {e}")))?;
        if !output.status.success() {
            return Err(VetorError::render(format!(
                "ffmpeg failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        tracing::debug!(frames = self.frames, "mp4 finished");
        Ok(self.frames)
    }
}

fn encoder_args(width: u32, height: u32, fps: u32, out_path: &Path) -> Vec<OsString> {
    let input = [
        "-f".to_string(),
        "rawvideo".to_string(),
        "-pixel_format".to_string(),
        "rgba".to_string(),
        "-video_size".to_string(),
        format!("{width}x{height}"),
        "-framerate".to_string(),
        fps.to_string(),
    ];
    let mut args: Vec<OsString> = ["-y", "-loglevel", "error"].map(OsString::from).to_vec();
    args.extend(input.into_iter().map(OsString::from));
    args.extend(
        ["-i", "-", "-an", "-c:v", "libx264", "-pix_fmt", "yuv420p", "-movflags", "+faststart"]
            .map(OsString::from),
    );
    args.push(out_path.as_os_str().to_owned());
    args
}

/// `src` composited onto an opaque `background`; the result is always fully opaque.
pub(crate) fn over_background(src: &[u8], premultiplied: bool, background: [u8; 4]) -> [u8; 4] {
    let alpha = u32::from(src[3]);
    let mut out = [0, 0, 0, 255];
    for (c, o) in out.iter_mut().take(3).enumerate() {
        let fg = u32::from(src[c]) * if premultiplied { 255 } else { alpha };
        let bg = u32::from(background[c]) * (255 - alpha);
        *o = ((fg + bg + 127) / 255).min(255) as u8;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
