use std::{path::Path, path::PathBuf, time::Duration};

use anyhow::Context as _;

use crate::foundation::{
    core::Canvas,
    error::{VetorError, VetorResult},
};

/// Rasterization settings for the plot canvas.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    /// Background color (straight RGBA8).
    pub clear_rgba: [u8; 4],
    /// Blank border around the plot area, in pixels.
    pub margin_px: f64,
    /// Font file used for labels; the system sans-serif face when unset.
    pub font_path: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 700,
            height: 700,
            clear_rgba: [255, 255, 255, 255],
            margin_px: 40.0,
            font_path: None,
        }
    }
}

impl RenderSettings {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn validate(&self) -> VetorResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(VetorError::validation("canvas width/height must be non-zero"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(VetorError::validation("canvas width/height exceed u16"));
        }
        if !self.margin_px.is_finite() || self.margin_px < 0.0 {
            return Err(VetorError::validation("margin_px must be finite and >= 0"));
        }
        let min_side = f64::from(self.width.min(self.height));
        if self.margin_px * 2.0 >= min_side {
            return Err(VetorError::validation(
                "margin_px leaves no room for the plot area",
            ));
        }
        Ok(())
    }
}

/// Timing of the step-by-step animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Number of interpolation steps; frames run from 0 to `frame_count` inclusive.
    pub frame_count: u32,
    /// Delay between frames at speed 1.0.
    pub base_interval_ms: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frame_count: 100,
            base_interval_ms: 20.0,
        }
    }
}

impl AnimationSettings {
    /// Upper bound on `frame_count`.
    pub const MAX_FRAME_COUNT: u32 = 10_000;

    pub fn base_interval(&self) -> Duration {
        Duration::from_nanos((self.base_interval_ms * 1_000_000.0).round() as u64)
    }

    pub fn validate(&self) -> VetorResult<()> {
        if self.frame_count == 0 || self.frame_count > Self::MAX_FRAME_COUNT {
            return Err(VetorError::validation(format!(
                "frame_count must be in 1..={}",
                Self::MAX_FRAME_COUNT
            )));
        }
        if !self.base_interval_ms.is_finite() || self.base_interval_ms <= 0.0 {
            return Err(VetorError::validation(
                "base_interval_ms must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
    pub animation: AnimationSettings,
}

impl Settings {
    pub fn from_json_path(path: &Path) -> VetorResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> VetorResult<Self> {
        serde_json::from_str(text).map_err(|e| VetorError::serde(format!("settings JSON: {e}")))
    }

    /// Apply `VETORLAB_FONT` and `VETORLAB_FRAME_COUNT` when present.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(font) = std::env::var_os("VETORLAB_FONT").filter(|v| !v.is_empty()) {
            self.render.font_path = Some(PathBuf::from(font));
        }
        if let Some(n) = std::env::var("VETORLAB_FRAME_COUNT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|&n| n > 0)
        {
            self.animation.frame_count = n;
        }
        self
    }

    pub fn validate(&self) -> VetorResult<()> {
        self.render.validate()?;
        self.animation.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
