use std::time::Duration;

use crate::{
    animation::lerp::Lerp,
    foundation::{
        core::Dimension,
        error::{VetorError, VetorResult},
        settings::AnimationSettings,
    },
    linalg::{ops::TransformationResult, types::Vector},
};

/// Playback speed multiplier, always within `[MIN, MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct Speed(f64);

impl Speed {
    pub const MIN: f64 = 0.5;
    pub const MAX: f64 = 3.0;

    /// Clamp `value` into the supported range; non-finite input falls back to 1.0.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(Self::MIN, Self::MAX))
        } else {
            Self(1.0)
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(1.0)
    }
}

/// `base / speed`: higher speed, shorter delay.
pub fn frame_interval(base: Duration, speed: Speed) -> Duration {
    Duration::from_nanos((base.as_nanos() as f64 / speed.get()).round() as u64)
}

/// Frames per second equivalent of `interval`, rounded, at least 1.
pub fn fps_for_interval(interval: Duration) -> u32 {
    let secs = interval.as_secs_f64();
    if secs <= 0.0 {
        return 1;
    }
    (1.0 / secs).round().max(1.0) as u32
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// State of every animated element at one progress value.
pub struct AnimationFrame {
    pub index: u32,
    pub progress: f64,
    pub dimension: Dimension,
    /// Drawn static throughout.
    pub original: Vector,
    pub transformed: Vector,
    pub basis: Vec<Vector>,
}

#[derive(Clone, Debug)]
/// Identity-to-transformed interpolation over a fixed number of steps.
///
/// Frame `k` has `progress = k / frame_count`; frames run from 0 to `frame_count` inclusive so
/// the last frame lands exactly on the transformed state.
pub struct Animation {
    dimension: Dimension,
    original: Vector,
    start_basis: Vec<Vector>,
    end_basis: Vec<Vector>,
    end_transformed: Vector,
    frame_count: u32,
    next: u32,
}

impl Animation {
    pub fn new(result: &TransformationResult, frame_count: u32) -> VetorResult<Self> {
        if frame_count == 0 || frame_count > AnimationSettings::MAX_FRAME_COUNT {
            return Err(VetorError::animation(format!(
                "frame_count must be in 1..={}",
                AnimationSettings::MAX_FRAME_COUNT
            )));
        }
        if result.transformed_basis.len() != result.dimension.len()
            || result.original.len() != result.dimension.len()
            || result.transformed.len() != result.dimension.len()
        {
            return Err(VetorError::animation(
                "transformation result does not match its dimension",
            ));
        }
        Ok(Self {
            dimension: result.dimension,
            original: result.original.clone(),
            start_basis: Vector::canonical_basis(result.dimension),
            end_basis: result.transformed_basis.clone(),
            end_transformed: result.transformed.clone(),
            frame_count,
            next: 0,
        })
    }

    pub fn from_settings(
        result: &TransformationResult,
        settings: &AnimationSettings,
    ) -> VetorResult<Self> {
        Self::new(result, settings.frame_count)
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Total frames produced by a full run (`frame_count + 1`).
    pub fn total_frames(&self) -> u64 {
        u64::from(self.frame_count) + 1
    }

    pub fn progress_at(&self, index: u32) -> f64 {
        f64::from(index.min(self.frame_count)) / f64::from(self.frame_count)
    }

    pub fn frame_at(&self, index: u32) -> AnimationFrame {
        let index = index.min(self.frame_count);
        let p = self.progress_at(index);
        AnimationFrame {
            index,
            progress: p,
            dimension: self.dimension,
            original: self.original.clone(),
            transformed: Vector::lerp(&self.original, &self.end_transformed, p),
            basis: Vec::<Vector>::lerp(&self.start_basis, &self.end_basis, p),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.next > self.frame_count
    }

    pub fn restart(&mut self) {
        self.next = 0;
    }
}

impl Iterator for Animation {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<AnimationFrame> {
        if self.is_finished() {
            return None;
        }
        let f = self.frame_at(self.next);
        self.next += 1;
        Some(f)
    }
}

/// The one running animation of a view, paced by a repeating timer.
///
/// Dropping the handle stops the timer.
#[derive(Debug)]
pub struct AnimationHandle {
    id: u64,
    animation: Animation,
    interval: Duration,
    pending: Duration,
}

impl AnimationHandle {
    pub fn new(id: u64, animation: Animation, interval: Duration) -> VetorResult<Self> {
        if interval.is_zero() {
            return Err(VetorError::animation("frame interval must be > 0"));
        }
        Ok(Self {
            id,
            animation,
            interval,
            pending: Duration::ZERO,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_finished(&self) -> bool {
        self.animation.is_finished()
    }

    /// Emit the next frame immediately, independent of the timer.
    pub fn first_frame(&mut self) -> Option<AnimationFrame> {
        self.animation.next()
    }

    /// Advance the timer by `elapsed`; returns the latest frame that became due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<AnimationFrame> {
        self.pending += elapsed;
        let mut latest = None;
        while self.pending >= self.interval {
            self.pending -= self.interval;
            match self.animation.next() {
                Some(f) => latest = Some(f),
                None => {
                    self.pending = Duration::ZERO;
                    break;
                }
            }
        }
        latest
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
