use std::time::Duration;

use rand::Rng;

use crate::{
    animation::timeline::{Animation, AnimationFrame, AnimationHandle, frame_interval},
    exercise::{Exercise, generate_with},
    explain::{explain, status_line},
    foundation::{core::Dimension, error::VetorResult, settings::Settings},
    interact::form::FormState,
    linalg::ops::TransformationResult,
    scene::{
        build::{render, render_frame},
        model::Scene,
    },
};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_EXERCISE: &str = "Random exercise generated";

/// Owns everything one plot view shows and reacts to shell actions.
///
/// At most one animation is active. Starting another, switching dimension or loading an
/// exercise drops the current one first. Errors leave the previous state in place.
#[derive(Debug)]
pub struct ViewController {
    settings: Settings,
    form: FormState,
    scene: Scene,
    result: Option<TransformationResult>,
    explanation: String,
    status: String,
    animation: Option<AnimationHandle>,
    next_animation_id: u64,
}

impl ViewController {
    pub fn new(settings: Settings, dimension: Dimension) -> Self {
        Self {
            settings,
            form: FormState::new(dimension),
            scene: render(dimension, None),
            result: None,
            explanation: String::new(),
            status: STATUS_READY.to_string(),
            animation: None,
            next_animation_id: 1,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn result(&self) -> Option<&TransformationResult> {
        self.result.as_ref()
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn animation(&self) -> Option<&AnimationHandle> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Read the form, transform, and refresh plot, explanation and status.
    ///
    /// With step-by-step on, the plot switches to the first animation frame and
    /// [`ViewController::tick`] drives the rest.
    #[tracing::instrument(level = "debug", skip(self), fields(dim = %self.form.dimension()))]
    pub fn apply(&mut self) -> VetorResult<&TransformationResult> {
        let vector = self.form.read_vector()?;
        let matrix = self.form.read_matrix()?;
        let result = TransformationResult::compute(vector, matrix)?;

        let handle = if self.form.step_by_step() {
            Some(self.new_animation(&result)?)
        } else {
            None
        };

        self.show_result(&result);
        self.status = status_line(&result.transformed);
        self.cancel_animation();
        if let Some(mut handle) = handle {
            if let Some(frame) = handle.first_frame() {
                self.scene = render_frame(&frame);
            }
            tracing::debug!(id = handle.id(), interval = ?handle.interval(), "animation started");
            self.animation = Some(handle);
        }
        Ok(self.result.insert(result))
    }

    /// Fill the form with a random exercise and show its solution. Never animates.
    pub fn generate_exercise<R: Rng>(&mut self, rng: &mut R) -> VetorResult<Exercise> {
        let exercise = generate_with(rng, self.form.dimension())?;
        let result =
            TransformationResult::compute(exercise.vector.clone(), exercise.matrix.clone())?;
        self.form.fill_from(&exercise)?;
        self.cancel_animation();
        self.show_result(&result);
        self.result = Some(result);
        self.status = STATUS_EXERCISE.to_string();
        Ok(exercise)
    }

    /// Rebuild the form for `dimension` and show the empty plot.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        self.cancel_animation();
        self.form.set_dimension(dimension);
        self.scene = render(dimension, None);
        self.result = None;
        self.explanation.clear();
        self.status = STATUS_READY.to_string();
    }

    /// Advance the running animation; returns the frame now on screen, if it changed.
    pub fn tick(&mut self, elapsed: Duration) -> Option<AnimationFrame> {
        let handle = self.animation.as_mut()?;
        let frame = handle.advance(elapsed);
        if let Some(f) = &frame {
            self.scene = render_frame(f);
        }
        if handle.is_finished() {
            tracing::debug!(id = handle.id(), "animation finished");
            self.animation = None;
        }
        frame
    }

    /// Stop the running animation, if any. The plot keeps its current frame.
    pub fn cancel_animation(&mut self) {
        if let Some(old) = self.animation.take() {
            tracing::debug!(id = old.id(), "animation cancelled");
        }
    }

    fn new_animation(&mut self, result: &TransformationResult) -> VetorResult<AnimationHandle> {
        let animation = Animation::from_settings(result, &self.settings.animation)?;
        let interval = frame_interval(self.settings.animation.base_interval(), self.form.speed());
        let id = self.next_animation_id;
        self.next_animation_id += 1;
        AnimationHandle::new(id, animation, interval)
    }

    fn show_result(&mut self, result: &TransformationResult) {
        self.scene = render(result.dimension, Some(result));
        self.explanation = explain(&result.original, &result.matrix, &result.transformed);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/controller.rs"]
mod tests;
