use rand::{SeedableRng, rngs::StdRng};

use super::*;
use crate::{foundation::settings::AnimationSettings, linalg::types::Vector};

fn controller(frame_count: u32) -> ViewController {
    let settings = Settings {
        animation: AnimationSettings {
            frame_count,
            ..AnimationSettings::default()
        },
        ..Settings::default()
    };
    ViewController::new(settings, Dimension::Two)
}

fn scaling(c: &mut ViewController) {
    c.form_mut().set_vector_text("1, 0").unwrap();
    c.form_mut().set_matrix_text("2,0; 0,3").unwrap();
}

#[test]
fn starts_with_empty_plot() {
    let c = controller(100);
    assert_eq!(c.status(), STATUS_READY);
    assert!(c.result().is_none());
    assert!(c.explanation().is_empty());
    assert_eq!(c.scene().legend.len(), 1);
}

#[test]
fn apply_updates_plot_explanation_and_status() {
    let mut c = controller(100);
    scaling(&mut c);
    let r = c.apply().unwrap();
    assert_eq!(r.transformed, Vector::from([2.0, 0.0]));
    assert_eq!(c.status(), "Transformation applied: [2.00, 0.00]");
    assert!(c.explanation().contains("Result: Av = [2.00, 0.00]"));
    assert!(c.scene().labels().any(|l| l == "Av"));
    assert!(!c.is_animating());
}

#[test]
fn failed_apply_keeps_previous_state() {
    let mut c = controller(100);
    scaling(&mut c);
    c.apply().unwrap();
    let scene = c.scene().clone();

    c.form_mut().set_vector_entry(0, "one").unwrap();
    let err = c.apply().unwrap_err();
    assert_eq!(err.dialog_title(), "Invalid number");
    assert_eq!(c.scene(), &scene);
    assert_eq!(c.status(), "Transformation applied: [2.00, 0.00]");
    assert!(c.result().is_some());

    // Still usable after the error.
    c.form_mut().set_vector_entry(0, "1").unwrap();
    assert!(c.apply().is_ok());
}

#[test]
fn step_by_step_starts_an_animation_on_the_first_frame() {
    let mut c = controller(4);
    scaling(&mut c);
    c.form_mut().set_step_by_step(true);
    c.apply().unwrap();

    let handle = c.animation().unwrap();
    assert_eq!(handle.id(), 1);
    assert_eq!(handle.interval(), Duration::from_millis(20));
    assert!(c.scene().title.ends_with("Animation"));
    // The result itself is the final state regardless of the animation.
    assert_eq!(c.result().unwrap().transformed, Vector::from([2.0, 0.0]));
}

#[test]
fn reapplying_replaces_the_running_animation() {
    let mut c = controller(100);
    scaling(&mut c);
    c.form_mut().set_step_by_step(true);
    c.apply().unwrap();
    c.tick(Duration::from_millis(100));
    c.apply().unwrap();
    assert_eq!(c.animation().unwrap().id(), 2);
    let f = c.tick(Duration::from_millis(20)).unwrap();
    assert_eq!(f.index, 1);
}

#[test]
fn speed_shortens_the_frame_interval() {
    let mut c = controller(10);
    scaling(&mut c);
    c.form_mut().set_step_by_step(true);
    c.form_mut().set_speed(2.0);
    c.apply().unwrap();
    assert_eq!(c.animation().unwrap().interval(), Duration::from_millis(10));
}

#[test]
fn ticking_to_the_end_drops_the_animation() {
    let mut c = controller(4);
    scaling(&mut c);
    c.form_mut().set_step_by_step(true);
    c.apply().unwrap();

    let f = c.tick(Duration::from_millis(20)).unwrap();
    assert_eq!(f.index, 1);
    assert!(c.tick(Duration::from_millis(5)).is_none());

    let last = c.tick(Duration::from_secs(1)).unwrap();
    assert_eq!(last.index, 4);
    assert_eq!(last.transformed, Vector::from([2.0, 0.0]));
    assert!(!c.is_animating());
    assert!(c.tick(Duration::from_secs(1)).is_none());
}

#[test]
fn dimension_change_cancels_animation_and_clears_result() {
    let mut c = controller(100);
    scaling(&mut c);
    c.form_mut().set_step_by_step(true);
    c.apply().unwrap();
    assert!(c.is_animating());

    c.set_dimension(Dimension::Three);
    assert!(!c.is_animating());
    assert!(c.result().is_none());
    assert_eq!(c.form().dimension(), Dimension::Three);
    assert_eq!(c.scene().dimension, Dimension::Three);
    assert!(c.form().step_by_step());
}

#[test]
fn exercise_fills_form_without_animating() {
    let mut c = controller(100);
    c.form_mut().set_step_by_step(true);
    let mut rng = StdRng::seed_from_u64(7);
    let ex = c.generate_exercise(&mut rng).unwrap();

    assert_eq!(c.status(), STATUS_EXERCISE);
    assert!(!c.is_animating());
    assert_eq!(c.form().read_vector().unwrap(), ex.vector);
    assert_eq!(c.form().read_matrix().unwrap(), ex.matrix);
    assert_eq!(c.result().unwrap().transformed, ex.transformed);
}
