use super::*;
use crate::{animation::timeline::Animation, linalg::types::Matrix, scene::model::Viewport};

fn result_2d() -> TransformationResult {
    TransformationResult::compute(
        Vector::from([1.0, 2.0]),
        Matrix::from([[2.0, 0.0], [0.0, 3.0]]),
    )
    .unwrap()
}

fn result_3d() -> TransformationResult {
    TransformationResult::compute(
        Vector::from([1.0, 1.0, 1.0]),
        Matrix::from([[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]]),
    )
    .unwrap()
}

fn line_count(scene: &Scene) -> usize {
    scene
        .commands
        .iter()
        .filter(|c| matches!(c, DrawCmd::Line { .. }))
        .count()
}

#[test]
fn empty_2d_plot_has_grid_axes_and_canonical_basis() {
    let s = render(Dimension::Two, None);
    assert_eq!(s.viewport, Viewport::symmetric(5.0, 5.0));
    assert_eq!(line_count(&s), 22 + 2);
    let arrows: Vec<_> = s.arrows().collect();
    assert_eq!(arrows.len(), 2);
    assert_eq!(arrows[0].1, Point::new(1.0, 0.0));
    assert_eq!(arrows[1].1, Point::new(0.0, 1.0));
    assert_eq!(s.labels().collect::<Vec<_>>(), vec!["X", "Y"]);
    assert_eq!(s.polygons().count(), 0);
    assert_eq!(s.legend.len(), 1);
}

#[test]
fn result_2d_adds_vectors_labels_and_parallelogram() {
    let s = render(Dimension::Two, Some(&result_2d()));
    assert_eq!(s.arrows().count(), 2 + 2 + 2);

    let labels: Vec<_> = s.labels().collect();
    for expected in ["v", "Av", "A·i", "A·j"] {
        assert!(labels.contains(&expected), "missing {expected}");
    }

    let polys: Vec<_> = s.polygons().collect();
    assert_eq!(polys.len(), 1);
    assert_eq!(
        polys[0],
        &[
            Point::ZERO,
            Point::new(2.0, 0.0),
            Point::new(2.0, 6.0),
            Point::new(0.0, 6.0)
        ]
    );

    let v_label = s
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCmd::Label { at, text, .. } if text == "v" => Some(*at),
            _ => None,
        })
        .unwrap();
    assert_eq!(v_label, Point::new(0.5, 1.0));
}

#[test]
fn transformed_basis_is_dashed_and_vectors_solid() {
    let s = render(Dimension::Two, Some(&result_2d()));
    let dashed: Vec<_> = s.arrows().filter(|(_, _, st)| st.dashed).collect();
    assert_eq!(dashed.len(), 2);
    assert!(dashed.iter().all(|(_, _, st)| st.color == Rgba8::GREEN));
    let tips: Vec<_> = s
        .arrows()
        .filter(|(_, _, st)| !st.dashed && st.color == Rgba8::RED)
        .map(|(_, to, _)| to)
        .collect();
    assert_eq!(tips, vec![Point::new(2.0, 6.0)]);
}

#[test]
fn result_3d_has_depth_axis_and_no_parallelogram() {
    let r = result_3d();
    let s = render(Dimension::Three, Some(&r));
    assert_eq!(s.polygons().count(), 0);
    assert_eq!(line_count(&s), 22 + 3);
    assert_eq!(s.arrows().count(), 3 + 3 + 2);

    let labels: Vec<_> = s.labels().collect();
    for expected in ["X", "Y", "Z", "v", "Av", "A·e1", "A·e2", "A·e3"] {
        assert!(labels.contains(&expected), "missing {expected}");
    }

    let proj = Projection::for_dimension(Dimension::Three);
    let av_label = s
        .commands
        .iter()
        .find_map(|c| match c {
            DrawCmd::Label { at, text, .. } if text == "Av" => Some(*at),
            _ => None,
        })
        .unwrap();
    assert_eq!(av_label, proj.project(r.transformed.xyz()));
}

#[test]
fn animation_frames_move_from_identity_to_result() {
    let r = result_2d();
    let anim = Animation::new(&r, 100).unwrap();

    let start = render_frame(&anim.frame_at(0));
    let end = render_frame(&anim.frame_at(100));
    assert!(start.title.ends_with("Animation"));

    let red_tip = |s: &Scene| {
        s.arrows()
            .find(|(_, _, st)| st.color == Rgba8::RED)
            .map(|(_, to, _)| to)
            .unwrap()
    };
    assert_eq!(red_tip(&start), Point::new(1.0, 2.0));
    assert_eq!(red_tip(&end), Point::new(2.0, 6.0));

    let blue_tip = |s: &Scene| {
        s.arrows()
            .find(|(_, _, st)| st.color == Rgba8::BLUE)
            .map(|(_, to, _)| to)
            .unwrap()
    };
    assert_eq!(blue_tip(&start), blue_tip(&end));
    assert_eq!(start.polygons().count(), 0);
}
