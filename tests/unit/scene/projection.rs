use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn planar_drops_depth() {
    let p = Projection::Planar.project([1.5, -2.0, 9.0]);
    assert_eq!(p, Point::new(1.5, -2.0));
    assert_eq!(
        Projection::Planar.viewport(),
        Viewport::symmetric(AXIS_EXTENT, AXIS_EXTENT)
    );
}

#[test]
fn oblique_is_linear_and_keeps_origin() {
    let proj = Projection::for_dimension(Dimension::Three);
    assert!(close(proj.project([0.0, 0.0, 0.0]), Point::ZERO));

    let a = proj.project([1.0, 2.0, 3.0]);
    let b = proj.project([2.0, 4.0, 6.0]);
    assert!(close(Point::new(a.x * 2.0, a.y * 2.0), b));

    // z points straight up on screen.
    let z = proj.project([0.0, 0.0, 1.0]);
    assert!(z.x.abs() < 1e-12);
    assert!(z.y > 0.0);
}

#[test]
fn oblique_viewport_contains_cube() {
    let proj = Projection::for_dimension(Dimension::Three);
    let vp = proj.viewport();
    let p = proj.project([AXIS_EXTENT, AXIS_EXTENT, AXIS_EXTENT]);
    assert!(p.x <= vp.max.x + 1e-9 && p.y <= vp.max.y + 1e-9);
    assert!(vp.width() > 2.0 * AXIS_EXTENT);
}
