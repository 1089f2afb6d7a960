use super::*;

#[test]
fn endpoints_are_exact() {
    let a = Vector::from([1.0, -0.3, 2.7]);
    let b = Vector::from([-4.1, 0.9, 0.2]);
    assert_eq!(Vector::lerp(&a, &b, 0.0), a);
    assert_eq!(Vector::lerp(&a, &b, 1.0), b);
}

#[test]
fn midpoint_and_linearity() {
    assert_eq!(f64::lerp(&0.0, &10.0, 0.5), 5.0);
    assert_eq!(f64::lerp(&2.0, &-2.0, 0.25), 1.0);

    let a = Vector::from([0.0, 4.0]);
    let b = Vector::from([8.0, 0.0]);
    assert_eq!(Vector::lerp(&a, &b, 0.75), Vector::from([6.0, 1.0]));
}

#[test]
fn monotonic_in_t() {
    let (a, b) = (-1.5, 3.25);
    let mut prev = f64::lerp(&a, &b, 0.0);
    for i in 1..=100 {
        let cur = f64::lerp(&a, &b, f64::from(i) / 100.0);
        assert!(cur >= prev - 1e-12);
        prev = cur;
    }
}

#[test]
fn lists_interpolate_elementwise() {
    let a = vec![Vector::from([1.0, 0.0]), Vector::from([0.0, 1.0])];
    let b = vec![Vector::from([3.0, 0.0]), Vector::from([0.0, -1.0])];
    let mid = Vec::<Vector>::lerp(&a, &b, 0.5);
    assert_eq!(mid, vec![Vector::from([2.0, 0.0]), Vector::from([0.0, 0.0])]);
}
