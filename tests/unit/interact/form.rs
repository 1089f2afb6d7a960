use super::*;

#[test]
fn new_form_holds_zero_vector_and_identity() {
    let f = FormState::new(Dimension::Three);
    assert_eq!(f.vector_entry(2), Some("0.0"));
    assert_eq!(f.matrix_entry(1, 1), Some("1.0"));
    assert_eq!(f.matrix_entry(0, 2), Some("0.0"));
    assert_eq!(f.read_matrix().unwrap(), Matrix::identity(Dimension::Three));
    assert_eq!(f.speed(), Speed::default());
    assert!(!f.step_by_step());
}

#[test]
fn switching_dimension_rebuilds_entries() {
    let mut f = FormState::new(Dimension::Three);
    f.set_vector_entry(0, "7").unwrap();
    f.set_speed(2.0);
    f.set_dimension(Dimension::Two);
    assert_eq!(f.vector_entry(0), Some("0.0"));
    assert_eq!(f.vector_entry(2), None);
    assert_eq!(f.speed().get(), 2.0);
}

#[test]
fn entries_outside_the_current_layout_are_stale() {
    let mut f = FormState::new(Dimension::Two);
    let err = f.set_vector_entry(2, "1").unwrap_err();
    assert!(matches!(err, VetorError::StaleWidget(_)));
    let err = f.set_matrix_entry(0, 2, "1").unwrap_err();
    assert!(err.to_string().starts_with("stale entry:"));
    assert!(err.to_string().contains("(1, 3)"));
}

#[test]
fn read_vector_names_the_bad_field() {
    let mut f = FormState::new(Dimension::Two);
    f.set_vector_entry(1, "abc").unwrap();
    let err = f.read_vector().unwrap_err();
    assert_eq!(err.to_string(), "parse error: v[2]: 'abc' is not a number");
}

#[test]
fn read_matrix_names_the_bad_field() {
    let mut f = FormState::new(Dimension::Two);
    f.set_matrix_entry(1, 0, "").unwrap();
    let err = f.read_matrix().unwrap_err();
    assert!(err.to_string().contains("A[2,1]"));
}

#[test]
fn line_setters_check_shape() {
    let mut f = FormState::new(Dimension::Two);
    f.set_vector_text("1, 2").unwrap();
    f.set_matrix_text("2,0; 0,3").unwrap();
    assert_eq!(f.read_vector().unwrap(), Vector::from([1.0, 2.0]));
    assert_eq!(f.read_matrix().unwrap().get(1, 1), Some(3.0));

    assert!(matches!(f.set_vector_text("1 2 3"), Err(VetorError::Shape(_))));
    assert!(matches!(f.set_matrix_text("1,2;3"), Err(VetorError::Shape(_))));
}

#[test]
fn matrix_text_with_an_empty_row_is_rejected() {
    let mut f = FormState::new(Dimension::Two);
    let before = f.clone();
    assert!(matches!(f.set_matrix_text("1,0;;0,1"), Err(VetorError::Parse(_))));
    assert_eq!(f, before);
    f.set_matrix_text("1,0;0,1;").unwrap();
}

#[test]
fn fill_from_writes_exercise_values() {
    let ex = Exercise {
        vector: Vector::from([1.5, -0.3, 2.0]),
        matrix: Matrix::from([[1.0, 0.0, 0.0], [0.0, -1.2, 0.0], [0.0, 0.0, 2.0]]),
        transformed: Vector::from([1.5, 0.36, 4.0]),
    };
    let mut f = FormState::new(Dimension::Two);
    f.fill_from(&ex).unwrap();
    assert_eq!(f.dimension(), Dimension::Three);
    assert_eq!(f.vector_entry(1), Some("-0.3"));
    assert_eq!(f.matrix_entry(1, 1), Some("-1.2"));
    assert_eq!(f.read_vector().unwrap(), ex.vector);
}

#[test]
fn speed_is_clamped() {
    let mut f = FormState::new(Dimension::Two);
    assert_eq!(f.set_speed(10.0).get(), Speed::MAX);
    assert_eq!(f.set_speed(0.1).get(), Speed::MIN);
}
