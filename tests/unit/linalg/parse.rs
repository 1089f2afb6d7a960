use super::*;

#[test]
fn component_trims_and_parses() {
    assert_eq!(parse_component(" 1.5 ").unwrap(), 1.5);
    assert_eq!(parse_component("-3").unwrap(), -3.0);
    assert_eq!(parse_component("2e-1").unwrap(), 0.2);
}

#[test]
fn component_rejects_text_empty_and_non_finite() {
    for bad in ["", "   ", "abc", "1,5", "inf", "NaN", "-infinity"] {
        assert!(
            matches!(parse_component(bad), Err(VetorError::Parse(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn vector_accepts_commas_and_spaces() {
    assert_eq!(parse_vector("1,0").unwrap(), Vector::from([1.0, 0.0]));
    assert_eq!(parse_vector("1 2  3").unwrap(), Vector::from([1.0, 2.0, 3.0]));
    assert_eq!(parse_vector(" 1, 2 ,3 ").unwrap().len(), 3);
    assert!(parse_vector("").is_err());
    assert!(parse_vector("1,x").is_err());
}

#[test]
fn matrix_rows_split_on_semicolons() {
    let m = parse_matrix("2,0; 0,3").unwrap();
    assert_eq!(m, Matrix::from([[2.0, 0.0], [0.0, 3.0]]));

    let ragged = parse_matrix("1 2 3; 4 5").unwrap();
    assert_eq!(ragged.rows()[1].len(), 2);

    let err = parse_matrix("1,2;3,q").unwrap_err();
    assert!(err.to_string().contains("row 2"));
}

#[test]
fn empty_interior_row_is_a_parse_error() {
    let err = parse_matrix("1,0;;0,1").unwrap_err();
    assert!(matches!(err, VetorError::Parse(_)));
    assert!(err.to_string().contains("matrix row 2 is empty"));

    assert!(parse_matrix(";1,0;0,1").is_err());
    assert!(matches!(parse_matrix(" ; "), Err(VetorError::Parse(_))));
}

#[test]
fn single_trailing_semicolon_is_allowed() {
    let m = parse_matrix("1,0;0,1;").unwrap();
    assert_eq!(m, Matrix::from([[1.0, 0.0], [0.0, 1.0]]));
    assert!(parse_matrix("1,0;0,1;;").is_err());
}
