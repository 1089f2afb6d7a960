use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(VetorError::parse("x").to_string().contains("parse error:"));
    assert!(VetorError::shape("x").to_string().contains("shape error:"));
    assert!(
        VetorError::stale_widget("x")
            .to_string()
            .contains("stale entry:")
    );
    assert!(
        VetorError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        VetorError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(VetorError::render("x").to_string().contains("render error:"));
    assert!(
        VetorError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VetorError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn dialog_titles_distinguish_input_errors() {
    assert_eq!(VetorError::parse("x").dialog_title(), "Invalid number");
    assert_eq!(
        VetorError::shape("x").dialog_title(),
        "Incompatible dimensions"
    );
    assert_ne!(
        VetorError::stale_widget("x").dialog_title(),
        VetorError::parse("x").dialog_title()
    );
}

#[test]
fn in_field_prefixes_parse_messages_once() {
    let e = VetorError::parse("'x' is not a number").in_field("v[2]");
    assert_eq!(e.to_string(), "parse error: v[2]: 'x' is not a number");

    let shape = VetorError::shape("2 vs 3").in_field("v[2]");
    assert_eq!(shape.to_string(), "shape error: 2 vs 3");
}
