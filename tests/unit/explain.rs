use super::*;

#[test]
fn diagonal_scaling_row_zero_line() {
    let v = Vector::from([1.0, 0.0]);
    let m = Matrix::from([[2.0, 0.0], [0.0, 3.0]]);
    let t = Vector::from([2.0, 0.0]);
    let text = explain(&v, &m, &t);
    assert!(
        text.lines().any(|l| l == "= (2.00×1.00 + 0.00×0.00) = 2.00"),
        "{text}"
    );
    assert!(text.lines().any(|l| l == "= (0.00×1.00 + 3.00×0.00) = 0.00"));
}

#[test]
fn header_matrix_and_footer() {
    let v = Vector::from([1.0, -2.0, 0.5]);
    let m = Matrix::from([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    let text = explain(&v, &m, &v);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Linear transformation:");
    assert_eq!(lines[1], "Original vector: v = [1.00, -2.00, 0.50]");
    assert_eq!(lines[2], "Transformation matrix: A =");
    assert_eq!(lines[3], "[1.00  0.00  0.00]");
    assert_eq!(lines[5], "[0.00  0.00  1.00]");
    assert_eq!(*lines.last().unwrap(), "Result: Av = [1.00, -2.00, 0.50]");
    assert_eq!(lines.iter().filter(|l| l.starts_with("= (")).count(), 3);
}

#[test]
fn status_line_names_result() {
    assert_eq!(
        status_line(&Vector::from([2.0, 0.0])),
        "Transformation applied: [2.00, 0.00]"
    );
}
