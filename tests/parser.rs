use rgauss::{parse_matrix, parse_row, GaussError, Matrix, Rational};

#[test]
fn empty_entries_are_zero() {
    assert_eq!(
        parse_row("1;;3").expect("parse row"),
        vec![Rational::from(1), Rational::zero(), Rational::from(3)]
    );
    assert_eq!(parse_row("").expect("parse row"), vec![Rational::zero()]);
    assert_eq!(
        parse_row(" ; ").expect("parse row"),
        vec![Rational::zero(), Rational::zero()]
    );
}

#[test]
fn mixed_literals_in_one_row() {
    let row = parse_row("-2; 0.5 ;3/4;1e1").expect("parse row");
    assert_eq!(
        row,
        vec![
            Rational::from(-2),
            Rational::new(1, 2).unwrap(),
            Rational::new(3, 4).unwrap(),
            Rational::from(10),
        ]
    );
}

#[test]
fn bad_coefficient_names_its_column() {
    let err = parse_row("1;x;3").unwrap_err();
    assert_eq!(
        err,
        GaussError::Parse("invalid coefficient \"x\" in column 2".to_string())
    );
}

#[test]
fn ragged_rows_are_rejected() {
    let err = parse_matrix(&["1;2;3", "1;2"]).unwrap_err();
    assert_eq!(
        err,
        GaussError::RaggedRow {
            row: 2,
            expected: 3,
            found: 2
        }
    );
    assert!(err
        .to_string()
        .contains("not all rows have the same number of coefficients"));
}

#[test]
fn empty_input_is_rejected() {
    let rows: [&str; 0] = [];
    assert_eq!(parse_matrix(&rows), Err(GaussError::EmptyMatrix));
    assert_eq!(
        Matrix::from_rows(vec![vec![]]),
        Err(GaussError::EmptyRow { row: 1 })
    );
}

#[test]
fn matrix_shape_and_access() {
    let m = parse_matrix(&["1;2;3", "4;5;6"]).expect("parse matrix");
    assert_eq!((m.rows(), m.cols(), m.variables()), (2, 3, 2));
    assert_eq!(m.get(1, 2), &Rational::from(6));
    assert_eq!(m.row(0), &[Rational::from(1), Rational::from(2), Rational::from(3)][..]);
    assert_eq!(m.leading_column(1), Some(0));
    assert_eq!(m.to_rows().len(), 2);
}

#[test]
fn row_operations() {
    let mut m = Matrix::from_integers(&[[2i64, 4, 6], [1, 1, 1]]).expect("build matrix");
    m.divide_row(0, &Rational::from(2)).expect("non-zero divisor");
    assert_eq!(m, Matrix::from_integers(&[[1i64, 2, 3], [1, 1, 1]]).unwrap());

    m.subtract_scaled_row(1, &Rational::from(1), 0);
    assert_eq!(m, Matrix::from_integers(&[[1i64, 2, 3], [0, -1, -2]]).unwrap());

    m.swap_rows(0, 1);
    assert_eq!(m, Matrix::from_integers(&[[0i64, -1, -2], [1, 2, 3]]).unwrap());

    let before = m.clone();
    assert_eq!(
        m.divide_row(0, &Rational::zero()),
        Err(GaussError::DivisionByZero)
    );
    assert_eq!(m, before);
}
