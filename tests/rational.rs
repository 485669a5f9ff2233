use num_bigint::BigInt;
use rgauss::{parse_row, GaussError, Rational};

fn r(n: i64, d: i64) -> Rational {
    Rational::new(n, d).expect("non-zero denominator")
}

#[test]
fn arithmetic_is_exact() {
    let half = r(1, 2);
    let third = r(1, 3);
    assert_eq!(&half + &third, r(5, 6));
    assert_eq!(&half - &third, r(1, 6));
    assert_eq!(&half * &third, r(1, 6));
    assert_eq!(half.checked_div(&third), Ok(r(3, 2)));
    assert_eq!(-half, r(-1, 2));
}

#[test]
fn fraction_row_round_trips_through_arithmetic() {
    let row = parse_row("1/2;1/3;1").expect("parse row");
    assert_eq!(row, vec![r(1, 2), r(1, 3), Rational::one()]);

    let back = (&row[0] + &row[1]) - &row[1];
    assert_eq!(back.numer(), &BigInt::from(1));
    assert_eq!(back.denom(), &BigInt::from(2));
}

#[test]
fn integer_text() {
    assert_eq!("7".parse::<Rational>(), Ok(Rational::from(7)));
    assert_eq!(" -12 ".parse::<Rational>(), Ok(Rational::from(-12)));
    assert_eq!("+3".parse::<Rational>(), Ok(Rational::from(3)));
}

#[test]
fn decimal_text() {
    assert_eq!(Rational::from_decimal("0.25"), Ok(r(1, 4)));
    assert_eq!(Rational::from_decimal("-1.5"), Ok(r(-3, 2)));
    assert_eq!(Rational::from_decimal(".5"), Ok(r(1, 2)));
    assert_eq!(Rational::from_decimal("1."), Ok(Rational::one()));
    assert_eq!(Rational::from_decimal("-1.5e2"), Ok(Rational::from(-150)));
    assert_eq!(Rational::from_decimal("2E-3"), Ok(r(1, 500)));
    assert!(Rational::from_decimal("1/2").is_err());
}

#[test]
fn fraction_text() {
    assert_eq!(Rational::from_fraction_text("3/6"), Ok(r(1, 2)));
    assert_eq!(Rational::from_fraction_text("-3/4"), Ok(r(-3, 4)));
    assert_eq!(Rational::from_fraction_text("+10/4"), Ok(r(5, 2)));
    assert!(Rational::from_fraction_text("3").is_err());
}

#[test]
fn malformed_text_is_a_parse_error() {
    for input in ["abc", "1.2.3", "1/", "/2", "--1", "1e", "1/-2", "", "1.5/2"] {
        assert!(
            matches!(input.parse::<Rational>(), Err(GaussError::Parse(_))),
            "{input:?} should not parse"
        );
    }
}

#[test]
fn zero_denominator_is_a_parse_error() {
    assert!(matches!(
        Rational::from_fraction_text("1/0"),
        Err(GaussError::Parse(_))
    ));
}

#[test]
fn huge_exponent_is_rejected() {
    assert!(matches!(
        Rational::from_decimal("1e999999"),
        Err(GaussError::Parse(_))
    ));
}

#[test]
fn zero_tests() {
    assert!(r(0, 5).is_zero());
    assert_eq!(r(0, 5), Rational::zero());
    assert!(!r(1, 5).is_zero());
    assert!(r(-2, -2).is_one());
}
