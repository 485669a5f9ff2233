//! Parsers for coefficient literals and matrix rows.
//!
//! A row is written as `a1;a2;..;an;b`. Empty entries stand for zero, and each
//! value may be an integer, a decimal (optionally with an exponent) or a
//! `numerator/denominator` fraction.

use nom::branch::alt;
use nom::character::complete::{char, digit0, digit1, multispace0, one_of};
use nom::combinator::{all_consuming, map, opt, recognize};
use nom::error::VerboseError;
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;
use num_bigint::BigInt;
use num_traits::{pow, Zero};

use crate::error::{GaussError, Result};
use crate::matrix::Matrix;
use crate::rational::Rational;

/// Separator between the coefficients of one row.
pub const DELIMITER: char = ';';

/// Exponents beyond this are rejected rather than expanded into huge integers.
const MAX_EXPONENT: i64 = 4096;

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

enum Literal<'a> {
    Fraction {
        negative: bool,
        numer: &'a str,
        denom: &'a str,
    },
    Decimal {
        negative: bool,
        int: &'a str,
        frac: &'a str,
        exp: Option<&'a str>,
    },
}

/// Parses any supported literal: integer, decimal or fraction.
pub fn parse_rational(input: &str) -> Result<Rational> {
    run(alt((fraction, decimal)), input)
}

pub fn parse_decimal(input: &str) -> Result<Rational> {
    run(decimal, input)
}

pub fn parse_fraction(input: &str) -> Result<Rational> {
    run(fraction, input)
}

/// Parses one `;`-separated row. Empty entries become zero.
pub fn parse_row(input: &str) -> Result<Vec<Rational>> {
    input
        .split(DELIMITER)
        .enumerate()
        .map(|(col, entry)| {
            if entry.trim().is_empty() {
                return Ok(Rational::zero());
            }
            parse_rational(entry).map_err(|_| {
                GaussError::Parse(format!(
                    "invalid coefficient {:?} in column {}",
                    entry.trim(),
                    col + 1
                ))
            })
        })
        .collect()
}

/// Builds the augmented matrix from row texts, rejecting ragged input.
pub fn parse_matrix<S: AsRef<str>>(rows: &[S]) -> Result<Matrix> {
    let parsed = rows
        .iter()
        .map(|row| parse_row(row.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Matrix::from_rows(parsed)
}

fn run<'a, F>(parser: F, input: &'a str) -> Result<Rational>
where
    F: FnMut(&'a str) -> ParseResult<'a, Literal<'a>>,
{
    match all_consuming(ws(parser))(input) {
        Ok((_, literal)) => build(literal),
        Err(_) => Err(GaussError::Parse(format!("invalid number {input:?}"))),
    }
}

fn build(literal: Literal<'_>) -> Result<Rational> {
    match literal {
        Literal::Fraction {
            negative,
            numer,
            denom,
        } => {
            let numer = digits(numer)?;
            let denom = digits(denom)?;
            if denom.is_zero() {
                return Err(GaussError::Parse("zero denominator".to_string()));
            }
            let value = Rational::new(numer, denom)?;
            Ok(if negative { -value } else { value })
        }
        Literal::Decimal {
            negative,
            int,
            frac,
            exp,
        } => {
            let mut numer = digits(&format!("{int}{frac}"))?;
            let exp = match exp {
                Some(text) => text
                    .parse::<i64>()
                    .ok()
                    .filter(|e| e.abs() <= MAX_EXPONENT)
                    .ok_or_else(|| GaussError::Parse(format!("exponent out of range: {text}")))?,
                None => 0,
            };
            let shift = exp - frac.len() as i64;
            let mut denom = BigInt::from(1);
            if shift >= 0 {
                numer *= pow(BigInt::from(10), shift as usize);
            } else {
                denom = pow(BigInt::from(10), shift.unsigned_abs() as usize);
            }
            if negative {
                numer = -numer;
            }
            Rational::new(numer, denom)
        }
    }
}

fn digits(text: &str) -> Result<BigInt> {
    BigInt::parse_bytes(text.as_bytes(), 10)
        .ok_or_else(|| GaussError::Parse(format!("invalid digits {text:?}")))
}

fn sign(input: &str) -> ParseResult<'_, bool> {
    map(opt(one_of("+-")), |s| s == Some('-'))(input)
}

fn fraction(input: &str) -> ParseResult<'_, Literal<'_>> {
    map(
        tuple((sign, digit1, ws(char('/')), digit1)),
        |(negative, numer, _, denom)| Literal::Fraction {
            negative,
            numer,
            denom,
        },
    )(input)
}

fn decimal(input: &str) -> ParseResult<'_, Literal<'_>> {
    map(
        tuple((sign, mantissa, opt(exponent))),
        |(negative, (int, frac), exp)| Literal::Decimal {
            negative,
            int,
            frac,
            exp,
        },
    )(input)
}

fn mantissa(input: &str) -> ParseResult<'_, (&str, &str)> {
    alt((
        map(
            pair(digit1, opt(preceded(char('.'), digit0))),
            |(int, frac): (&str, Option<&str>)| (int, frac.unwrap_or("")),
        ),
        map(preceded(char('.'), digit1), |frac| ("", frac)),
    ))(input)
}

fn exponent(input: &str) -> ParseResult<'_, &str> {
    preceded(one_of("eE"), recognize(pair(opt(one_of("+-")), digit1)))(input)
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}
