//! Formatting helpers for rendering matrices, row operations and solutions.

pub mod matrix;
pub mod operation;
pub mod solution;

pub use matrix::{render_step, render_steps};
pub use operation::render_operation;
pub use solution::render_solution;

use crate::config::Style;
use crate::rational::Rational;

/// Renders a single coefficient.
pub fn show_rational(value: &Rational, style: Style) -> String {
    match style {
        Style::Plain => value.to_string(),
        Style::Latex if value.is_integer() => value.numer().to_string(),
        Style::Latex => {
            let sign = if value.is_negative() { "-" } else { "" };
            format!(
                "{sign}\\frac{{{}}}{{{}}}",
                value.numer().magnitude(),
                value.denom()
            )
        }
    }
}

/// Like [`show_rational`], but parenthesized when it would not read as a
/// single factor.
fn show_factor(value: &Rational, style: Style) -> String {
    let shown = show_rational(value, style);
    let needs_parens = value.is_negative() || (style == Style::Plain && !value.is_integer());
    match (needs_parens, style) {
        (false, _) => shown,
        (true, Style::Plain) => format!("({shown})"),
        (true, Style::Latex) => format!("\\left({shown}\\right)"),
    }
}

fn row_label(row: usize, style: Style) -> String {
    match style {
        Style::Plain => format!("R{}", row + 1),
        Style::Latex => format!("\\mathrm{{R}}_{{{}}}", row + 1),
    }
}
