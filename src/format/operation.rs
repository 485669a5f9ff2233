use crate::config::Style;
use crate::explain::Operation;

use super::{row_label, show_factor};

/// Render the margin note for one row operation. Returns `None` for
/// operations that leave the row unchanged, such as subtracting zero times
/// another row.
pub fn render_operation(op: &Operation, style: Style) -> Option<String> {
    match op {
        Operation::Swap { with } => {
            let arrow = match style {
                Style::Plain => "<->",
                Style::Latex => "\\leftrightarrow",
            };
            Some(format!("{arrow} {}", row_label(*with, style)))
        }
        Operation::Divide { divisor } => {
            let op = match style {
                Style::Plain => "/",
                Style::Latex => ":",
            };
            Some(format!("{op} {}", show_factor(divisor, style)))
        }
        Operation::Subtract { factor, pivot_row } => {
            if factor.is_zero() {
                return None;
            }
            let sign = if factor.is_negative() { "+" } else { "-" };
            let magnitude = factor.abs();
            let row = row_label(*pivot_row, style);
            if magnitude.is_one() {
                return Some(format!("{sign} {row}"));
            }
            let times = match style {
                Style::Plain => "*",
                Style::Latex => "\\cdot",
            };
            Some(format!(
                "{sign} {} {times} {row}",
                show_factor(&magnitude, style)
            ))
        }
    }
}
