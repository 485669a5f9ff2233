//! Row operations recorded alongside each trace frame.

use std::collections::BTreeMap;

use crate::rational::Rational;

/// One elementary row operation, described from the point of view of the row
/// it is attached to in an [`Explanation`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Operation {
    /// The row was exchanged with row `with`.
    Swap { with: usize },
    /// The row was divided by `divisor`.
    Divide { divisor: Rational },
    /// `factor` times row `pivot_row` was subtracted from the row.
    Subtract { factor: Rational, pivot_row: usize },
}

/// Operations keyed by the positional row index they were applied to.
pub type Explanation = BTreeMap<usize, Operation>;

pub fn swap(row: usize, with: usize) -> Explanation {
    Explanation::from([(row, Operation::Swap { with })])
}

pub fn divide(row: usize, divisor: Rational) -> Explanation {
    Explanation::from([(row, Operation::Divide { divisor })])
}
