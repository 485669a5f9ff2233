//! Reading the solution off an eliminated matrix.

use crate::engine::{Elimination, Scope};
use crate::error::{GaussError, Result};
use crate::matrix::Matrix;
use crate::rational::Rational;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Solution {
    /// Exactly one value per variable.
    Unique(Vec<Rational>),
    /// Consistent, but the listed variable columns carry no pivot.
    Underdetermined { free_columns: Vec<usize> },
    /// `row` reads `0 = b` with `b != 0`.
    Inconsistent { row: usize },
}

/// Classifies a matrix in row-echelon form, as left behind by either
/// elimination scope, and back-substitutes when the solution is unique.
///
/// Leading coefficients of the variable part must move strictly right from
/// row to row, and rows without one must sit below every pivot row. Anything
/// else is rejected with [`GaussError::NotEchelon`].
pub fn solve(matrix: &Matrix) -> Result<Solution> {
    let vars = matrix.variables();
    let mut pivots: Vec<(usize, usize)> = Vec::new();
    let mut inconsistent = None;
    let mut past_pivots = false;
    for row in 0..matrix.rows() {
        match matrix.leading_column(row) {
            Some(col) if col < vars => {
                if past_pivots || pivots.last().is_some_and(|&(_, prev)| col <= prev) {
                    return Err(GaussError::NotEchelon { row: row + 1 });
                }
                pivots.push((row, col));
            }
            Some(_) => {
                past_pivots = true;
                inconsistent.get_or_insert(row);
            }
            None => past_pivots = true,
        }
    }
    if let Some(row) = inconsistent {
        return Ok(Solution::Inconsistent { row });
    }

    if pivots.len() < vars {
        let free_columns = (0..vars)
            .filter(|c| !pivots.iter().any(|&(_, p)| p == *c))
            .collect();
        return Ok(Solution::Underdetermined { free_columns });
    }

    let mut values = vec![Rational::zero(); vars];
    for &(row, col) in pivots.iter().rev() {
        let mut rhs = matrix.get(row, vars).clone();
        for c in col + 1..vars {
            rhs = rhs - &(matrix.get(row, c) * &values[c]);
        }
        values[col] = rhs.checked_div(matrix.get(row, col))?;
    }
    Ok(Solution::Unique(values))
}

/// Eliminates `matrix` to completion and classifies the result.
pub fn solve_system(matrix: Matrix, scope: Scope) -> Result<(Matrix, Solution)> {
    let reduced = Elimination::with_scope(matrix, scope).finish();
    let solution = solve(&reduced)?;
    Ok((reduced, solution))
}
