//! Augmented coefficient matrix stored row-major.

use std::fmt;

use crate::error::{GaussError, Result};
use crate::rational::Rational;

/// An `m x n` matrix of rationals whose last column is the right-hand side.
///
/// The shape is validated once in [`Matrix::from_rows`]; every later operation
/// keeps it rectangular. Cloning yields a fully independent snapshot.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Rational>,
}

impl Matrix {
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(GaussError::EmptyMatrix);
        };
        let cols = first.len();
        let n_rows = rows.len();
        let mut data = Vec::with_capacity(n_rows * cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.is_empty() {
                return Err(GaussError::EmptyRow { row: idx + 1 });
            }
            if row.len() != cols {
                return Err(GaussError::RaggedRow {
                    row: idx + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Matrix {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Convenience constructor for integer matrices.
    pub fn from_integers<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|&v| Rational::from(v)).collect())
                .collect(),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of unknowns, i.e. all columns but the right-hand side.
    pub fn variables(&self) -> usize {
        self.cols - 1
    }

    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> &Rational {
        &self.data[self.idx(row, col)]
    }

    pub fn row(&self, row: usize) -> &[Rational] {
        let start = self.idx(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Rational]> + '_ {
        self.data.chunks(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<Rational>> {
        self.iter_rows().map(<[Rational]>::to_vec).collect()
    }

    /// First row at or after `from` with a non-zero entry in `col`.
    pub fn first_nonzero_below(&self, from: usize, col: usize) -> Option<usize> {
        (from..self.rows).find(|&r| !self.get(r, col).is_zero())
    }

    /// Column of the first non-zero entry of `row`, if any.
    pub fn leading_column(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(|v| !v.is_zero())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let start_a = a * cols;
        let start_b = b * cols;
        for offset in 0..cols {
            self.data.swap(start_a + offset, start_b + offset);
        }
    }

    /// Divides every entry of `row` by `divisor`. The row is left untouched when
    /// the divisor is zero.
    pub fn divide_row(&mut self, row: usize, divisor: &Rational) -> Result<()> {
        if divisor.is_zero() {
            return Err(GaussError::DivisionByZero);
        }
        let start = self.idx(row, 0);
        let end = start + self.cols;
        for value in &mut self.data[start..end] {
            *value = value.checked_div(divisor)?;
        }
        Ok(())
    }

    /// `target <- target - factor * source`, elementwise.
    pub fn subtract_scaled_row(&mut self, target: usize, factor: &Rational, source: usize) {
        if factor.is_zero() {
            return;
        }
        for col in 0..self.cols {
            let updated = self.get(target, col) - &(factor * self.get(source, col));
            let idx = self.idx(target, col);
            self.data[idx] = updated;
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::format::matrix::plain_block(self))
    }
}
