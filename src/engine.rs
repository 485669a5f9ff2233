//! Gauss-Jordan elimination as a lazy stream of trace frames.
//!
//! [`Elimination`] owns the matrix and walks it towards reduced row-echelon
//! form one observable step at a time. Every yielded [`Frame`] carries an
//! independent snapshot of the matrix together with the row operations that
//! produced it, so consumers may keep earlier frames around freely.
//!
//! Frame protocol:
//! 1. the untouched input, without explanation;
//! 2. per pivot: an optional swap, the normalization of the pivot row, and one
//!    combined elimination frame;
//! 3. a sentinel without matrix and with an empty explanation once the pivot
//!    position leaves the matrix.
//!
//! A column that is zero at and below the pivot row is skipped without
//! emitting anything; the pivot row stays where it is.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::explain::{self, Explanation, Operation};
use crate::matrix::Matrix;

/// Which rows are cleared in the pivot column after normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scope {
    /// Every other row, yielding reduced row-echelon form.
    #[default]
    Full,
    /// Only rows below the pivot, yielding row-echelon form with unit pivots.
    Echelon,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub matrix: Option<Matrix>,
    pub explanation: Option<Explanation>,
}

impl Frame {
    fn initial(matrix: &Matrix) -> Self {
        Frame {
            matrix: Some(matrix.clone()),
            explanation: None,
        }
    }

    fn step(matrix: &Matrix, explanation: Explanation) -> Self {
        Frame {
            matrix: Some(matrix.clone()),
            explanation: Some(explanation),
        }
    }

    fn sentinel() -> Self {
        Frame {
            matrix: None,
            explanation: Some(Explanation::new()),
        }
    }

    /// True for the closing frame that carries no matrix.
    pub fn is_sentinel(&self) -> bool {
        self.matrix.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Start,
    Pivot,
    Normalize,
    Eliminate,
    Done,
}

#[derive(Clone, Debug)]
pub struct Elimination {
    matrix: Matrix,
    row: usize,
    col: usize,
    scope: Scope,
    stage: Stage,
}

/// Starts a full Gauss-Jordan run over `matrix`.
pub fn gauss_jordan(matrix: Matrix) -> Elimination {
    Elimination::new(matrix)
}

impl Elimination {
    pub fn new(matrix: Matrix) -> Self {
        Self::with_scope(matrix, Scope::default())
    }

    pub fn with_scope(matrix: Matrix, scope: Scope) -> Self {
        Elimination {
            matrix,
            row: 0,
            col: 0,
            scope,
            stage: Stage::Start,
        }
    }

    /// The matrix in its current, possibly partially reduced, state.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Current pivot position `(row, col)`.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Runs the remaining steps and returns the final matrix.
    pub fn finish(mut self) -> Matrix {
        for _ in self.by_ref() {}
        self.matrix
    }

    /// Boundary check and pivot search. `None` means a column was skipped and
    /// the search has to run again.
    fn pivot(&mut self) -> Option<Frame> {
        let (i, j) = (self.row, self.col);
        if i >= self.matrix.rows() || j >= self.matrix.cols() {
            debug!(row = i, col = j, "pivot left the matrix, elimination finished");
            self.stage = Stage::Done;
            return Some(Frame::sentinel());
        }

        if !self.matrix.get(i, j).is_zero() {
            self.stage = Stage::Normalize;
            return None;
        }

        trace!(row = i, col = j, "zero pivot, searching rows below");
        match self.matrix.first_nonzero_below(i + 1, j) {
            Some(r) => {
                debug!(row = i, with = r, "swapping rows");
                self.matrix.swap_rows(i, r);
                self.stage = Stage::Normalize;
                Some(Frame::step(&self.matrix, explain::swap(i, r)))
            }
            None => {
                debug!(row = i, col = j, "column is zero from the pivot down, skipping");
                self.col += 1;
                None
            }
        }
    }

    fn normalize(&mut self) -> Frame {
        let (i, j) = (self.row, self.col);
        let divisor = self.matrix.get(i, j).clone();
        match self.matrix.divide_row(i, &divisor) {
            Ok(()) => {
                debug!(row = i, %divisor, "normalized pivot row");
                self.stage = Stage::Eliminate;
                Frame::step(&self.matrix, explain::divide(i, divisor))
            }
            Err(err) => {
                debug!(row = i, col = j, %err, "zero divisor, stopping");
                self.stage = Stage::Done;
                Frame::step(&self.matrix, Explanation::new())
            }
        }
    }

    fn eliminate(&mut self) -> Frame {
        let (i, j) = (self.row, self.col);
        let scope = self.scope;
        let mut explanation = Explanation::new();
        for k in (0..self.matrix.rows()).filter(|&k| match scope {
            Scope::Full => k != i,
            Scope::Echelon => k > i,
        }) {
            let factor = self.matrix.get(k, j).clone();
            self.matrix.subtract_scaled_row(k, &factor, i);
            explanation.insert(
                k,
                Operation::Subtract {
                    factor,
                    pivot_row: i,
                },
            );
        }
        debug!(row = i, col = j, rows = explanation.len(), "eliminated pivot column");

        self.row += 1;
        self.col += 1;
        self.stage = Stage::Pivot;
        Frame::step(&self.matrix, explanation)
    }
}

impl Iterator for Elimination {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        loop {
            match self.stage {
                Stage::Start => {
                    self.stage = Stage::Pivot;
                    return Some(Frame::initial(&self.matrix));
                }
                Stage::Pivot => {
                    if let Some(frame) = self.pivot() {
                        return Some(frame);
                    }
                }
                Stage::Normalize => return Some(self.normalize()),
                Stage::Eliminate => return Some(self.eliminate()),
                Stage::Done => return None,
            }
        }
    }
}

impl FusedIterator for Elimination {}
