//! Turns engine frames into printable steps.
//!
//! An engine frame explains how its matrix was *reached*; a printed step shows a
//! matrix next to the operations about to be applied to it. [`Steps`] shifts the
//! explanations back by one frame, drops unchanged matrices on request and
//! flushes the final matrix when the sentinel arrives.

use std::iter::FusedIterator;

use crate::engine::Frame;
use crate::explain::Explanation;
use crate::matrix::Matrix;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub matrix: Matrix,
    /// Operations that turn `matrix` into the next printed matrix. Empty for
    /// the last step.
    pub explanation: Explanation,
}

pub struct Steps<I> {
    frames: I,
    skip_unchanged: bool,
    last: Option<Matrix>,
}

impl<I> Steps<I>
where
    I: Iterator<Item = Frame>,
{
    pub fn new(frames: I, skip_unchanged: bool) -> Self {
        Steps {
            frames,
            skip_unchanged,
            last: None,
        }
    }
}

/// Pairs every matrix of `frames` with the explanation of the following frame.
pub fn steps<I>(frames: I, skip_unchanged: bool) -> Steps<I::IntoIter>
where
    I: IntoIterator<Item = Frame>,
{
    Steps::new(frames.into_iter(), skip_unchanged)
}

impl<I> Iterator for Steps<I>
where
    I: Iterator<Item = Frame>,
{
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let Some(frame) = self.frames.next() else {
                return self.last.take().map(|matrix| Step {
                    matrix,
                    explanation: Explanation::new(),
                });
            };
            let explanation = frame.explanation.unwrap_or_default();
            match frame.matrix {
                None => {
                    if let Some(matrix) = self.last.take() {
                        return Some(Step {
                            matrix,
                            explanation,
                        });
                    }
                }
                Some(matrix) => {
                    if self.skip_unchanged && self.last.as_ref() == Some(&matrix) {
                        continue;
                    }
                    if let Some(previous) = self.last.replace(matrix) {
                        return Some(Step {
                            matrix: previous,
                            explanation,
                        });
                    }
                }
            }
        }
    }
}

impl<I> FusedIterator for Steps<I> where I: FusedIterator<Item = Frame> {}
