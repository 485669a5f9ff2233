//! Gauss-Jordan elimination over exact rationals that explains every step.
//!
//! The [`engine`] yields a trace of matrix snapshots, each paired with the row
//! operations that produced it; [`trace`] and [`format`] turn that trace into
//! plain text or LaTeX.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod explain;
pub mod format;
pub mod matrix;
pub mod parser;
pub mod rational;
pub mod solution;
pub mod trace;
pub mod ui;

pub use config::{Style, TraceConfig};
pub use engine::{gauss_jordan, Elimination, Frame, Scope};
pub use error::{GaussError, Result};
pub use explain::{Explanation, Operation};
pub use format::{render_operation, render_solution, render_step, render_steps};
pub use matrix::Matrix;
pub use parser::{parse_matrix, parse_rational, parse_row};
pub use rational::Rational;
pub use solution::{solve, solve_system, Solution};
pub use trace::{steps, Step, Steps};
