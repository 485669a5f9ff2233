//! String-based helpers: rows in, rendered text out.

use crate::config::{Style, TraceConfig};
use crate::engine::{Elimination, Scope};
use crate::error::Result;
use crate::format::{render_solution, render_steps};
use crate::parser::parse_matrix;
use crate::solution::{solve as solve_matrix, solve_system};
use crate::trace::{steps, Step};

/// Parse `rows`, eliminate, and render every step according to `config`.
pub fn trace<S: AsRef<str>>(rows: &[S], config: &TraceConfig) -> Result<String> {
    let matrix = parse_matrix(rows)?;
    let mut engine = Elimination::with_scope(matrix, config.scope);

    let trace: Vec<Step> = steps(engine.by_ref(), config.skip_unchanged).collect();
    let mut output = render_steps(&trace, config.style);

    if config.show_solution {
        let solution = solve_matrix(engine.matrix())?;
        output.push_str("\n\n");
        output.push_str(&render_solution(&solution, config.style).join("\n"));
    }
    Ok(output)
}

/// Parse `rows`, eliminate, and summarize the solution.
pub fn solve<S: AsRef<str>>(rows: &[S], scope: Scope) -> Result<Vec<String>> {
    let matrix = parse_matrix(rows)?;
    let (_, solution) = solve_system(matrix, scope)?;
    Ok(render_solution(&solution, Style::Plain))
}
