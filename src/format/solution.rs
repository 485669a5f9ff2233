use crate::config::Style;
use crate::solution::Solution;

use super::show_rational;

fn variable(col: usize, style: Style) -> String {
    match style {
        Style::Plain => format!("x{}", col + 1),
        Style::Latex => format!("x_{{{}}}", col + 1),
    }
}

/// Render a `Solution` into human-readable lines.
pub fn render_solution(solution: &Solution, style: Style) -> Vec<String> {
    match solution {
        Solution::Unique(values) => {
            let mut lines = vec!["Unique solution:".to_string()];
            lines.extend(
                values
                    .iter()
                    .enumerate()
                    .map(|(col, value)| format!("{} = {}", variable(col, style), show_rational(value, style))),
            );
            lines
        }
        Solution::Underdetermined { free_columns } => {
            let free = free_columns
                .iter()
                .map(|&col| variable(col, style))
                .collect::<Vec<_>>()
                .join(", ");
            vec![format!("Infinitely many solutions (free variables: {free}).")]
        }
        Solution::Inconsistent { row } => vec![
            "No solution (inconsistent system).".to_string(),
            format!("Contradiction in row {}.", row + 1),
        ],
    }
}
