use crate::config::Style;
use crate::explain::Explanation;
use crate::matrix::Matrix;
use crate::trace::Step;

use super::{render_operation, show_rational};

/// Plain rendering of a matrix without margin notes.
pub fn plain_block(matrix: &Matrix) -> String {
    plain(matrix, &Explanation::new())
}

/// Render one step: the matrix with the operations about to be applied to it.
pub fn render_step(step: &Step, style: Style) -> String {
    match style {
        Style::Plain => plain(&step.matrix, &step.explanation),
        Style::Latex => latex(&step.matrix, &step.explanation),
    }
}

/// Render a whole trace, one block per step separated by blank lines.
pub fn render_steps<'a>(steps: impl IntoIterator<Item = &'a Step>, style: Style) -> String {
    steps
        .into_iter()
        .map(|step| render_step(step, style))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn notes(matrix: &Matrix, explanation: &Explanation, style: Style) -> Vec<Option<String>> {
    (0..matrix.rows())
        .map(|row| {
            explanation
                .get(&row)
                .and_then(|op| render_operation(op, style))
        })
        .collect()
}

fn plain(matrix: &Matrix, explanation: &Explanation) -> String {
    let cells: Vec<Vec<String>> = matrix
        .iter_rows()
        .map(|row| row.iter().map(|v| show_rational(v, Style::Plain)).collect())
        .collect();
    let widths: Vec<usize> = (0..matrix.cols())
        .map(|c| cells.iter().map(|row| row[c].len()).max().unwrap_or(0))
        .collect();
    let rhs = matrix.cols() - 1;
    let notes = notes(matrix, explanation, Style::Plain);

    let mut lines = Vec::with_capacity(cells.len());
    for (row, note) in cells.iter().zip(notes) {
        let mut line = String::new();
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                line.push(' ');
                if c == rhs {
                    line.push_str("| ");
                }
            }
            line.push_str(&format!("{cell:>width$}", width = widths[c]));
        }
        if let Some(note) = note {
            line.push_str("   ");
            line.push_str(&note);
        }
        lines.push(line);
    }
    lines.join("\n")
}

fn latex(matrix: &Matrix, explanation: &Explanation) -> String {
    let rhs = matrix.cols() - 1;
    let columns = if rhs == 0 {
        "c".to_string()
    } else {
        format!("{}|c", "c".repeat(rhs))
    };
    let body = matrix
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|v| show_rational(v, Style::Latex))
                .collect::<Vec<_>>()
                .join(" & ")
        })
        .collect::<Vec<_>>()
        .join(" \\\\\n");

    let mut out = format!(
        "\\[\n\\left(\\begin{{array}}{{{columns}}}\n{body}\n\\end{{array}}\\right)\n"
    );
    let notes = notes(matrix, explanation, Style::Latex);
    if notes.iter().any(Option::is_some) {
        let column = notes
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect::<Vec<_>>()
            .join(" \\\\\n");
        out.push_str(&format!("\\begin{{array}}{{l}}\n{column}\n\\end{{array}}\n"));
    }
    out.push_str("\\]");
    out
}
