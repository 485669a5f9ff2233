//! Command line argument definitions.

use std::ffi::OsString;

use clap::Parser;

use crate::config::{Style, TraceConfig};
use crate::engine::Scope;

/// Uses the Gauss-Jordan algorithm to solve a system of linear equations,
/// printing every intermediate step.
#[derive(Parser, Debug)]
#[command(name = "rgauss")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Equations in the form "a1;a2;..;an;b", where ai are the coefficients of
    /// one row and b the result. "..;;.." stands for a zero coefficient.
    /// Fractions are written x/y, decimals x.y.
    #[arg(required = true, value_name = "ROW")]
    pub rows: Vec<String>,

    /// Skip steps where the matrix does not change
    #[arg(short = 's', long)]
    pub skip_unchanged: bool,

    /// Produce LaTeX code instead of text output
    #[arg(long)]
    pub latex: bool,

    /// Only eliminate below each pivot (row-echelon form)
    #[arg(long)]
    pub echelon: bool,

    /// Print the solution after the trace
    #[arg(long)]
    pub solve: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        trim_rows(Cli::parse_from(shield_rows(std::env::args_os())))
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(shield_rows(args.into_iter().map(Into::into))).map(trim_rows)
    }

    pub fn config(&self) -> TraceConfig {
        TraceConfig::default()
            .with_style(if self.latex { Style::Latex } else { Style::Plain })
            .with_skip_unchanged(self.skip_unchanged)
            .with_scope(if self.echelon {
                Scope::Echelon
            } else {
                Scope::Full
            })
            .with_solution(self.solve)
    }
}

/// Prefixes every row argument with a space so that rows such as `-1;2;3` are
/// not mistaken for flags, wherever they appear on the command line. The space
/// is removed again once clap has split the arguments.
fn shield_rows(args: impl Iterator<Item = OsString>) -> impl Iterator<Item = OsString> {
    args.map(|arg| match arg.to_str() {
        Some(text) if text.contains(';') && !text.starts_with(';') => {
            OsString::from(format!(" {text}"))
        }
        _ => arg,
    })
}

fn trim_rows(mut cli: Cli) -> Cli {
    for row in &mut cli.rows {
        *row = row.trim_start().to_string();
    }
    cli
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_recognized_after_rows() {
        let cli = Cli::try_parse_args(["rgauss", "-1;1;0", "1;1;2", "-s", "--latex"])
            .expect("parse arguments");
        assert_eq!(cli.rows, vec!["-1;1;0", "1;1;2"]);
        assert!(cli.skip_unchanged);
        assert!(cli.latex);
    }

    #[test]
    fn leading_semicolon_rows_are_left_alone() {
        let cli = Cli::try_parse_args(["rgauss", ";1;2", "--solve"]).expect("parse arguments");
        assert_eq!(cli.rows, vec![";1;2"]);
        assert!(cli.solve);
    }
}
