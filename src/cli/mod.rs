//! Command line front end of the `rgauss` binary.

mod args;

pub use args::Cli;

use tracing::info;

use crate::error::Result;
use crate::ui;

/// Parses the process arguments and prints the trace to stdout.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let output = execute(&cli)?;
    println!("{output}");
    Ok(())
}

/// Produces the text `run` would print for already parsed arguments.
pub fn execute(cli: &Cli) -> Result<String> {
    let config = cli.config();
    info!(rows = cli.rows.len(), ?config, "solving system");
    ui::trace(&cli.rows, &config)
}
