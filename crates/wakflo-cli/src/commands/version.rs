//! `wakflo version`.

use crate::{error::CliResult, output::OutputManager};

pub fn execute(output: &OutputManager) -> CliResult<()> {
    output.print(&version_line())?;
    Ok(())
}

fn version_line() -> String {
    format!("Wakflo CLI version: {}", env!("CARGO_PKG_VERSION"))
}
