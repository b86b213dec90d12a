//! Command handlers.
//!
//! Each handler translates parsed arguments into core service calls and
//! reports the result. No business logic lives here.

use std::io;

use wakflo_core::{application::ports::BackendClient, domain::ChangeSet};

use crate::{config::AppConfig, output::OutputManager, prompt::Prompter};

pub mod add;
pub mod auth;
pub mod completions;
pub mod config;
pub mod create;
pub mod version;

/// Collaborators shared by the commands that talk to the user and the
/// backend.
pub struct Session<'a> {
    pub config: &'a AppConfig,
    pub output: &'a OutputManager,
    pub prompter: &'a dyn Prompter,
    pub backend: &'a dyn BackendClient,
}

/// One line per staged write, paths relative to the project.
fn print_changes(output: &OutputManager, changes: &ChangeSet) -> io::Result<()> {
    for write in changes.writes() {
        let verb = if write.is_new() { "create" } else { "update" };
        output.print(&format!("  {verb:<6} {}", write.path.display()))?;
    }
    Ok(())
}
