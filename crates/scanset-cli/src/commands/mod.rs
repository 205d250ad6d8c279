//! Command dispatch and handler modules.

mod candidates;
mod init;
mod report;
mod why;

use std::path::PathBuf;

use scanset_util::errors::ScansetResult;

use scanset_core::MANIFEST_FILE;
use scanset_util::errors::ScansetError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> ScansetResult<()> {
    match cli.command {
        Command::Init { references } => init::exec(&references),
        Command::Candidates { json, kinds } => candidates::exec(json, kinds),
        Command::Why { name } => why::exec(&name),
        Command::Report { json } => report::exec(json),
    }
}

/// Locate the project root by walking up from the current directory.
fn project_root() -> ScansetResult<PathBuf> {
    let cwd = std::env::current_dir().map_err(ScansetError::Io)?;
    scanset_util::fs::find_ancestor_with(&cwd, MANIFEST_FILE).ok_or_else(|| {
        ScansetError::Manifest {
            message: format!("Could not find {MANIFEST_FILE} in this directory or any parent"),
        }
        .into()
    })
}
