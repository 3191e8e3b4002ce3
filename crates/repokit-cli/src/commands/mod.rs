//! Command dispatch and handler modules.

mod catalog;
mod license;
mod migrate;
mod pom;
mod publish;

use std::path::PathBuf;

use miette::Result;

use repokit_core::manifest::MANIFEST_FILE;
use repokit_util::errors::RepokitError;
use repokit_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::PublishDocs => publish::exec(),
        Command::LicenseReport { output } => license::exec(output.as_deref()),
        Command::MigrateImports { apply, extensions } => migrate::exec(apply, extensions),
        Command::Catalog { format } => catalog::exec(&format),
        Command::Pom { output } => pom::exec(output.as_deref()),
    }
}

/// Walk up from the current directory to the nearest directory holding a
/// `repokit.toml`.
fn project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(RepokitError::Io)?;
    let root = find_ancestor_with(&cwd, MANIFEST_FILE).ok_or_else(|| RepokitError::Manifest {
        message: "Could not find repokit.toml in this directory or any parent".to_string(),
    })?;
    Ok(root)
}
