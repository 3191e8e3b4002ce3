//! CLI argument definitions for repokit.
//!
//! Uses `clap` derive macros to define the full command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "repokit",
    version,
    about = "Shared release chores for a family of JVM repositories",
    long_about = "Repokit bundles the release chores shared by a family of JVM repositories: \
                  publishing generated documentation to the GitHub Pages site, rendering \
                  dependency reports from the version catalog, and migrating import statements \
                  across the source tree."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Publish generated documentation to the GitHub Pages branch
    PublishDocs,

    /// Render the dependency license report from the version catalog
    LicenseReport {
        /// Write the report to this file instead of the configured location
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite legacy import statements to their configured replacements
    MigrateImports {
        /// Rewrite matching files instead of only reporting what would change
        #[arg(long)]
        apply: bool,

        /// File extensions to visit, overriding the manifest (repeatable)
        #[arg(long = "ext", value_name = "EXT")]
        extensions: Vec<String>,
    },

    /// Print the resolved version catalog
    Catalog {
        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Write a pom.xml describing the first-level dependencies
    Pom {
        /// Write the pom to this file instead of pom.xml in the project root
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
