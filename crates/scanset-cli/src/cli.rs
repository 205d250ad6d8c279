//! CLI argument definitions for scanset.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "scanset",
    version,
    about = "Find the libraries that depend on a set of reference libraries",
    long_about = "scanset reads a runtime dependency manifest and reports every library that \
                  transitively depends on one of the configured reference libraries, i.e. \
                  the assemblies worth scanning for registrable types."
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
    /// Create a Scanset.toml in the current directory
    Init {
        /// Reference library name (repeatable)
        #[arg(short, long = "reference", required = true)]
        references: Vec<String>,
    },

    /// List candidate libraries
    #[command(alias = "ls")]
    Candidates {
        /// Print JSON
        #[arg(long)]
        json: bool,
        /// Only list libraries of this kind (repeatable), e.g. project, package
        #[arg(short, long = "kind")]
        kinds: Vec<String>,
    },

    /// Explain why a library is a candidate
    Why {
        /// Library name (case-insensitive)
        name: String,
    },

    /// Summarize the classification of every library
    Report {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
