// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Commands:
// - follow: list every local file reachable from the given documents
// - links:  show the links found in a single document
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "link-follower",
    version = "0.1.0",
    about = "Follow local links between markdown documents",
    long_about = "link-follower reads markdown documents, follows every link that points at a \
                  local file or directory, and prints each file it reaches exactly once."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every local file transitively linked from the given documents
    ///
    /// Example: link-follower follow README.md --alias https://github.com/me/repo/blob/main/=./
    Follow {
        /// Documents to start from (a directory stands for its README.md or its files)
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Rewrite a destination prefix before resolving it (repeatable)
        ///
        /// Applied after the rules from --config; the first matching rule wins
        #[arg(long = "alias", value_name = "FROM=TO")]
        aliases: Vec<String>,

        /// TOML file with [[alias]] tables (from = "...", to = "...")
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Output results as a JSON array instead of one path per line
        #[arg(long)]
        json: bool,
    },

    /// Print the links found in one document, in document order
    ///
    /// Example: link-follower links docs/guide.md --json
    Links {
        /// Markdown document to read
        file: PathBuf,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}
