// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (progress notices go to stderr)
// 3. Dispatch to the appropriate subcommand handler
// 4. Print results to stdout
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use link_follower::{extract_links, AliasRule, Aliases, Link, Traversal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Follow {
            files,
            aliases,
            config,
            json,
        } => handle_follow(&files, &aliases, config.as_deref(), json),
        Commands::Links { file, json } => handle_links(&file, json),
    }
}

// Stderr keeps stdout a clean list of paths that can be piped elsewhere
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_follower=info,warn"),
            1 => EnvFilter::new("link_follower=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// Config file rules first, then --alias flags in the order given
fn load_aliases(specs: &[String], config: Option<&Path>) -> Result<Aliases> {
    let mut aliases = match config {
        Some(path) => Aliases::load(path)
            .with_context(|| format!("loading alias config {}", path.display()))?,
        None => Aliases::default(),
    };

    let rules = specs
        .iter()
        .map(|spec| AliasRule::parse(spec))
        .collect::<Result<Vec<_>, _>>()?;
    aliases.extend(rules);

    Ok(aliases)
}

fn handle_follow(
    files: &[PathBuf],
    alias_specs: &[String],
    config: Option<&Path>,
    json: bool,
) -> Result<()> {
    let aliases = load_aliases(alias_specs, config)?;
    tracing::debug!("Using {} alias rule(s)", aliases.rules().len());

    let mut traversal = Traversal::new(aliases);
    if let Err(e) = traversal.follow(files) {
        tracing::warn!(
            "Discarding {} file(s) found before the error",
            traversal.results().len()
        );
        return Err(anyhow::Error::new(e).context("following local links"));
    }

    let results = traversal.into_results();
    if json {
        println!("{}", serde_json::to_string_pretty(&json_paths(&results))?);
    } else {
        for path in &results {
            println!("{}", path.display());
        }
    }
    Ok(())
}

// JSON strings must be UTF-8, so odd bytes in a path are replaced
fn json_paths(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.to_string_lossy().into_owned())
        .collect()
}

fn handle_links(file: &Path, json: bool) -> Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let links = extract_links(&String::from_utf8_lossy(&bytes));

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else {
        print_table(&links);
    }
    Ok(())
}

// Prints links as a human-readable table in the terminal
fn print_table(links: &[Link]) {
    println!("{:<60} {:<40}", "DESTINATION", "LABEL");
    println!("{}", "=".repeat(100));

    for link in links {
        // Truncate destination if too long for display
        let destination = if link.destination.chars().count() > 57 {
            let head: String = link.destination.chars().take(57).collect();
            format!("{}...", head)
        } else {
            link.destination.clone()
        };

        println!("{:<60} {:<40}", destination, link.label);
    }

    println!();
    println!("📋 Total: {}", links.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_paths_keeps_utf8_paths() {
        let paths = vec![PathBuf::from("/docs/a.md"), PathBuf::from("/docs/b.md")];
        assert_eq!(json_paths(&paths), vec!["/docs/a.md", "/docs/b.md"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_json_paths_replaces_invalid_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"/docs/bad\xff.md"));
        let json = serde_json::to_string(&json_paths(&[path])).unwrap();
        assert_eq!(json, "[\"/docs/bad\u{fffd}.md\"]");
    }
}
