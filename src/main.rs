// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! monkey - token dumper and REPL for the Monkey programming language
//!
//! This is the main entry point for the monkey CLI/REPL.
//!
//! ## Features
//!
//! - Interactive REPL with syntax highlighting and history
//! - Token dumps of files and inline code

mod dump;
mod error;
mod repl;

use clap::Parser;
use error::{CliError, Result};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "monkey",
    about = "Tokenize Monkey source code",
    version,
    author = "Pegasus Heavy Industries"
)]
struct Cli {
    /// Monkey file to tokenize
    file: Option<PathBuf>,

    /// Tokenize code from the command line
    #[arg(short = 'e', long = "eval", conflicts_with = "file")]
    eval: Option<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(long)]
    verbose: bool,
}

/// Main entry point - uses tokio runtime for async file reads.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let color = !cli.no_color;

    let outcome = if let Some(code) = &cli.eval {
        run_eval(code, color)
    } else if let Some(path) = &cli.file {
        run_file(path, color).await
    } else {
        run_repl(color)
    };

    match outcome {
        Ok(code) => code,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging; `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default = if verbose { "monkey=debug" } else { "monkey=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Start the interactive REPL
fn run_repl(color: bool) -> Result<ExitCode> {
    let mut repl = repl::Repl::new(color)?;
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

/// Tokenize a Monkey file.
async fn run_file(path: &Path, color: bool) -> Result<ExitCode> {
    tracing::debug!(path = %path.display(), "reading source file");

    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CliError::io(path, e))?;

    dump_source(&source, color)
}

/// Tokenize Monkey code from the command line.
fn run_eval(code: &str, color: bool) -> Result<ExitCode> {
    dump_source(code, color)
}

/// Print every token, then fail if any character was illegal.
fn dump_source(source: &str, color: bool) -> Result<ExitCode> {
    let mut stdout = std::io::stdout().lock();
    let summary = dump::dump_tokens(source, &mut stdout, color)?;

    if !summary.is_clean() {
        for token in &summary.illegal {
            tracing::warn!(offset = token.span.start, text = token.text, "illegal character");
        }
        eprintln!(
            "{}: {} illegal character(s) in input",
            "Error".red().bold(),
            summary.illegal.len()
        );
    }

    Ok(summary.exit_code())
}

/// Print a formatted error message
fn print_error(error: &CliError) {
    eprintln!("{}: {}", "Error".red().bold(), error);
}

fn print_version() {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}: {}", "Monkey".bright_cyan().bold(), version.yellow());
    println!("{}: {}", "Rust".dimmed(), env!("CARGO_PKG_RUST_VERSION"));
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_file_and_flags() {
        let cli = Cli::try_parse_from(["monkey", "prog.mk", "--no-color", "--verbose"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("prog.mk")));
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(cli.eval.is_none());
    }

    #[test]
    fn test_cli_eval_conflicts_with_file() {
        assert!(Cli::try_parse_from(["monkey", "-e", "1 + 2"]).is_ok());
        assert!(Cli::try_parse_from(["monkey", "prog.mk", "-e", "1"]).is_err());
    }
}
