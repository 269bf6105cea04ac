// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the monkey CLI

use rustyline::error::ReadlineError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while acquiring source text or driving the REPL
#[derive(Debug, Error)]
pub enum CliError {
    /// Source file could not be read
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the token dump failed
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),

    /// Line editor failure
    #[error("REPL error: {0}")]
    Readline(#[from] ReadlineError),
}

impl CliError {
    /// Wraps an I/O error raised while reading `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}
