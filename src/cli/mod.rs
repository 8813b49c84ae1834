//! # CLI Module
//!
//! Argument parsing and terminal output for the two binaries.
//!
//! ## Usage
//! ```bash
//! # List quoted type names in src/figmaparser.cpp
//! find-types
//!
//! # Compare two screenshots
//! imagecomp expected.png actual.png
//! ```

pub mod find_types;
pub mod imagecomp;

use crate::error::Result;
use console::{style, Term};
use std::process::ExitCode;

/// Log level used unless `RUST_LOG` says otherwise
pub(crate) fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Map a command result to the process exit status.
///
/// Errors are written to stderr with their display text.
pub fn exit_with(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "command failed");
            Term::stderr()
                .write_line(&format!("{}", style(&error).for_stderr().red()))
                .ok();
            ExitCode::FAILURE
        }
    }
}
