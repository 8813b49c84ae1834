//! # find-types
//!
//! Lists the quoted type names that open a brace in a source file.
//!
//! ## Usage
//! ```bash
//! find-types                      # scans src/figmaparser.cpp
//! find-types path/to/file.cpp --sorted
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    figmaqml_tools::cli::find_types::main()
}
