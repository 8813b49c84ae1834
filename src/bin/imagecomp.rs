//! # imagecomp
//!
//! Prints the structural similarity of two images.
//!
//! ## Usage
//! ```bash
//! imagecomp expected.png actual.png
//! imagecomp expected.png actual.png --tile-size 11 --parallel
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    figmaqml_tools::cli::imagecomp::main()
}
