//! # FigmaQML Tools
//!
//! Small developer helpers used alongside the FigmaQML code base.
//!
//! ## Tools
//! - `find-types` - Lists the quoted type names that open a brace in a source file
//! - `imagecomp` - Reports the structural similarity (SSIM) of two images
//!
//! ## Architecture
//! - `core` - Scanning and similarity engines (no terminal I/O)
//! - `error` - Error types shared by both tools
//! - `cli` - Argument parsing and output for the binaries

pub mod cli;
pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{Result, ToolError};

/// Initialize tracing for the binaries
///
/// Logs go to stderr so stdout carries only tool output. `RUST_LOG` wins over
/// the `default_level` when set.
pub fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
