//! `find-types` - print the quoted type names that open a brace.

use crate::core::scanner::{IdentifierScanner, IdentifierSet, DEFAULT_SOURCE_PATH};
use crate::error::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// List unique "Name{" identifiers found in a source file
#[derive(Parser, Debug)]
#[command(name = "find-types")]
#[command(author, version, about, long_about = None)]
pub struct FindTypesArgs {
    /// Source file to scan
    #[arg(default_value = DEFAULT_SOURCE_PATH)]
    pub path: PathBuf,

    /// Print names in lexical order instead of set order
    #[arg(long)]
    pub sorted: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse arguments from the process and run
pub fn main() -> std::process::ExitCode {
    let args = FindTypesArgs::parse();
    crate::init_tracing(super::log_level(args.verbose));
    super::exit_with(run(&args))
}

/// Scan the file and print one identifier per line to stdout
pub fn run(args: &FindTypesArgs) -> Result<()> {
    let names = IdentifierScanner::new().scan_file(&args.path)?;
    tracing::info!(path = %args.path.display(), count = names.len(), "identifiers collected");

    let stdout = io::stdout();
    print_names(&mut stdout.lock(), &names, args.sorted)?;
    Ok(())
}

/// Write each identifier on its own line
pub fn print_names<W: Write>(out: &mut W, names: &IdentifierSet, sorted: bool) -> io::Result<()> {
    if sorted {
        for name in names.sorted() {
            writeln!(out, "{}", name)?;
        }
    } else {
        for name in names {
            writeln!(out, "{}", name)?;
        }
    }
    out.flush()
}
