//! `imagecomp` - print the SSIM score of two images.

use crate::core::similarity::{compare_files, Ssim, DEFAULT_TILE_SIZE};
use crate::error::{Result, ToolError};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// Hint printed when the tool is run without arguments
pub const USAGE_HINT: &str = "<image1> <image2>";

/// Compare two images and print their structural similarity
#[derive(Parser, Debug)]
#[command(name = "imagecomp")]
#[command(author, version, about, long_about = None)]
pub struct ImageCompArgs {
    /// First image
    pub image1: Option<PathBuf>,

    /// Second image
    pub image2: Option<PathBuf>,

    /// Edge length of the square SSIM window
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Spread the comparison over all cores
    #[arg(long)]
    pub parallel: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl ImageCompArgs {
    fn metric(&self) -> Ssim {
        Ssim::new()
            .with_tile_size(self.tile_size)
            .parallel(self.parallel)
    }
}

/// Parse arguments from the process and run
pub fn main() -> std::process::ExitCode {
    let args = ImageCompArgs::parse();
    crate::init_tracing(super::log_level(args.verbose));
    super::exit_with(run(&args, &mut io::stdout().lock()))
}

/// Compare the two images and write the score to `out`.
///
/// With no image arguments only the usage hint is written.
pub fn run<W: Write>(args: &ImageCompArgs, out: &mut W) -> Result<()> {
    let (first, second) = match (&args.image1, &args.image2) {
        (None, _) => {
            writeln!(out, "{}", USAGE_HINT)?;
            return Ok(());
        }
        (Some(_), None) => {
            return Err(ToolError::Usage(format!("imagecomp {}", USAGE_HINT)));
        }
        (Some(first), Some(second)) => (first, second),
    };

    let metric = args.metric();
    let score = compare_files(first, second, &metric)?;
    tracing::info!(
        first = %first.display(),
        second = %second.display(),
        score,
        "comparison complete"
    );

    // Debug formatting keeps the decimal point: `1.0`, not `1`
    writeln!(out, "{:?}", score)?;
    out.flush()?;
    Ok(())
}
