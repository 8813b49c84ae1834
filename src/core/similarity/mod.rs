//! # Similarity Module
//!
//! Loads two image files and scores how alike they are.
//!
//! ## Example
//! ```rust,ignore
//! use figmaqml_tools::core::similarity::{compare_files, Ssim};
//!
//! let score = compare_files("a.png".as_ref(), "b.png".as_ref(), &Ssim::new())?;
//! println!("{score:?}");
//! ```

pub mod decode;
mod ssim;
mod traits;

pub use decode::ImageDecoder;
pub use ssim::{Ssim, DEFAULT_TILE_SIZE};
pub use traits::SimilarityMetric;

use crate::error::SimilarityError;
use std::path::Path;

/// Fail with `No found: <path>` unless `path` exists
pub fn ensure_exists(path: &Path) -> Result<(), SimilarityError> {
    if path.exists() {
        Ok(())
    } else {
        Err(SimilarityError::NotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Score two image files with `metric`.
///
/// Both paths are checked for existence, first then second, before either
/// is decoded.
pub fn compare_files(
    first: &Path,
    second: &Path,
    metric: &dyn SimilarityMetric,
) -> Result<f64, SimilarityError> {
    ensure_exists(first)?;
    ensure_exists(second)?;

    let image_a = ImageDecoder::decode(first)?;
    let image_b = ImageDecoder::decode(second)?;
    tracing::debug!(
        metric = metric.name(),
        width = image_a.width(),
        height = image_a.height(),
        "images decoded"
    );

    metric.similarity(&image_a, &image_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;

    #[test]
    fn missing_first_path_reported_before_second() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        let error = compare_files(&first, &second, &Ssim::new()).unwrap_err();
        assert_eq!(error.to_string(), format!("No found: {}", first.display()));
    }

    #[test]
    fn missing_path_checked_before_decoding() {
        let dir = tempfile::tempdir().unwrap();
        let corrupt = dir.path().join("corrupt.png");
        fs::write(&corrupt, b"not an image").unwrap();
        let missing = dir.path().join("missing.png");

        let error = compare_files(&corrupt, &missing, &Ssim::new()).unwrap_err();
        assert!(matches!(error, SimilarityError::NotFound { path } if path == missing));
    }

    #[test]
    fn identical_files_score_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        RgbImage::from_fn(16, 16, |x, y| Rgb([(x * 16) as u8, (y * 16) as u8, 128]))
            .save(&path)
            .unwrap();

        let score = compare_files(&path, &path, &Ssim::new()).unwrap();
        assert_eq!(score, 1.0);
    }
}
