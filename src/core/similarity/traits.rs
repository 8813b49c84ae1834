//! Trait definitions for image similarity metrics.

use crate::error::SimilarityError;
use image::DynamicImage;

/// A metric scoring how alike two decoded images are
///
/// Higher scores mean more similar. Identical inputs score the metric's
/// maximum (1.0 for SSIM).
pub trait SimilarityMetric: Send + Sync {
    /// Compare two images
    fn similarity(&self, a: &DynamicImage, b: &DynamicImage) -> Result<f64, SimilarityError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}
