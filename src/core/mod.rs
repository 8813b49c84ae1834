//! # Core Module
//!
//! Terminal-agnostic engines behind the two tools.
//!
//! ## Modules
//! - `scanner` - Collects quoted identifiers that open a brace
//! - `similarity` - Decodes images and scores their structural similarity

pub mod scanner;
pub mod similarity;

// Re-export commonly used types
pub use scanner::{IdentifierScanner, IdentifierSet};
pub use similarity::{SimilarityMetric, Ssim};
