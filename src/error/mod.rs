//! # Error Module
//!
//! Error types for the scanner and the similarity reporter.
//!
//! ## Design Principles
//! - **Never panic** on user input - return errors instead
//! - **Include context** - paths, sizes, what went wrong
//! - **Exact wording** where scripts depend on it (`No found: <path>`)

use std::path::PathBuf;
use thiserror::Error;

/// Top-level tool error
#[derive(Error, Debug)]
pub enum ToolError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors that occur while scanning a source file for identifiers
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Source file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while loading or comparing images
#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("No found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to decode image {path}: {reason}")]
    DecodeError { path: PathBuf, reason: String },

    #[error("Failed to open image file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The images do not have the same resolution: {left_width}x{left_height} vs {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("The images have different color channels: {left} vs {right}")]
    ChannelMismatch { left: u8, right: u8 },

    #[error("Tile size {tile_size} does not fit in a {width}x{height} image")]
    TileTooLarge {
        tile_size: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid tile size: {0} (must be at least 1)")]
    InvalidTileSize(u32),
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, ToolError>;
