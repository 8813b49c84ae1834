//! Image decoding for the similarity reporter.
//!
//! Files named `.jpg`/`.jpeg` try zune-jpeg first. Everything else, and any
//! JPEG zune-jpeg rejects, goes through the image crate.

use crate::error::SimilarityError;
use image::{DynamicImage, ImageBuffer, Luma, Rgb, Rgba};
use std::fs;
use std::path::Path;
use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

/// Which decoder to try first, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Other,
}

impl ImageFormat {
    /// Only the extension is inspected; contents are sniffed later
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("jpg" | "jpeg") => Self::Jpeg,
            _ => Self::Other,
        }
    }
}

/// Decodes image files into `DynamicImage`
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode an image from a file path.
    ///
    /// JPEGs go through zune-jpeg first; if that fails, or for any other
    /// format, the image crate detects the format from the file contents.
    pub fn decode(path: &Path) -> Result<DynamicImage, SimilarityError> {
        match ImageFormat::from_path(path) {
            ImageFormat::Jpeg => Self::decode_jpeg(path).or_else(|e| {
                tracing::debug!(path = %path.display(), error = %e, "fast JPEG decode failed, falling back");
                Self::decode_fallback(path)
            }),
            ImageFormat::Other => Self::decode_fallback(path),
        }
    }

    fn decode_jpeg(path: &Path) -> Result<DynamicImage, SimilarityError> {
        let file_bytes = fs::read(path).map_err(|e| SimilarityError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Ask for RGB; grayscale and CMYK sources may still come back otherwise
        let options = DecoderOptions::new_fast().jpeg_set_out_colorspace(ColorSpace::RGB);
        let mut decoder = JpegDecoder::new_with_options(&file_bytes, options);

        let pixels = decoder.decode().map_err(|e| SimilarityError::DecodeError {
            path: path.to_path_buf(),
            reason: format!("zune-jpeg decode failed: {:?}", e),
        })?;

        let info = decoder.info().ok_or_else(|| SimilarityError::DecodeError {
            path: path.to_path_buf(),
            reason: "Failed to get image info".to_string(),
        })?;

        let width = info.width as u32;
        let height = info.height as u32;
        let buffer_error = |layout: &str| SimilarityError::DecodeError {
            path: path.to_path_buf(),
            reason: format!("Failed to create {} buffer", layout),
        };

        let image = match decoder.get_output_colorspace().unwrap_or(ColorSpace::RGB) {
            ColorSpace::RGB => {
                let buffer: ImageBuffer<Rgb<u8>, Vec<u8>> =
                    ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| buffer_error("RGB"))?;
                DynamicImage::ImageRgb8(buffer)
            }
            ColorSpace::RGBA => {
                let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
                    ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| buffer_error("RGBA"))?;
                DynamicImage::ImageRgba8(buffer)
            }
            ColorSpace::Luma => {
                let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
                    ImageBuffer::from_raw(width, height, pixels).ok_or_else(|| buffer_error("Luma"))?;
                DynamicImage::ImageLuma8(buffer)
            }
            // Layouts without a matching `DynamicImage` variant
            _ => return Self::decode_fallback(path),
        };

        Ok(image)
    }

    fn decode_fallback(path: &Path) -> Result<DynamicImage, SimilarityError> {
        let reader = image::ImageReader::open(path)
            .map_err(|e| SimilarityError::IoError {
                path: path.to_path_buf(),
                source: e,
            })?
            .with_guessed_format()
            .map_err(|e| SimilarityError::IoError {
                path: path.to_path_buf(),
                source: e,
            })?;

        reader.decode().map_err(|e| SimilarityError::DecodeError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
