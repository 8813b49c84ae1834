//! Structural similarity (SSIM) over non-overlapping square tiles.
//!
//! The image is cropped to whole tiles (`width / tile * tile` by
//! `height / tile * tile`). Each `tile × tile` block of each channel gets a
//! local SSIM value; the score is their mean. Block sums come from integral
//! images.

use super::traits::SimilarityMetric;
use crate::error::SimilarityError;
use image::DynamicImage;
use rayon::prelude::*;

/// Dynamic range of 8-bit samples
const PIXEL_RANGE: f64 = 255.0;
const K1: f64 = 0.01;
const K2: f64 = 0.03;
const C1: f64 = (K1 * PIXEL_RANGE) * (K1 * PIXEL_RANGE);
const C2: f64 = (K2 * PIXEL_RANGE) * (K2 * PIXEL_RANGE);

/// Default tile edge length
pub const DEFAULT_TILE_SIZE: u32 = 7;

/// SSIM metric configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ssim {
    tile_size: u32,
    parallel: bool,
}

impl Default for Ssim {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            parallel: false,
        }
    }
}

impl Ssim {
    /// 7×7 tiles, sequential evaluation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tile edge length
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size;
        self
    }

    /// Evaluate tile rows on the rayon pool
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn validate(&self, a: &DynamicImage, b: &DynamicImage) -> Result<(), SimilarityError> {
        if self.tile_size == 0 {
            return Err(SimilarityError::InvalidTileSize(self.tile_size));
        }

        let (width, height) = (a.width(), a.height());
        if (width, height) != (b.width(), b.height()) {
            return Err(SimilarityError::DimensionMismatch {
                left_width: width,
                left_height: height,
                right_width: b.width(),
                right_height: b.height(),
            });
        }

        let left = a.color().channel_count();
        let right = b.color().channel_count();
        if left != right {
            return Err(SimilarityError::ChannelMismatch { left, right });
        }

        if self.tile_size > width || self.tile_size > height {
            return Err(SimilarityError::TileTooLarge {
                tile_size: self.tile_size,
                width,
                height,
            });
        }

        Ok(())
    }

    /// Mean SSIM of one channel, given interleaved samples
    fn channel_score(&self, a: &Samples, b: &Samples, channel: usize) -> f64 {
        let sums = WindowSums::build(a, b, channel);
        let tile = self.tile_size as usize;
        // Trailing pixels that do not fill a whole tile are ignored
        let rows = a.height / tile;
        let cols = a.width / tile;

        let row_total = |row: usize| -> f64 {
            (0..cols)
                .map(|col| {
                    let window = sums.window(col * tile, row * tile, tile);
                    local_ssim(window, (tile * tile) as f64)
                })
                .sum()
        };

        let total: f64 = if self.parallel {
            (0..rows).into_par_iter().map(row_total).sum()
        } else {
            (0..rows).map(row_total).sum()
        };

        total / (rows * cols) as f64
    }
}

impl SimilarityMetric for Ssim {
    fn similarity(&self, a: &DynamicImage, b: &DynamicImage) -> Result<f64, SimilarityError> {
        self.validate(a, b)?;

        let a = Samples::from_image(a);
        let b = Samples::from_image(b);

        let total: f64 = (0..a.channels)
            .map(|channel| self.channel_score(&a, &b, channel))
            .sum();
        let score = total / a.channels as f64;

        tracing::debug!(
            tile_size = self.tile_size,
            parallel = self.parallel,
            channels = a.channels,
            score,
            "ssim computed"
        );
        Ok(score)
    }

    fn name(&self) -> &'static str {
        "SSIM"
    }
}

/// Interleaved 8-bit samples of an image
struct Samples {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Samples {
    /// Normalise to 8 bits per channel, keeping the channel layout
    fn from_image(image: &DynamicImage) -> Self {
        let channels = image.color().channel_count() as usize;
        let data = match channels {
            1 => image.to_luma8().into_raw(),
            2 => image.to_luma_alpha8().into_raw(),
            3 => image.to_rgb8().into_raw(),
            _ => image.to_rgba8().into_raw(),
        };
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            channels: channels.min(4),
            data,
        }
    }

    fn sample(&self, x: usize, y: usize, channel: usize) -> u64 {
        self.data[(y * self.width + x) * self.channels + channel] as u64
    }
}

/// Raw sums over one window
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Moments {
    a: u64,
    b: u64,
    aa: u64,
    bb: u64,
    ab: u64,
}

impl Moments {
    fn add(self, o: Self) -> Self {
        Self {
            a: self.a + o.a,
            b: self.b + o.b,
            aa: self.aa + o.aa,
            bb: self.bb + o.bb,
            ab: self.ab + o.ab,
        }
    }

    fn sub(self, o: Self) -> Self {
        Self {
            a: self.a - o.a,
            b: self.b - o.b,
            aa: self.aa - o.aa,
            bb: self.bb - o.bb,
            ab: self.ab - o.ab,
        }
    }
}

/// Integral images of the first and second moments of one channel
struct WindowSums {
    stride: usize,
    table: Vec<Moments>,
}

impl WindowSums {
    fn build(a: &Samples, b: &Samples, channel: usize) -> Self {
        let stride = a.width + 1;
        let mut table = vec![Moments::default(); stride * (a.height + 1)];

        for y in 0..a.height {
            let mut row = Moments::default();
            for x in 0..a.width {
                let pa = a.sample(x, y, channel);
                let pb = b.sample(x, y, channel);
                row = row.add(Moments {
                    a: pa,
                    b: pb,
                    aa: pa * pa,
                    bb: pb * pb,
                    ab: pa * pb,
                });
                table[(y + 1) * stride + x + 1] = table[y * stride + x + 1].add(row);
            }
        }

        Self { stride, table }
    }

    /// Sums over the `tile × tile` window whose top-left corner is (x, y)
    fn window(&self, x: usize, y: usize, tile: usize) -> Moments {
        let at = |x: usize, y: usize| self.table[y * self.stride + x];
        // Add before subtracting so the unsigned sums never underflow
        at(x + tile, y + tile)
            .add(at(x, y))
            .sub(at(x + tile, y))
            .sub(at(x, y + tile))
    }
}

fn local_ssim(m: Moments, n: f64) -> f64 {
    let mean_a = m.a as f64 / n;
    let mean_b = m.b as f64 / n;
    let var_a = m.aa as f64 / n - mean_a * mean_a;
    let var_b = m.bb as f64 / n - mean_b * mean_b;
    let covariance = m.ab as f64 / n - mean_a * mean_b;

    let numerator = (2.0 * mean_a * mean_b + C1) * (2.0 * covariance + C2);
    let denominator = (mean_a * mean_a + mean_b * mean_b + C1) * (var_a + var_b + C2);
    numerator / denominator
}
