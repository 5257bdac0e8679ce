//! Logo palette extraction.
//!
//! Pixels that are near-transparent or nearly grey are rejected before
//! clustering so that brand colors surface instead of backgrounds and
//! anti-aliasing fringes. The accepted samples are clustered with k-means in
//! Lab space. The result is always ordered by intensity, most intense first.

mod pastel;
mod quantize;

pub use pastel::{hsl_to_hex, hsl_to_rgb, to_pastel};

use thiserror::Error;

use crate::models::color::ExtractedColor;

/// Pixels with alpha at or below this value are rejected.
pub const ALPHA_THRESHOLD: u8 = 200;

/// Pixels whose pairwise channel differences are all below this are grey.
pub const GREY_TOLERANCE: u8 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct PaletteOptions {
    /// Upper bound on sampled pixels.
    pub sample_limit: usize,
    /// Number of k-means clusters, capped by the distinct colors sampled.
    pub max_colors: usize,
    pub max_iterations: usize,
    pub convergence: f32,
    /// Fixed k-means seed so the same logo always yields the same palette.
    pub seed: u64,
    pub hue_distance: f64,
    pub saturation_distance: f64,
    pub lightness_distance: f64,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            sample_limit: 64_000,
            max_colors: 8,
            max_iterations: 20,
            convergence: 1e-4,
            seed: 0,
            hue_distance: 1.0 / 12.0,
            saturation_distance: 0.2,
            lightness_distance: 0.2,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("pixel buffer holds {actual} bytes but {width}x{height} RGBA needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Pixel acceptance predicate: opaque enough and not nearly grey
pub fn accepts_pixel(r: u8, g: u8, b: u8, a: u8) -> bool {
    if a <= ALPHA_THRESHOLD {
        return false;
    }

    let nearly_grey = r.abs_diff(g) < GREY_TOLERANCE
        && r.abs_diff(b) < GREY_TOLERANCE
        && g.abs_diff(b) < GREY_TOLERANCE;

    !nearly_grey
}

/// Extract representative colors from an RGBA8 buffer, most intense first.
///
/// An empty result is valid (e.g. a fully transparent or greyscale logo).
pub fn extract_palette(
    pixels: &[u8],
    width: u32,
    height: u32,
    options: &PaletteOptions,
) -> Result<Vec<ExtractedColor>, PaletteError> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(PaletteError::BufferSize {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let mut colors = quantize::cluster(pixels, options, accepts_pixel);
    sort_by_intensity(&mut colors);

    log::debug!(
        "Extracted {} colors from {}x{} image",
        colors.len(),
        width,
        height
    );
    Ok(colors)
}

fn sort_by_intensity(colors: &mut [ExtractedColor]) {
    colors.sort_by(|a, b| {
        b.intensity
            .total_cmp(&a.intensity)
            .then_with(|| b.area.total_cmp(&a.area))
            .then_with(|| a.hex.cmp(&b.hex))
    });
}
