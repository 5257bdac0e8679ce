//! Logo acquisition: download raw bytes, then decode to RGBA8 pixels.

pub mod fetcher;

pub use fetcher::HttpLogoFetcher;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageFetchError {
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("fetching {url} failed with HTTP status {status}")]
    Status { url: String, status: u16 },
    #[error("failed reading logo body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },
    #[error("logo at {url} exceeds {limit} bytes (got at least {size})")]
    TooLarge { url: String, size: usize, limit: usize },
}

#[derive(Debug, Error)]
pub enum ImageDecodeError {
    #[error("unsupported or corrupt image data: {0}")]
    Format(#[from] image::ImageError),
    #[error("image has no pixels ({width}x{height})")]
    Empty { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error(transparent)]
    Fetch(#[from] ImageFetchError),
    #[error(transparent)]
    Decode(#[from] ImageDecodeError),
}

/// Where logo bytes come from
#[cfg_attr(test, mockall::automock)]
pub trait LogoSource {
    fn fetch_logo(&self, url: &str) -> Result<Vec<u8>, ImageFetchError>;
}

/// Uncompressed RGBA8 pixels, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode any supported raster format into RGBA8
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ImageDecodeError> {
    let decoded = image::load_from_memory(bytes)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageDecodeError::Empty { width, height });
    }

    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}

/// Fetch and decode the logo, using `default_logo_url` when the event has none
pub fn fetch_logo_pixels<S: LogoSource + ?Sized>(
    source: &S,
    logo_url: Option<&str>,
    default_logo_url: &str,
) -> Result<DecodedImage, ImageError> {
    let url = logo_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(default_logo_url);

    let bytes = source.fetch_logo(url)?;
    let decoded = decode_image(&bytes)?;
    Ok(decoded)
}
