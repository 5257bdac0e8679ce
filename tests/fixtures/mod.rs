// Test fixtures - reusable test data
// Provides source rows, logo images and stub collaborators for the pipeline

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::Cursor;

use anyhow::{anyhow, Result};
use image::{ImageFormat, Rgba, RgbaImage};

use event_palette::models::event::{RawEventFields, RawEventRow};
use event_palette::services::logo::{ImageFetchError, LogoSource};
use event_palette::services::source::RecordStore;

pub const DEFAULT_LOGO: &str = "https://cdn.test/default-logo.png";
pub const DEFAULT_PHOTO: &str = "https://cdn.test/default-photo.jpg";

/// Sample logo images, PNG-encoded
pub mod logos {
    use super::*;

    pub fn encode(img: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    pub fn solid(color: [u8; 4]) -> Vec<u8> {
        encode(&RgbaImage::from_pixel(8, 8, Rgba(color)))
    }

    /// White card with a thin grey frame and a two-tone mark:
    /// a large orange block and a small teal stripe.
    pub fn two_tone_mark() -> Vec<u8> {
        let img = RgbaImage::from_fn(20, 20, |x, y| {
            if x == 0 || y == 0 || x == 19 || y == 19 {
                Rgba([90, 92, 95, 255])
            } else if y < 4 {
                Rgba([255, 255, 255, 255])
            } else if y < 16 {
                Rgba([240, 120, 20, 255])
            } else {
                Rgba([0, 150, 140, 255])
            }
        });
        encode(&img)
    }

    /// Fully transparent except for semi-transparent red
    pub fn ghost() -> Vec<u8> {
        encode(&RgbaImage::from_fn(8, 8, |x, _| {
            if x < 4 {
                Rgba([220, 30, 30, 120])
            } else {
                Rgba([0, 0, 0, 0])
            }
        }))
    }
}

/// Sample source rows
pub mod rows {
    use super::*;

    pub fn row(id: &str, name: &str, status: &str, logo: Option<&str>) -> RawEventRow {
        RawEventRow {
            id: id.to_string(),
            fields: RawEventFields {
                name: Some(name.to_string()),
                status: Some(status.to_string()),
                start_date: Some("2024-06-01".to_string()),
                end_date: Some("2024-06-02".to_string()),
                logo: logo.map(str::to_string),
                photos: Some(r#"["https://cdn.test/a.jpg","https://cdn.test/b.jpg"]"#.to_string()),
                ..RawEventFields::default()
            },
        }
    }
}

/// Store that returns fixed rows, or fails every time
pub struct StubStore {
    rows: Option<Vec<RawEventRow>>,
}

impl StubStore {
    pub fn with_rows(rows: Vec<RawEventRow>) -> Self {
        Self { rows: Some(rows) }
    }

    pub fn failing() -> Self {
        Self { rows: None }
    }
}

impl RecordStore for StubStore {
    fn list_rows(&self) -> Result<Vec<RawEventRow>> {
        self.rows
            .clone()
            .ok_or_else(|| anyhow!("table listing unavailable"))
    }
}

/// Logo source backed by a URL map; unknown URLs answer HTTP 404
#[derive(Default)]
pub struct StubLogos {
    images: HashMap<String, Vec<u8>>,
}

impl StubLogos {
    pub fn with(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.images.insert(url.to_string(), bytes);
        self
    }
}

impl LogoSource for StubLogos {
    fn fetch_logo(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        self.images
            .get(url)
            .cloned()
            .ok_or_else(|| ImageFetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}
