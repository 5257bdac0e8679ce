// Color module
// RGB/HSL value types shared by palette extraction and the override layer

use palette::{Hsl, IntoColor, Srgb};
use serde::{Deserialize, Serialize};

/// 8-bit sRGB color without alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (the `#` is optional).
    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.is_ascii() {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb::new(r, g, b))
            }
            3 => {
                let expand = |digit: &str| -> Option<u8> {
                    let value = u8::from_str_radix(digit, 16).ok()?;
                    Some(value * 17)
                };
                Some(Rgb::new(
                    expand(&hex[0..1])?,
                    expand(&hex[1..2])?,
                    expand(&hex[2..3])?,
                ))
            }
            _ => None,
        }
    }

    /// Lowercase, zero-padded `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL with every component in `[0, 1]`; hue is a fraction of a full turn.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let hsl: Hsl = Srgb::new(self.r, self.g, self.b)
            .into_format::<f32>()
            .into_color();
        let hue = hsl.hue.into_positive_degrees() as f64 / 360.0;
        (
            hue.rem_euclid(1.0),
            hsl.saturation as f64,
            hsl.lightness as f64,
        )
    }
}

/// A representative color produced by palette extraction.
///
/// `intensity` is the dominance score used for ordering (coverage times
/// colorfulness) and `area` is the fraction of accepted pixels the color covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub intensity: f64,
    pub hex: String,
    pub area: f64,
}

impl ExtractedColor {
    pub fn from_rgb(rgb: Rgb, area: f64) -> Self {
        let (hue, saturation, lightness) = rgb.to_hsl();
        let colorfulness = saturation * (1.0 - (2.0 * lightness - 1.0).abs());
        Self {
            hue,
            saturation,
            lightness,
            intensity: area * colorfulness,
            hex: rgb.to_hex(),
            area,
        }
    }
}

/// Accepts `#RRGGBB` and `#RGB` with a mandatory leading `#`.
pub fn is_valid_hex_color(value: &str) -> bool {
    value.starts_with('#')
        && (value.len() == 7 || value.len() == 4)
        && Rgb::from_hex_str(value).is_some()
}
