// Pastel transform
// Background-friendly variants of extracted colors

use crate::models::color::{ExtractedColor, Rgb};

const PASTEL_MAX_SATURATION: f64 = 0.3;
const PASTEL_MIN_LIGHTNESS: f64 = 0.75;
const SATURATION_FACTOR: f64 = 0.7;
const LIGHTNESS_STEP: f64 = 0.1;
const LIGHTNESS_CAP: f64 = 0.9;

/// Map a color to its pastel variant.
///
/// Colors that are already pastel (low saturation or very light) come back
/// unchanged, hex included. Everything else is desaturated, lightened and
/// gets a freshly computed hex; intensity and area are carried over.
pub fn to_pastel(color: &ExtractedColor) -> ExtractedColor {
    if color.saturation < PASTEL_MAX_SATURATION || color.lightness > PASTEL_MIN_LIGHTNESS {
        return color.clone();
    }

    let saturation = color.saturation * SATURATION_FACTOR;
    let lightness = (color.lightness + LIGHTNESS_STEP).min(LIGHTNESS_CAP);

    ExtractedColor {
        hue: color.hue,
        saturation,
        lightness,
        intensity: color.intensity,
        hex: hsl_to_hex(color.hue, saturation, lightness),
        area: color.area,
    }
}

/// Six-sector HSL to RGB; `hue` is a fraction of a full turn, each channel rounded.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let saturation = saturation.clamp(0.0, 1.0);
    let lightness = lightness.clamp(0.0, 1.0);

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue.rem_euclid(1.0) * 360.0 / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let channel = |value: f64| -> u8 { ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8 };
    Rgb::new(channel(r), channel(g), channel(b))
}

/// `#rrggbb` for the given HSL triple
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    hsl_to_rgb(hue, saturation, lightness).to_hex()
}
