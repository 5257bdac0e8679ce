// Property-based tests for palette extraction and the pastel transform

use proptest::prelude::*;

use event_palette::models::color::{ExtractedColor, Rgb};
use event_palette::services::palette::{
    accepts_pixel, extract_palette, hsl_to_rgb, to_pastel, PaletteOptions,
};

fn extracted_color() -> impl Strategy<Value = ExtractedColor> {
    (0.0..1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(
        |(hue, saturation, lightness, intensity, area)| ExtractedColor {
            hue,
            saturation,
            lightness,
            intensity,
            hex: "#123456".to_string(),
            area,
        },
    )
}

proptest! {
    /// Property: already-pastel colors come back exactly as given
    #[test]
    fn prop_pastel_is_identity_on_pastel_input(color in extracted_color()) {
        prop_assume!(color.saturation < 0.3 || color.lightness > 0.75);
        prop_assert_eq!(to_pastel(&color), color);
    }

    /// Property: transformed colors are scaled by exactly 0.7 and capped at 0.9 lightness
    #[test]
    fn prop_pastel_bounds(color in extracted_color()) {
        prop_assume!(color.saturation >= 0.3 && color.lightness <= 0.75);
        let pastel = to_pastel(&color);

        prop_assert_eq!(pastel.saturation, color.saturation * 0.7);
        prop_assert!(pastel.lightness <= 0.9);
        prop_assert!(pastel.lightness > color.lightness);
        prop_assert_eq!(pastel.hue, color.hue);
        prop_assert_eq!(pastel.intensity, color.intensity);
        prop_assert_eq!(pastel.hex.len(), 7);
        prop_assert!(pastel.hex.starts_with('#'));
    }

    /// Property: HSL to RGB agrees with RGB to HSL for every 8-bit color
    #[test]
    fn prop_hsl_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb::new(r, g, b);
        let (h, s, l) = rgb.to_hsl();
        prop_assert_eq!(hsl_to_rgb(h, s, l), rgb);
    }

    /// Property: anything at or below the alpha threshold is rejected
    #[test]
    fn prop_translucent_pixels_rejected(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in 0..=200u8) {
        prop_assert!(!accepts_pixel(r, g, b, a));
    }

    /// Property: extraction output is non-increasing in intensity and its areas sum to one
    #[test]
    fn prop_palette_sorted_by_intensity(
        pixels in prop::collection::vec(any::<[u8; 4]>(), 1..400)
    ) {
        let width = pixels.len() as u32;
        let buffer: Vec<u8> = pixels.iter().flatten().copied().collect();
        let colors = extract_palette(&buffer, width, 1, &PaletteOptions::default()).unwrap();

        for pair in colors.windows(2) {
            prop_assert!(pair[0].intensity >= pair[1].intensity);
        }

        if !colors.is_empty() {
            let total: f64 = colors.iter().map(|c| c.area).sum();
            prop_assert!((total - 1.0).abs() < 1e-9);
        }

        let accepted = pixels.iter().any(|p| accepts_pixel(p[0], p[1], p[2], p[3]));
        prop_assert_eq!(colors.is_empty(), !accepted);
    }
}
