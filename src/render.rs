// render.rs - Encode engine state into CSS-facing values
//
// The canvas and the DOM consume everything as CSS strings: mote fill and
// glow colors, hex backgrounds, transform functions.

use crate::motion::Rgb;

/// Glow color painted behind every mote
pub const MOTE_GLOW: &str = "rgba(255, 200, 120, 0.35)";

/// Glow blur radius (px)
pub const MOTE_GLOW_BLUR: f64 = 6.0;

/// Warm dust fill, alpha taken from the mote's own opacity
pub fn mote_fill(alpha: f32) -> String {
    format!("rgba(255, 230, 200, {alpha})")
}

/// #rrggbb form for backgrounds
pub fn background(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// translateY transform for the scroll lift
pub fn translate_y(px: f32) -> String {
    format!("translateY({px}px)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::BACKDROP;

    #[test]
    fn mote_fill_carries_the_alpha() {
        assert_eq!(mote_fill(0.35), "rgba(255, 230, 200, 0.35)");
        assert_eq!(mote_fill(0.5), "rgba(255, 230, 200, 0.5)");
    }

    #[test]
    fn background_is_lowercase_hex() {
        assert_eq!(background(Rgb::new(0x0b, 0x10, 0x20)), "#0b1020");
        assert_eq!(background(Rgb::new(0x21, 0x1a, 0x35)), "#211a35");
        assert_eq!(background(Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(background(Rgb::new(255, 255, 255)), "#ffffff");
    }

    #[test]
    fn backdrop_stops_render_to_the_site_palette() {
        assert_eq!(background(BACKDROP.map(0.0)), "#0b1020");
        assert_eq!(background(BACKDROP.map(0.5)), "#1a1330");
        assert_eq!(background(BACKDROP.map(1.0)), "#211a35");
    }

    #[test]
    fn translate_y_prints_whole_and_fractional_px() {
        assert_eq!(translate_y(0.0), "translateY(0px)");
        assert_eq!(translate_y(-100.0), "translateY(-100px)");
        assert_eq!(translate_y(-62.5), "translateY(-62.5px)");
    }
}
