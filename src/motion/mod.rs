// motion/ - Scroll-linked motion
//
// Pure functions from scroll progress to presentation values.
// No state, no allocation - just math.

mod color;
mod piecewise;

pub use color::{ColorRamp, Rgb};
pub use piecewise::PiecewiseLinear;

/// Hero copy vertical lift (px), spent over the first half of the page
pub const HERO_LIFT: PiecewiseLinear = PiecewiseLinear::new(&[(0.0, 0.0), (0.5, -100.0)]);

/// Narrative backdrop color, night hues drifting toward the first warmth
pub const BACKDROP: ColorRamp = ColorRamp::new(&[
    (0.0, Rgb::new(0x0b, 0x10, 0x20)),
    (0.5, Rgb::new(0x1a, 0x13, 0x30)),
    (1.0, Rgb::new(0x21, 0x1a, 0x35)),
]);

/// Normalized progress in [0, 1] for `scrolled` px into a region `span`
/// px long. Non-positive spans read as zero progress.
pub fn progress(scrolled: f64, span: f64) -> f32 {
    if span <= 0.0 {
        return 0.0;
    }
    (scrolled / span).clamp(0.0, 1.0) as f32
}

#[inline]
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
