// color.rs - Color ramp interpolation
//
// Channelwise linear blend between explicit color stops.

use super::lerp;

/// 8-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend toward `other` by `k` in [0, 1]
    pub fn mix(self, other: Rgb, k: f32) -> Rgb {
        Rgb {
            r: lerp(self.r as f32, other.r as f32, k).round() as u8,
            g: lerp(self.g as f32, other.g as f32, k).round() as u8,
            b: lerp(self.b as f32, other.b as f32, k).round() as u8,
        }
    }
}

/// Color breakpoint table. Inputs must be sorted ascending.
pub struct ColorRamp {
    stops: &'static [(f32, Rgb)],
}

impl ColorRamp {
    pub const fn new(stops: &'static [(f32, Rgb)]) -> Self {
        Self { stops }
    }

    /// Map `t` to a color, clamped to the end stops
    pub fn map(&self, t: f32) -> Rgb {
        if self.stops.is_empty() {
            return Rgb::new(0, 0, 0);
        }
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        for pair in self.stops.windows(2) {
            let (x0, c0) = pair[0];
            let (x1, c1) = pair[1];
            if t <= x1 {
                let span = x1 - x0;
                if span <= 0.0 {
                    return c1;
                }
                return c0.mix(c1, (t - x0) / span);
            }
        }
        last.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_endpoints_are_exact() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(250, 120, 0);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn mix_midpoint_rounds_per_channel() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 100, 1);
        assert_eq!(a.mix(b, 0.5), Rgb::new(128, 50, 1));
    }

    #[test]
    fn ramp_clamps_outside_the_domain() {
        const RAMP: ColorRamp = ColorRamp::new(&[
            (0.0, Rgb::new(0, 0, 0)),
            (1.0, Rgb::new(200, 200, 200)),
        ]);
        assert_eq!(RAMP.map(-5.0), Rgb::new(0, 0, 0));
        assert_eq!(RAMP.map(5.0), Rgb::new(200, 200, 200));
    }

    #[test]
    fn empty_ramp_is_black() {
        let ramp = ColorRamp::new(&[]);
        assert_eq!(ramp.map(0.5), Rgb::new(0, 0, 0));
    }
}
