// piecewise.rs - Piecewise-linear mapping
//
// Explicit (input, output) breakpoints with linear interpolation between
// neighbors. Outside the stop domain the end values hold.

use super::lerp;

/// Breakpoint table. Inputs must be sorted ascending.
pub struct PiecewiseLinear {
    stops: &'static [(f32, f32)],
}

impl PiecewiseLinear {
    pub const fn new(stops: &'static [(f32, f32)]) -> Self {
        Self { stops }
    }

    /// Map `t` through the stops, clamped to the end values
    pub fn map(&self, t: f32) -> f32 {
        if self.stops.is_empty() {
            return 0.0;
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
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if t <= x1 {
                let span = x1 - x0;
                if span <= 0.0 {
                    return y1;
                }
                return lerp(y0, y1, (t - x0) / span);
            }
        }
        last.1
    }
}
