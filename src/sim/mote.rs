// mote.rs - Drifting dust motes
//
// Structure-of-Arrays layout for cache-friendly iteration. Population is
// sized from surface area, so the arrays are heap Vecs rather than fixed
// capacity slabs.

use super::MoteField;

// Spawn bands
const RADIUS_BASE: f32 = 0.3;
const RADIUS_SPREAD: f32 = 1.2;
const ALPHA_BASE: f32 = 0.15;
const ALPHA_SPREAD: f32 = 0.35;
const DRIFT_SPREAD: f32 = 0.15;   // per-axis velocity in (-0.075, 0.075)

pub struct Motes {
    // Position
    pub x: Vec<f32>,
    pub y: Vec<f32>,

    // Appearance
    pub r: Vec<f32>,
    pub a: Vec<f32>,

    // Velocity
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,
}

impl Motes {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            r: Vec::new(),
            a: Vec::new(),
            vx: Vec::new(),
            vy: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
        self.r.clear();
        self.a.clear();
        self.vx.clear();
        self.vy.clear();
    }

    /// Spawn `count` motes spread uniformly over the surface
    pub fn spawn(&mut self, count: usize, w: f32, h: f32, rng: &mut u32) {
        for _ in 0..count {
            self.x.push(MoteField::rand(rng) * w);
            self.y.push(MoteField::rand(rng) * h);
            self.r.push(MoteField::rand(rng) * RADIUS_SPREAD + RADIUS_BASE);
            self.a.push(MoteField::rand(rng) * ALPHA_SPREAD + ALPHA_BASE);
            self.vx.push((MoteField::rand(rng) - 0.5) * DRIFT_SPREAD);
            self.vy.push((MoteField::rand(rng) - 0.5) * DRIFT_SPREAD);
        }
    }

    /// Drift one frame with toroidal wraparound. Positions stay inside
    /// [0, w) x [0, h); a mote leaving one edge re-enters at the other.
    pub fn step(&mut self, w: f32, h: f32) {
        for i in 0..self.len() {
            let mut x = self.x[i] + self.vx[i];
            let mut y = self.y[i] + self.vy[i];

            if x < 0.0 {
                x += w;
            }
            // Catches both drift past the far edge and a wrapped position
            // that rounded up to exactly w
            if x >= w {
                x -= w;
            }
            if y < 0.0 {
                y += h;
            }
            if y >= h {
                y -= h;
            }

            self.x[i] = x;
            self.y[i] = y;
        }
    }
}
