// sim/ - Mote field simulation
//
// Entity state in Structure-of-Arrays form, stepped once per animation
// frame. The field is purely decorative: warm dust motes drift, wrap, and
// glow over a transparent canvas.

mod mote;

pub use mote::Motes;

#[cfg(test)]
mod tests;

/// Surface area (px^2) that earns one mote
pub const AREA_PER_MOTE: u32 = 35_000;

/// Drifting mote field over one drawable surface
pub struct MoteField {
    // Surface dimensions
    w: u32,
    h: u32,

    // Entities
    motes: Motes,

    // RNG state
    rng: u32,
}

impl MoteField {
    pub fn new(w: u32, h: u32) -> Self {
        let mut field = Self {
            w,
            h,
            motes: Motes::new(),
            rng: 0xDEADBEEF,
        };
        field.populate();
        field
    }

    /// Population for a surface: floor(w * h / AREA_PER_MOTE)
    pub fn mote_count(w: u32, h: u32) -> usize {
        ((w as u64 * h as u64) / AREA_PER_MOTE as u64) as usize
    }

    /// Regenerate the field for a new surface size. The old population is
    /// dropped wholesale, never carried over or interpolated.
    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.populate();
    }

    /// Advance every mote by one frame
    pub fn step(&mut self) {
        self.motes.step(self.w as f32, self.h as f32);
    }

    fn populate(&mut self) {
        let count = Self::mote_count(self.w, self.h);
        self.motes.clear();
        self.motes.spawn(count, self.w as f32, self.h as f32, &mut self.rng);
        log::debug!("mote field populated: {count} motes for {}x{}", self.w, self.h);
    }

    // Random number generator (xorshift32)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }

    // Accessors
    pub fn motes(&self) -> &Motes { &self.motes }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}
