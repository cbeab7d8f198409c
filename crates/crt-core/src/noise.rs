//! Per-frame RGB grain.

use crate::pixel::PixelBuffer;
use rand::rngs::StdRng;
use rand::RngCore;

/// Rewrites a buffer with fresh uniform noise on every tick.
///
/// Frames are independent samples; nothing carries over from the previous
/// frame except the allocation itself.
pub struct NoiseGenerator {
    rng: StdRng,
    frames: u64,
}

impl NoiseGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, frames: 0 }
    }

    /// Fill every pixel with three independent random channel bytes and an
    /// opaque alpha.
    pub fn tick(&mut self, buffer: &mut PixelBuffer) {
        if buffer.is_empty() {
            return;
        }
        self.rng.fill_bytes(buffer.as_bytes_mut());
        for px in buffer.pixels_mut() {
            px.a = 0xff;
        }
        self.frames += 1;
    }

    /// Number of frames generated so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
