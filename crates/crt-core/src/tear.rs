use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TearBand {
    /// Distance from the top of the screen, percent of its height.
    pub top_percent: f64,
    /// Unclamped; displays clamp to `[0, 1]`.
    pub opacity: f64,
}

/// VHS tear artifact for one render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TearOverlay {
    pub intensity: f64,
    pub opacity: f64,
    pub band: TearBand,
    pub scanline: TearBand,
}

impl TearOverlay {
    /// Band positions are drawn fresh on every call, so an active tear
    /// flickers between render passes.
    pub fn roll<R: Rng + ?Sized>(tear_intensity: f64, rng: &mut R) -> Self {
        let band_top = rng.gen::<f64>() * TEAR_BAND_TOP_SPAN + TEAR_BAND_TOP_MIN;
        let scanline_top = rng.gen::<f64>() * TEAR_SCANLINE_TOP_SPAN;
        Self {
            intensity: tear_intensity,
            opacity: tear_intensity / TEAR_MAX,
            band: TearBand {
                top_percent: band_top,
                opacity: tear_intensity * TEAR_BAND_OPACITY,
            },
            scanline: TearBand {
                top_percent: scanline_top,
                opacity: tear_intensity * TEAR_SCANLINE_OPACITY,
            },
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.intensity > 0.0
    }
}
