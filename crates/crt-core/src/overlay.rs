//! Styling for the decorative text drawn over the screen.
//!
//! The text picks up the same blur and channel split as the picture so it
//! sits inside the effect rather than on top of it.

use glam::DVec2;

pub const TEXT_BLUR_BASE: f64 = 3.0;
pub const TEXT_BLUR_INVERSE_GAIN: f64 = 0.5;
pub const TEXT_GLOW_RADIUS: f64 = 20.0;
pub const TEXT_SHADOW_BLUR: f64 = 15.0;
pub const TEXT_SHADOW_ALPHA: f64 = 0.5;
pub const TEXT_OPACITY_BASE: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextShadow {
    /// Offset in viewport-width units.
    pub offset_vw: DVec2,
    pub blur: f64,
    pub rgb: [u8; 3],
    pub alpha: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub blur: f64,
    pub glow_radius: f64,
    /// Red fringe then cyan fringe.
    pub shadows: [TextShadow; 2],
    pub opacity: f64,
}

/// Text blur shrinks as the picture blur grows; fringes and opacity follow
/// the chromatic offset. `blur == 0` yields an infinite radius, which the
/// display treats as invisible text.
pub fn blurred_text_style(blur: f64, chromatic_offset: f64) -> TextStyle {
    let c = chromatic_offset;
    TextStyle {
        blur: TEXT_BLUR_BASE + (1.0 / blur) * TEXT_BLUR_INVERSE_GAIN,
        glow_radius: TEXT_GLOW_RADIUS,
        shadows: [
            TextShadow {
                offset_vw: DVec2::new(c * 1.5 / 15.0, c / 15.0),
                blur: TEXT_SHADOW_BLUR,
                rgb: [255, 0, 0],
                alpha: TEXT_SHADOW_ALPHA,
            },
            TextShadow {
                offset_vw: DVec2::new(-c / 15.0, -(c / 30.0)),
                blur: TEXT_SHADOW_BLUR,
                rgb: [0, 255, 255],
                alpha: TEXT_SHADOW_ALPHA,
            },
        ],
        opacity: (TEXT_OPACITY_BASE + c).clamp(0.0, 1.0),
    }
}

/// What the text layer shows on this pass. Only produced while active.
#[derive(Clone, Debug, PartialEq)]
pub struct TextOverlay {
    pub phrase: String,
    pub headline: String,
    pub cursor_visible: bool,
    pub style: TextStyle,
}
