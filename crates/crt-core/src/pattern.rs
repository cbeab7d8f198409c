//! SMPTE-style color bar test card.
//!
//! The card is a pure function of the buffer size: three horizontal bands
//! (75 % bars, 7 % reverse bars, 18 % PLUGE) whose edges are exact fractions
//! of width and height.

use crate::pixel::{PixelBuffer, Rgba};

pub const TOP_BAND_FRACTION: f64 = 0.75;
pub const MIDDLE_BAND_FRACTION: f64 = 0.07;
pub const BAR_COUNT: usize = 7;

// 75 % bars: white, yellow, cyan, green, magenta, red, blue
pub const TOP_COLORS: [Rgba; BAR_COUNT] = [
    Rgba::opaque(0xc0c0c0),
    Rgba::opaque(0xc0c000),
    Rgba::opaque(0x00c0c0),
    Rgba::opaque(0x00c000),
    Rgba::opaque(0xc000c0),
    Rgba::opaque(0xc00000),
    Rgba::opaque(0x0000c0),
];

// Reverse bars under the main band, same columns
pub const MIDDLE_COLORS: [Rgba; BAR_COUNT] = [
    Rgba::opaque(0x0000c0),
    Rgba::BLACK,
    Rgba::opaque(0xc000c0),
    Rgba::BLACK,
    Rgba::opaque(0x00c0c0),
    Rgba::BLACK,
    Rgba::opaque(0xc0c0c0),
];

pub const PLUGE_MINUS_I: Rgba = Rgba::opaque(0x001a33);
pub const PLUGE_WHITE: Rgba = Rgba::WHITE;
pub const PLUGE_PLUS_I: Rgba = Rgba::opaque(0x331a00);
pub const PLUGE_BLACK: Rgba = Rgba::BLACK;
pub const PLUGE_BELOW_BLACK: Rgba = Rgba::opaque(0x030303);
pub const PLUGE_ABOVE_BLACK: Rgba = Rgba::opaque(0x0a0a0a);

/// Vertical band boundaries in fractional pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandLayout {
    pub top_height: f64,
    pub middle_y: f64,
    pub middle_height: f64,
    pub bottom_y: f64,
    pub bottom_height: f64,
}

impl BandLayout {
    pub fn for_height(height: u32) -> Self {
        let height = height as f64;
        let top_height = height * TOP_BAND_FRACTION;
        let middle_y = top_height;
        let middle_height = height * MIDDLE_BAND_FRACTION;
        let bottom_y = middle_y + middle_height;
        Self {
            top_height,
            middle_y,
            middle_height,
            bottom_y,
            bottom_height: height - bottom_y,
        }
    }
}

/// Draw the test card over the whole buffer. Re-running overwrites every
/// pixel with the same values.
pub fn render(buffer: &mut PixelBuffer) {
    if buffer.is_empty() {
        return;
    }
    let width = buffer.width() as f64;
    let bands = BandLayout::for_height(buffer.height());
    let bar_width = width / BAR_COUNT as f64;

    for (i, color) in TOP_COLORS.iter().enumerate() {
        buffer.fill_rect(i as f64 * bar_width, 0.0, bar_width, bands.top_height, *color);
    }

    for (i, color) in MIDDLE_COLORS.iter().enumerate() {
        buffer.fill_rect(
            i as f64 * bar_width,
            bands.middle_y,
            bar_width,
            bands.middle_height,
            *color,
        );
    }

    draw_pluge(buffer, width, bands.bottom_y, bands.bottom_height);
}

fn draw_pluge(buffer: &mut PixelBuffer, width: f64, y: f64, h: f64) {
    let swatch = width * (5.0 / 28.0);
    buffer.fill_rect(0.0, y, swatch, h, PLUGE_MINUS_I);
    buffer.fill_rect(swatch, y, swatch, h, PLUGE_WHITE);
    buffer.fill_rect(swatch * 2.0, y, swatch, h, PLUGE_PLUS_I);
    buffer.fill_rect(swatch * 3.0, y, swatch * (8.0 / 5.0), h, PLUGE_BLACK);

    // Near-black steps on the right; painted last so they cut into the reference swatch
    let step = width * (3.0 / 28.0);
    let start = width - step * 3.0;
    buffer.fill_rect(start, y, step, h, PLUGE_BELOW_BLACK);
    buffer.fill_rect(start + step, y, step, h, PLUGE_BLACK);
    buffer.fill_rect(start + step * 2.0, y, step, h, PLUGE_ABOVE_BLACK);
}
