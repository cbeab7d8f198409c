//! RGBA pixel storage shared by the test card and the grain layer.
//!
//! Pixels are laid out row-major as `#[repr(C)]` RGBA8 so a whole buffer can
//! be handed to a 2D canvas (`ImageData`) as one contiguous byte slice.

/// One RGBA8 pixel.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0x000000);
    pub const WHITE: Rgba = Rgba::opaque(0xffffff);

    /// Fully opaque color from a 24-bit `0xRRGGBB` constant.
    pub const fn opaque(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 0xff,
        }
    }

    pub const fn rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Fixed-size 2D grid of pixels. Allocated once and overwritten in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl PixelBuffer {
    /// Allocate a transparent-black buffer. Zero-sized buffers are allowed and
    /// turn every drawing operation into a no-op.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![Rgba::default(); len],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.pixels)
    }

    /// Fill an axis-aligned rectangle given in fractional pixel units.
    ///
    /// Pixel `i` is covered when `x <= i + 0.5 < x + w` (centre sampling), so
    /// adjacent rectangles sharing an edge never overlap or leave a gap.
    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        let x0 = snap_edge(x, self.width);
        let x1 = snap_edge(x + w, self.width);
        let y0 = snap_edge(y, self.height);
        let y1 = snap_edge(y + h, self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let stride = self.width as usize;
        for row in y0 as usize..y1 as usize {
            let start = row * stride;
            self.pixels[start + x0 as usize..start + x1 as usize].fill(color);
        }
    }
}

// First pixel index whose centre lies at or after `edge`, clamped to [0, limit]
#[inline]
fn snap_edge(edge: f64, limit: u32) -> u32 {
    ((edge - 0.5).ceil().max(0.0) as u32).min(limit)
}
