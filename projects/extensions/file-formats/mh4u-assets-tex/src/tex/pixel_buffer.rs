use alloc::vec;
use alloc::vec::Vec;

/// A decoded image: `width * height` RGBA pixels as `f32` in `[0, 1]`, row-major.
///
/// Rows are stored bottom-up: row 0 is the bottom of the image, as texture
/// coordinates with `v = 0` at the bottom expect. Flip before writing top-down formats.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl PixelBuffer {
    /// Creates a buffer of opaque black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0, 0.0, 0.0, 1.0]; width as usize * height as usize],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row by row.
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// The pixel at column `x`, row `y`, or [`None`] if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Pixels of row `y`.
    pub fn row(&self, y: u32) -> Option<&[[f32; 4]]> {
        if y >= self.height {
            return None;
        }
        let start = self.index(0, y);
        self.pixels.get(start..start + self.width as usize)
    }

    pub(crate) fn set_pixel(&mut self, x: u32, y: u32, value: [f32; 4]) {
        let index = self.index(x, y);
        self.pixels[index] = value;
    }

    /// Converts to tightly packed 8-bit RGBA.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|pixel| pixel.map(|c| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8))
            .collect()
    }

    /// Consumes the buffer, returning its pixels.
    pub fn into_pixels(self) -> Vec<[f32; 4]> {
        self.pixels
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
