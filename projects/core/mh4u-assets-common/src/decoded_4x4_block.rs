//! The decoded contents of a single 4x4 compressed block.

use crate::color_8888::Color8888;

/// 16 decoded pixels of a 4x4 block, stored row by row (`y * 4 + x`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Decoded4x4Block {
    /// The pixels, row-major.
    pub pixels: [Color8888; 16],
}

impl Decoded4x4Block {
    /// Creates a block where every pixel is `color`.
    #[inline(always)]
    pub const fn new(color: Color8888) -> Self {
        Self {
            pixels: [color; 16],
        }
    }

    /// Returns the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 4 or greater.
    #[inline(always)]
    pub fn pixel(&self, x: usize, y: usize) -> Color8888 {
        assert!(x < 4 && y < 4, "pixel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x]
    }

    /// Writes the pixel at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is 4 or greater.
    #[inline(always)]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color8888) {
        assert!(x < 4 && y < 4, "pixel ({x}, {y}) is outside of a 4x4 block");
        self.pixels[y * 4 + x] = color;
    }

    /// Returns `true` if all 16 pixels hold the same colour.
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|p| *p == first)
    }
}

impl Default for Decoded4x4Block {
    fn default() -> Self {
        Self::new(Color8888::default())
    }
}
