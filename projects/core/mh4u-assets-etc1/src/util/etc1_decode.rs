//! ETC1 and ETC1A4 block decoding.
//!
//! Follows the ETC1 layout of `GL_OES_compressed_ETC1_RGB8_texture`, with the 64-bit
//! block read little endian as the 3DS GPU does. Pixel `i` of the index word addresses
//! column `i / 4`, row `i % 4` of the tile.

use crate::block_info::Etc1BlockInfo;
use crate::modifier_table::{modifier_row, ModifierRow};
use mh4u_assets_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Size of an ETC1 block in bytes.
pub const ETC1_BLOCK_SIZE: usize = 8;

/// Size of an ETC1A4 block in bytes (64 bits of alpha, then an ETC1 block).
pub const ETC1A4_BLOCK_SIZE: usize = 16;

/// A single ETC1 block split into its two 32-bit words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Etc1Block {
    /// Per-pixel modifier indices. Bit `i` is the low bit of pixel `i`,
    /// bit `i + 16` the high (sign) bit.
    pub pixel_indices: u32,
    /// Base colours, mode, flip and table selectors.
    pub info: Etc1BlockInfo,
}

/// Base colour and modifier row governing one half of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubBlock {
    /// Base colour expanded to 8 bits per channel (before clamping).
    pub base: [i32; 3],
    /// Modifier row chosen by the sub-block's table selector.
    pub modifiers: &'static ModifierRow,
}

impl SubBlock {
    /// Applies the modifier at `modifier_index` to every channel and clamps to `0..=255`.
    #[inline(always)]
    pub fn color(&self, modifier_index: usize) -> Color8888 {
        let modifier = self.modifiers[modifier_index & 0b11];
        let [r, g, b] = self.base.map(|c| (c + modifier).clamp(0, 255) as u8);
        Color8888::opaque(r, g, b)
    }
}

impl Etc1Block {
    /// Creates a block from its index and info words.
    #[inline(always)]
    pub const fn new(pixel_indices: u32, info: u32) -> Self {
        Self {
            pixel_indices,
            info: Etc1BlockInfo::from_raw(info),
        }
    }

    /// Reads a block from its 8 byte little endian representation.
    #[inline(always)]
    pub fn from_bytes(bytes: [u8; ETC1_BLOCK_SIZE]) -> Self {
        let [i0, i1, i2, i3, b0, b1, b2, b3] = bytes;
        Self::new(
            u32::from_le_bytes([i0, i1, i2, i3]),
            u32::from_le_bytes([b0, b1, b2, b3]),
        )
    }

    /// Returns both sub-blocks; index 0 is sub-block 1.
    #[inline]
    pub fn sub_blocks(&self) -> [SubBlock; 2] {
        let [first, second] = self.info.base_colors();
        [
            SubBlock {
                base: first,
                modifiers: modifier_row(self.info.table_selector_1()),
            },
            SubBlock {
                base: second,
                modifiers: modifier_row(self.info.table_selector_2()),
            },
        ]
    }

    /// The 2-bit modifier index of pixel `pixel` (`0..16`).
    #[inline(always)]
    pub fn modifier_index(&self, pixel: usize) -> usize {
        let low = (self.pixel_indices >> pixel) & 1;
        let high = (self.pixel_indices >> (pixel + 16)) & 1;
        ((high << 1) | low) as usize
    }

    /// Whether pixel `pixel` (`0..16`) belongs to sub-block 1.
    ///
    /// Without flip the block splits into left/right 2x4 halves, with flip into
    /// top/bottom 4x2 halves.
    #[inline(always)]
    pub fn in_first_sub_block(&self, pixel: usize) -> bool {
        if self.info.flip() {
            (pixel / 2) % 2 == 0
        } else {
            pixel < 8
        }
    }

    /// Decodes all 16 pixels. Alpha is always 255.
    pub fn decode(&self) -> Decoded4x4Block {
        let sub_blocks = self.sub_blocks();
        let mut result = Decoded4x4Block::default();

        for pixel in 0..16 {
            let sub_block = if self.in_first_sub_block(pixel) {
                &sub_blocks[0]
            } else {
                &sub_blocks[1]
            };
            let color = sub_block.color(self.modifier_index(pixel));
            result.set_pixel(pixel / 4, pixel % 4, color);
        }

        result
    }
}

/// An ETC1A4 block: 16 explicit 4-bit alpha values followed by an ETC1 colour block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Etc1A4Block {
    /// Packed alpha, 4 bits per pixel in the same pixel order as the colour indices.
    pub alpha: u64,
    /// The colour part.
    pub color: Etc1Block,
}

impl Etc1A4Block {
    /// Reads a block from its 16 byte little endian representation.
    #[inline(always)]
    pub fn from_bytes(bytes: [u8; ETC1A4_BLOCK_SIZE]) -> Self {
        let [a0, a1, a2, a3, a4, a5, a6, a7, c0, c1, c2, c3, c4, c5, c6, c7] = bytes;
        Self {
            alpha: u64::from_le_bytes([a0, a1, a2, a3, a4, a5, a6, a7]),
            color: Etc1Block::from_bytes([c0, c1, c2, c3, c4, c5, c6, c7]),
        }
    }

    /// The raw 4-bit alpha value of each pixel, in pixel-index order.
    pub fn alpha_values(&self) -> [u8; 16] {
        core::array::from_fn(|pixel| ((self.alpha >> (pixel * 4)) & 0xF) as u8)
    }

    /// Decodes the colour part of the block.
    ///
    /// The alpha bits are not applied; every pixel comes out fully opaque, matching
    /// what the game's asset importer has always produced. Use [`Self::alpha_values`]
    /// to access them.
    #[inline]
    pub fn decode(&self) -> Decoded4x4Block {
        self.color.decode()
    }
}

/// Decodes an ETC1 block from the start of `src`.
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than [`ETC1_BLOCK_SIZE`].
#[inline]
pub fn decode_etc1_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let bytes: [u8; ETC1_BLOCK_SIZE] = src.get(..ETC1_BLOCK_SIZE)?.try_into().ok()?;
    Some(Etc1Block::from_bytes(bytes).decode())
}

/// Decodes an ETC1A4 block from the start of `src`.
///
/// # Returns
///
/// A decoded block, else [`None`] if the slice is shorter than [`ETC1A4_BLOCK_SIZE`].
#[inline]
pub fn decode_etc1a4_block_from_slice(src: &[u8]) -> Option<Decoded4x4Block> {
    let bytes: [u8; ETC1A4_BLOCK_SIZE] = src.get(..ETC1A4_BLOCK_SIZE)?.try_into().ok()?;
    Some(Etc1A4Block::from_bytes(bytes).decode())
}
