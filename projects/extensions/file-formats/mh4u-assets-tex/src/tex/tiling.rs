//! Block placement within a texture.
//!
//! Blocks are stored in super-tiles of 2x2 blocks (8x8 pixels). Super-tiles run left
//! to right, top to bottom; the 4 blocks inside one are ordered top-left, top-right,
//! bottom-left, bottom-right.

use super::constants::{BLOCK_SIZE, SUPER_TILE_SIZE};

/// Number of blocks in a super-tile.
pub const BLOCKS_PER_SUPER_TILE: usize = 4;

/// Returns the `(x, y)` pixel origin of block `block_index` in a texture `width` pixels wide.
///
/// `width` must be a non-zero multiple of 8.
#[inline]
pub fn block_origin(block_index: usize, width: u32) -> (usize, usize) {
    let super_tile_size = SUPER_TILE_SIZE as usize;
    let tiles_per_row = width as usize / super_tile_size;
    let super_tile = block_index / BLOCKS_PER_SUPER_TILE;
    let offset = block_index % BLOCKS_PER_SUPER_TILE;

    let x = (super_tile % tiles_per_row) * super_tile_size + (offset & 1) * BLOCK_SIZE;
    let y = (super_tile / tiles_per_row) * super_tile_size + (offset >> 1) * BLOCK_SIZE;
    (x, y)
}
