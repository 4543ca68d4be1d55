//! ETC1 / ETC1A4 block decoding as used by Nintendo 3DS textures.
//!
//! An ETC1 block stores a 4x4 tile of pixels in 64 bits: two base colours, two
//! modifier table selectors and a 2-bit modifier index per pixel. ETC1A4 blocks
//! prefix that with 64 bits of 4-bit alpha.
//!
//! On the 3DS the 64-bit block is stored little endian, so the per-pixel index
//! word comes first in memory, followed by the [`Etc1BlockInfo`] word.
//!
//! # Example
//!
//! ```
//! use mh4u_assets_etc1::decode_etc1_block_from_slice;
//!
//! let block = [0u8; 8];
//! let decoded = decode_etc1_block_from_slice(&block).unwrap();
//! assert!(decoded.has_identical_pixels());
//! ```
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod block_info;
pub mod modifier_table;
pub mod util;

pub use block_info::Etc1BlockInfo;
pub use modifier_table::{ModifierRow, MODIFIER_TABLES};
pub use util::{
    decode_etc1_block_from_slice, decode_etc1a4_block_from_slice, Etc1A4Block, Etc1Block,
    SubBlock, ETC1A4_BLOCK_SIZE, ETC1_BLOCK_SIZE,
};
