//! Code shared between the ETC1 block decoder and the `.tex`/`.mod` container readers.
//!
//! - [`color_8888`]: a single decoded RGBA8888 pixel.
//! - [`decoded_4x4_block`]: the 16 decoded pixels of one compressed block.
//! - [`io`]: bounded reads from a byte source (requires `std`).
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

pub mod color_8888;
pub mod decoded_4x4_block;

#[cfg(feature = "std")]
pub mod io;
