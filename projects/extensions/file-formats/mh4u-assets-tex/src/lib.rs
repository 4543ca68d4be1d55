//! Reader for the `.tex` texture containers of Monster Hunter 4 Ultimate (Nintendo 3DS).
//!
//! A `.tex` file is a 16 byte header, a table of mipmap offsets and a stream of ETC1 or
//! ETC1A4 blocks laid out in 8x8 pixel super-tiles. [`decode_texture`] turns a whole
//! container into a [`PixelBuffer`] of RGBA `f32` pixels; [`parse_tex_header`] reads
//! only the header.
//!
//! ```
//! use mh4u_assets_tex::{decode_texture, TexError};
//!
//! // Truncated input is reported, not decoded.
//! assert!(matches!(
//!     decode_texture(&[0u8; 8]),
//!     Err(TexError::TruncatedInput { required: 16, actual: 8 })
//! ));
//! ```
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod tex;

pub use error::{TexError, TexResult};
pub use tex::*;

#[cfg(test)]
pub mod test_prelude;
