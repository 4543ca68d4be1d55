//! Reader for the `.mod` model containers of Monster Hunter 4 Ultimate (Nintendo 3DS).
//!
//! A model is a 64 byte header followed by regions the header points at: a table of
//! 48 byte submesh descriptors, vertex records and `u16` index streams holding
//! triangle strips. Each submesh decodes independently into a [`Mesh`].
//!
//! - [`parse_mod_header`] / [`read_mod_header`]: validate the container.
//! - [`decode_mesh_submesh`] / [`read_submesh`]: decode one submesh.
//! - [`ModFile`]: a container opened over any `Read + Seek` source.
//! - [`strips`]: the triangle strip decoder on its own.
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod mod_file;
pub mod strips;

pub use error::{ModError, ModResult};
pub use mod_file::*;
pub use strips::{StripError, StripMode, Triangle};

#[cfg(test)]
pub mod test_prelude;
