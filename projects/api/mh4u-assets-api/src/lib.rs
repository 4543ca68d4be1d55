//! Loads MH4U textures and models and hands the decoded data to a host.
//!
//! The format crates return plain data; this crate drives them over whole files and
//! forwards every texture, material list and submesh to an [`AssetSink`] the host
//! implements.
//!
//! # Example
//!
//! ```
//! use mh4u_assets_api::{load_model_from_slice, LoadSettings, MemorySink};
//!
//! fn submesh_count(model: &[u8]) -> usize {
//!     let mut sink = MemorySink::default();
//!     match load_model_from_slice(model, &mut sink, &LoadSettings::default()) {
//!         Ok(summary) => summary.delivered,
//!         Err(_) => 0,
//!     }
//! }
//!
//! assert_eq!(submesh_count(b"not a model"), 0);
//! ```

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod error;
pub mod loader;
pub mod sink;

#[cfg(feature = "file-io")]
pub mod file_io;

pub use error::LoadError;
pub use loader::*;
pub use sink::{AssetSink, MemorySink};

// Re-export the types sinks receive
pub use mh4u_assets_mod::{Mesh, MeshDecodeSettings, ModHeader, SkinInfluence, StripMode};
pub use mh4u_assets_tex::{DecodedTexture, PixelBuffer};

#[cfg(feature = "file-io")]
pub use file_io::{FileOperationError, FileOperationResult};

#[cfg(test)]
pub mod test_prelude;
