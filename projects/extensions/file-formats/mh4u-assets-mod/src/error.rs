//! Error types for model container decoding.

use crate::strips::StripError;
use thiserror::Error;

/// Result type for model decoding.
pub type ModResult<T> = Result<T, ModError>;

/// Errors that can occur while reading a `.mod` container.
#[derive(Debug, Error)]
pub enum ModError {
    /// The header's magic is not `MOD\0` or its version is not `0xE6`.
    #[error("Not a supported model: magic {magic:?}, version {version:#x}")]
    BadMagicOrVersion {
        /// Magic as stored
        magic: [u8; 4],
        /// Version as stored
        version: u16,
    },

    /// A header, descriptor or data region ends before the bytes it needs.
    #[error("Input truncated: required {required} bytes, got {actual} bytes")]
    TruncatedInput {
        /// Bytes needed
        required: usize,
        /// Bytes available
        actual: usize,
    },

    /// Vertex records are too small to contain a position.
    #[error("Vertex stride {stride} is smaller than the {required} bytes of a position")]
    VertexStrideTooSmall {
        /// Stride from the descriptor
        stride: u8,
        /// Minimum stride
        required: usize,
    },

    /// A submesh was requested that the header does not list.
    #[error("Submesh {index} requested, but the model has {count}")]
    SubmeshIndexOutOfRange {
        /// Requested submesh
        index: usize,
        /// Submeshes in the model
        count: usize,
    },

    /// A triangle references a vertex past the end of its submesh.
    #[error("Triangle index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Rebased index
        index: u32,
        /// Vertices in the submesh
        vertex_count: usize,
    },

    /// The index stream could not be turned into triangles.
    #[error("Strip decoding failed: {0}")]
    Strip(#[from] StripError),

    /// Reading from the byte source failed.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
