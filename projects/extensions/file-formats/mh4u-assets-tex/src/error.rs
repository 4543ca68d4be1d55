//! Error types for texture container decoding.

use thiserror::Error;

/// Result type for texture decoding.
pub type TexResult<T> = Result<T, TexError>;

/// Errors that can occur while reading a `.tex` container.
#[derive(Debug, Error)]
pub enum TexError {
    /// The header names a pixel type other than ETC1 (11) or ETC1A4 (12).
    #[error("Unsupported pixel format code: {0}")]
    UnsupportedPixelFormat(u8),

    /// Width or height is zero or not a multiple of the 8 pixel super-tile.
    #[error("Invalid texture dimensions {width}x{height}: both must be non-zero multiples of 8")]
    InvalidDimensions {
        /// Width from the header
        width: u32,
        /// Height from the header
        height: u32,
    },

    /// The container ends before the header or the level 0 payload does.
    #[error("Input truncated: required at least {required} bytes, got {actual} bytes")]
    TruncatedInput {
        /// Bytes needed
        required: usize,
        /// Bytes available
        actual: usize,
    },

    /// Reading from the byte source failed.
    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
