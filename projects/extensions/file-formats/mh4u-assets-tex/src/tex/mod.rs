/// Layout constants of the `.tex` container.
pub mod constants;

/// Decode a container or a raw block stream into pixels.
pub mod decode_tex;

/// Header words and the pixel format they describe.
pub mod header;

/// The decoded image.
pub mod pixel_buffer;

/// Tiled block placement.
pub mod tiling;

pub use decode_tex::*;
pub use header::*;
pub use pixel_buffer::*;
