//! `.tex` container layout constants.

/// Magic tag at the start of a texture container. Not validated when reading.
pub const TEX_MAGIC: [u8; 4] = *b"TEX\0";

/// Size of the fixed part of the header, before the mipmap offset table.
pub const TEX_HEADER_SIZE: usize = 16;

// Header word offsets
pub(crate) const TEX_FLAGS_OFFSET: usize = 4;
pub(crate) const TEX_GEOMETRY_OFFSET: usize = 8;
pub(crate) const TEX_FORMAT_OFFSET: usize = 12;

/// Size of one entry in the mipmap offset table.
pub const MIPMAP_OFFSET_ENTRY_SIZE: usize = 4;

/// Pixel type code of opaque ETC1 textures.
pub const PIXEL_TYPE_ETC1: u8 = 11;

/// Pixel type code of ETC1A4 textures (ETC1 with 4-bit explicit alpha).
pub const PIXEL_TYPE_ETC1A4: u8 = 12;

/// Width and height of a super-tile (2x2 blocks) in pixels.
pub const SUPER_TILE_SIZE: u32 = 8;

/// Width and height of a single block in pixels.
pub const BLOCK_SIZE: usize = 4;
