//! `.mod` container layout constants.

/// Magic tag at the start of a model container.
pub const MOD_MAGIC: [u8; 4] = *b"MOD\0";

/// The only container version that is understood.
pub const MOD_VERSION: u16 = 0xE6;

/// Size of the container header.
pub const MOD_HEADER_SIZE: usize = 64;

/// Size of one submesh descriptor.
pub const SUBMESH_DESCRIPTOR_SIZE: usize = 48;

/// Size of one material record in the material table.
pub const MATERIAL_RECORD_SIZE: usize = 128;

/// Bytes at the start of a material record that hold its NUL padded name.
pub const MATERIAL_NAME_SIZE: usize = 30;

// Header word offsets
pub(crate) const VERSION_WORD_OFFSET: usize = 4;
pub(crate) const COUNTS_WORD_OFFSET: usize = 8;
pub(crate) const VERTEX_COUNT_OFFSET: usize = 12;
pub(crate) const FACE_COUNT_OFFSET: usize = 16;
pub(crate) const VERTEX_ID_COUNT_OFFSET: usize = 20;
pub(crate) const VERTEX_BUFFER_SIZE_OFFSET: usize = 24;
pub(crate) const SECOND_BUFFER_SIZE_OFFSET: usize = 28;
pub(crate) const GROUP_COUNT_OFFSET: usize = 32;
pub(crate) const BONE_OFFSET_OFFSET: usize = 36;
pub(crate) const GROUP_OFFSET_OFFSET: usize = 40;
pub(crate) const TEXTURE_OFFSET_OFFSET: usize = 44;
pub(crate) const MATERIAL_OFFSET_OFFSET: usize = 48;
pub(crate) const MESH_OFFSET_OFFSET: usize = 52;
pub(crate) const VERTEX_OFFSET_OFFSET: usize = 56;
pub(crate) const INDEX_OFFSET_OFFSET: usize = 60;

// Descriptor word offsets
pub(crate) const DESC_COUNT_WORD_OFFSET: usize = 0;
pub(crate) const DESC_ATTRIBUTES_OFFSET: usize = 4;
pub(crate) const DESC_LAYOUT_WORD_OFFSET: usize = 8;
pub(crate) const DESC_VERTEX_START_OFFSET: usize = 12;
pub(crate) const DESC_VERTEX_OFFSET_OFFSET: usize = 16;
pub(crate) const DESC_VERTEX_FORMAT_OFFSET: usize = 20;
pub(crate) const DESC_INDEX_OFFSET_OFFSET: usize = 24;
pub(crate) const DESC_INDEX_COUNT_OFFSET: usize = 28;
pub(crate) const DESC_TRAILER_OFFSET: usize = 32;

// Vertex record layout
/// Bytes of a vertex record holding the position (3 x f32).
pub const POSITION_SIZE: usize = 12;
pub(crate) const UV_OFFSET: usize = 16;
/// Minimum stride for a record to carry a UV (2 x f32 at bytes 16..24).
pub const MIN_UV_STRIDE: usize = 24;
/// Minimum stride for a record to carry bone indices and weights.
pub const MIN_SKIN_STRIDE: usize = 36;
pub(crate) const BONE_BYTE_OFFSETS: [usize; 4] = [24, 25, 32, 34];
pub(crate) const WEIGHT_BYTE_OFFSETS: [usize; 4] = [26, 27, 33, 35];
