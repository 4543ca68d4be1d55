use super::constants::*;
use super::header::ModHeader;
use crate::error::{ModError, ModResult};
use bitfield::bitfield;
use endian_writer::{EndianReader, LittleEndianReader};

bitfield! {
    /// Descriptor word at offset 0.
    ///
    /// Bit layout:
    /// - Bits 0-15: Flags (not interpreted).
    /// - Bits 16-31: Vertex count.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DescriptorCountWord(u32);
    impl Debug;
    u32;

    /// Submesh flags (bits 0-15)
    pub u16, flags, _: 15, 0;
    /// Number of vertices (bits 16-31)
    pub u16, vertex_count, _: 31, 16;
}

bitfield! {
    /// Descriptor word at offset 8.
    ///
    /// Bit layout:
    /// - Bits 0-15: Material info (not interpreted).
    /// - Bits 16-23: Vertex record stride in bytes.
    /// - Bits 24-31: Vertex format tag (not interpreted).
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DescriptorLayoutWord(u32);
    impl Debug;
    u32;

    /// Material info (bits 0-15)
    pub u16, material_info, _: 15, 0;
    /// Vertex record stride (bits 16-23)
    pub u8, stride, _: 23, 16;
    /// Vertex format tag (bits 24-31)
    pub u8, vertex_format_tag, _: 31, 24;
}

impl DescriptorCountWord {
    /// Packs flags and a vertex count.
    pub const fn pack(flags: u16, vertex_count: u16) -> Self {
        Self(flags as u32 | (vertex_count as u32) << 16)
    }

    /// The raw word.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl DescriptorLayoutWord {
    /// Packs material info, stride and format tag.
    pub const fn pack(material_info: u16, stride: u8, vertex_format_tag: u8) -> Self {
        Self(material_info as u32 | (stride as u32) << 16 | (vertex_format_tag as u32) << 24)
    }

    /// The raw word.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

/// A 48 byte submesh descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SubmeshDescriptor {
    /// Flags and vertex count.
    pub count_word: DescriptorCountWord,
    /// Attribute bits (not interpreted).
    pub attributes: u32,
    /// Material info, stride and format tag.
    pub layout_word: DescriptorLayoutWord,
    /// Index of the submesh's first vertex in the shared vertex numbering.
    /// Indices in the index stream are relative to 0 and get this subtracted.
    pub vertex_start_index: u32,
    /// Byte offset added to the vertex region start.
    pub vertex_offset: u32,
    /// Vertex format id (not interpreted).
    pub vertex_format: u32,
    /// Offset of the index stream in the index region, in `u16` units.
    pub index_offset: u32,
    /// Number of indices.
    pub index_count: u32,
    /// Trailing words (not interpreted).
    pub trailer: [u32; 4],
}

impl SubmeshDescriptor {
    /// Reads a descriptor from its 48 byte representation.
    pub fn from_bytes(bytes: &[u8; SUBMESH_DESCRIPTOR_SIZE]) -> Self {
        // SAFETY: The array is SUBMESH_DESCRIPTOR_SIZE (48) bytes long, every read ends at or before byte 48
        let mut reader = unsafe { LittleEndianReader::new(bytes.as_ptr()) };
        let mut word = |offset: usize| unsafe { reader.read_u32_at(offset as isize) };

        Self {
            count_word: DescriptorCountWord(word(DESC_COUNT_WORD_OFFSET)),
            attributes: word(DESC_ATTRIBUTES_OFFSET),
            layout_word: DescriptorLayoutWord(word(DESC_LAYOUT_WORD_OFFSET)),
            vertex_start_index: word(DESC_VERTEX_START_OFFSET),
            vertex_offset: word(DESC_VERTEX_OFFSET_OFFSET),
            vertex_format: word(DESC_VERTEX_FORMAT_OFFSET),
            index_offset: word(DESC_INDEX_OFFSET_OFFSET),
            index_count: word(DESC_INDEX_COUNT_OFFSET),
            trailer: [
                word(DESC_TRAILER_OFFSET),
                word(DESC_TRAILER_OFFSET + 4),
                word(DESC_TRAILER_OFFSET + 8),
                word(DESC_TRAILER_OFFSET + 12),
            ],
        }
    }

    /// Number of vertex records.
    pub fn vertex_count(&self) -> usize {
        usize::from(self.count_word.vertex_count())
    }

    /// Size of one vertex record in bytes.
    pub fn stride(&self) -> usize {
        usize::from(self.layout_word.stride())
    }

    /// Whether records are large enough to hold a UV.
    pub fn has_uvs(&self) -> bool {
        self.stride() >= MIN_UV_STRIDE
    }

    /// Whether records are large enough to hold bone indices and weights.
    pub fn has_skin(&self) -> bool {
        self.stride() >= MIN_SKIN_STRIDE
    }

    /// Fails with [`ModError::VertexStrideTooSmall`] if a record cannot hold a position.
    pub fn validate_stride(&self) -> ModResult<()> {
        if self.stride() < POSITION_SIZE {
            return Err(ModError::VertexStrideTooSmall {
                stride: self.layout_word.stride(),
                required: POSITION_SIZE,
            });
        }
        Ok(())
    }

    /// Absolute offset of the first vertex record.
    pub fn vertex_data_offset(&self, header: &ModHeader) -> u64 {
        u64::from(header.vertex_offset)
            + u64::from(self.vertex_start_index) * self.stride() as u64
            + u64::from(self.vertex_offset)
    }

    /// Length of the vertex records in bytes.
    pub fn vertex_data_len(&self) -> usize {
        self.vertex_count() * self.stride()
    }

    /// Absolute offset of the index stream.
    pub fn index_data_offset(&self, header: &ModHeader) -> u64 {
        u64::from(header.index_offset) + u64::from(self.index_offset) * 2
    }

    /// Bytes read for the index stream: `index_count` indices plus one more.
    pub fn index_data_len(&self) -> usize {
        self.index_count as usize * 2 + 2
    }
}

/// Parses a descriptor from the start of `data`.
pub fn parse_submesh_descriptor(data: &[u8]) -> ModResult<SubmeshDescriptor> {
    let bytes: &[u8; SUBMESH_DESCRIPTOR_SIZE] = data
        .get(..SUBMESH_DESCRIPTOR_SIZE)
        .and_then(|d| d.try_into().ok())
        .ok_or(ModError::TruncatedInput {
            required: SUBMESH_DESCRIPTOR_SIZE,
            actual: data.len(),
        })?;
    Ok(SubmeshDescriptor::from_bytes(bytes))
}

/// Fails with [`ModError::SubmeshIndexOutOfRange`] unless `index` is a submesh of `header`.
pub fn check_submesh_index(header: &ModHeader, index: usize) -> ModResult<()> {
    if index >= header.mesh_count() {
        return Err(ModError::SubmeshIndexOutOfRange {
            index,
            count: header.mesh_count(),
        });
    }
    Ok(())
}

/// Reads descriptor `index` from an in-memory container.
pub fn submesh_descriptor(
    data: &[u8],
    header: &ModHeader,
    index: usize,
) -> ModResult<SubmeshDescriptor> {
    check_submesh_index(header, index)?;
    let start = usize::try_from(header.descriptor_offset(index)).unwrap_or(usize::MAX);
    parse_submesh_descriptor(data.get(start..).unwrap_or(&[]))
}

/// Reads descriptor `index` from a seekable source.
#[cfg(feature = "std")]
pub fn read_submesh_descriptor<R: std::io::Read + std::io::Seek>(
    reader: &mut R,
    header: &ModHeader,
    index: usize,
) -> ModResult<SubmeshDescriptor> {
    use std::io::SeekFrom;

    check_submesh_index(header, index)?;
    reader.seek(SeekFrom::Start(header.descriptor_offset(index)))?;
    let bytes = mh4u_assets_common::io::read_up_to(reader, SUBMESH_DESCRIPTOR_SIZE)?;
    parse_submesh_descriptor(&bytes)
}
