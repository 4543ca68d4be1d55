use super::constants::*;
use crate::error::{ModError, ModResult};
use bitfield::bitfield;
use endian_writer::{EndianReader, LittleEndianReader};

bitfield! {
    /// The word at offset 4: version and bone count.
    ///
    /// Bit layout:
    /// - Bits 0-15: Container version.
    /// - Bits 16-31: Bone count.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModVersionWord(u32);
    impl Debug;
    u32;

    /// Container version (bits 0-15)
    pub u16, version, _: 15, 0;
    /// Number of bones (bits 16-31)
    pub u16, bone_count, _: 31, 16;
}

bitfield! {
    /// The word at offset 8: submesh and material counts.
    ///
    /// Bit layout:
    /// - Bits 0-15: Submesh count.
    /// - Bits 16-31: Material count.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModCountsWord(u32);
    impl Debug;
    u32;

    /// Number of submeshes (bits 0-15)
    pub u16, mesh_count, _: 15, 0;
    /// Number of materials (bits 16-31)
    pub u16, material_count, _: 31, 16;
}

impl ModVersionWord {
    /// Packs a version and bone count.
    pub const fn pack(version: u16, bone_count: u16) -> Self {
        Self(version as u32 | (bone_count as u32) << 16)
    }

    /// The raw word.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl ModCountsWord {
    /// Packs a submesh and material count.
    pub const fn pack(mesh_count: u16, material_count: u16) -> Self {
        Self(mesh_count as u32 | (material_count as u32) << 16)
    }

    /// The raw word.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

/// The 64 byte header of a `.mod` container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModHeader {
    /// Magic tag, `MOD\0` for supported files.
    pub magic: [u8; 4],
    /// Version and bone count.
    pub version_word: ModVersionWord,
    /// Submesh and material counts.
    pub counts: ModCountsWord,
    /// Total vertices over all submeshes.
    pub vertex_count: u32,
    /// Total faces over all submeshes.
    pub face_count: u32,
    /// Number of vertex ids.
    pub vertex_id_count: u32,
    /// Size of the vertex data region in bytes.
    pub vertex_buffer_size: u32,
    /// Size of the secondary buffer in bytes.
    pub second_buffer_size: u32,
    /// Number of groups.
    pub group_count: u32,
    /// Start of the bone table.
    pub bone_offset: u32,
    /// Start of the group table.
    pub group_offset: u32,
    /// Start of the texture table.
    pub texture_offset: u32,
    /// Start of the material table.
    pub material_offset: u32,
    /// Start of the submesh descriptor table.
    pub mesh_offset: u32,
    /// Start of the vertex data region.
    pub vertex_offset: u32,
    /// Start of the index data region.
    pub index_offset: u32,
}

impl ModHeader {
    /// Reads the header fields without validating magic or version.
    pub fn from_bytes(bytes: &[u8; MOD_HEADER_SIZE]) -> Self {
        // SAFETY: The array is MOD_HEADER_SIZE (64) bytes long, every read ends at or before byte 64
        let mut reader = unsafe { LittleEndianReader::new(bytes.as_ptr()) };
        let mut word = |offset: usize| unsafe { reader.read_u32_at(offset as isize) };

        Self {
            magic: [bytes[0], bytes[1], bytes[2], bytes[3]],
            version_word: ModVersionWord(word(VERSION_WORD_OFFSET)),
            counts: ModCountsWord(word(COUNTS_WORD_OFFSET)),
            vertex_count: word(VERTEX_COUNT_OFFSET),
            face_count: word(FACE_COUNT_OFFSET),
            vertex_id_count: word(VERTEX_ID_COUNT_OFFSET),
            vertex_buffer_size: word(VERTEX_BUFFER_SIZE_OFFSET),
            second_buffer_size: word(SECOND_BUFFER_SIZE_OFFSET),
            group_count: word(GROUP_COUNT_OFFSET),
            bone_offset: word(BONE_OFFSET_OFFSET),
            group_offset: word(GROUP_OFFSET_OFFSET),
            texture_offset: word(TEXTURE_OFFSET_OFFSET),
            material_offset: word(MATERIAL_OFFSET_OFFSET),
            mesh_offset: word(MESH_OFFSET_OFFSET),
            vertex_offset: word(VERTEX_OFFSET_OFFSET),
            index_offset: word(INDEX_OFFSET_OFFSET),
        }
    }

    /// Container version.
    pub fn version(&self) -> u16 {
        self.version_word.version()
    }

    /// Number of bones.
    pub fn bone_count(&self) -> u16 {
        self.version_word.bone_count()
    }

    /// Number of submeshes.
    pub fn mesh_count(&self) -> usize {
        usize::from(self.counts.mesh_count())
    }

    /// Number of materials.
    pub fn material_count(&self) -> usize {
        usize::from(self.counts.material_count())
    }

    /// Whether the magic and version are the ones this crate reads.
    pub fn is_supported(&self) -> bool {
        self.magic == MOD_MAGIC && self.version() == MOD_VERSION
    }

    /// Fails with [`ModError::BadMagicOrVersion`] unless [`Self::is_supported`].
    pub fn validate(&self) -> ModResult<()> {
        if self.is_supported() {
            Ok(())
        } else {
            Err(ModError::BadMagicOrVersion {
                magic: self.magic,
                version: self.version(),
            })
        }
    }

    /// Absolute offset of submesh descriptor `index`.
    pub fn descriptor_offset(&self, index: usize) -> u64 {
        u64::from(self.mesh_offset) + (index * SUBMESH_DESCRIPTOR_SIZE) as u64
    }

    /// Absolute offset of material record `index`.
    pub fn material_record_offset(&self, index: usize) -> u64 {
        u64::from(self.material_offset) + (index * MATERIAL_RECORD_SIZE) as u64
    }
}

/// Parses and validates the header at the start of `data`.
///
/// # Errors
///
/// - [`ModError::TruncatedInput`] if `data` is shorter than 64 bytes.
/// - [`ModError::BadMagicOrVersion`] if the magic is not `MOD\0` or the version is not `0xE6`.
pub fn parse_mod_header(data: &[u8]) -> ModResult<ModHeader> {
    let bytes: &[u8; MOD_HEADER_SIZE] = data
        .get(..MOD_HEADER_SIZE)
        .and_then(|header| header.try_into().ok())
        .ok_or(ModError::TruncatedInput {
            required: MOD_HEADER_SIZE,
            actual: data.len(),
        })?;

    let header = ModHeader::from_bytes(bytes);
    header.validate()?;

    tracing::debug!(
        meshes = header.mesh_count(),
        materials = header.material_count(),
        bones = header.bone_count(),
        vertices = header.vertex_count,
        faces = header.face_count,
        "parsed mod header"
    );
    Ok(header)
}

/// Reads and validates a header from `reader`, consuming exactly 64 bytes.
///
/// Nothing past the header is read, whether or not it is valid.
#[cfg(feature = "std")]
pub fn read_mod_header<R: std::io::Read>(reader: &mut R) -> ModResult<ModHeader> {
    let bytes = mh4u_assets_common::io::read_up_to(reader, MOD_HEADER_SIZE)?;
    parse_mod_header(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn parses_every_field() {
        let data = ModFixture::new().build();
        let header = parse_mod_header(&data).unwrap();
        let expected = ModFixture::new().header();

        assert_eq!(header, expected);
        assert_eq!(header.version(), MOD_VERSION);
        assert_eq!(header.mesh_count(), 0);
    }

    #[test]
    fn u16_pairs_unpack() {
        let version = ModVersionWord::pack(0xE6, 42);
        assert_eq!(version.version(), 0xE6);
        assert_eq!(version.bone_count(), 42);

        let counts = ModCountsWord::pack(3, 0xBEEF);
        assert_eq!(counts.mesh_count(), 3);
        assert_eq!(counts.material_count(), 0xBEEF);
    }

    #[rstest]
    #[case(*b"MOD\0", 0xE5)]
    #[case(*b"MOD\0", 0xE7)]
    #[case(*b"MOD ", 0xE6)]
    #[case(*b"TEX\0", 0xE6)]
    fn rejects_bad_magic_or_version(#[case] magic: [u8; 4], #[case] version: u16) {
        let data = ModFixture::new().magic(magic).version(version).build();
        assert!(matches!(
            parse_mod_header(&data),
            Err(ModError::BadMagicOrVersion { magic: m, version: v }) if m == magic && v == version
        ));
    }

    #[test]
    fn rejects_short_header() {
        let data = ModFixture::new().build();
        assert!(matches!(
            parse_mod_header(&data[..63]),
            Err(ModError::TruncatedInput { required: 64, actual: 63 })
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn header_mismatch_stops_before_reading_past_header() {
        // Anything past byte 64 would fail with an I/O error instead.
        let data = ModFixture::new().version(0x10).build();
        let mut reader = FailAfter::new(data, MOD_HEADER_SIZE);
        assert!(matches!(
            read_mod_header(&mut reader),
            Err(ModError::BadMagicOrVersion { version: 0x10, .. })
        ));
    }

    #[test]
    fn region_offsets() {
        let header = ModFixture::new().header();
        assert_eq!(
            header.descriptor_offset(2),
            u64::from(header.mesh_offset) + 96
        );
        assert_eq!(
            header.material_record_offset(1),
            u64::from(header.material_offset) + 128
        );
    }
}
