use super::constants::*;
use crate::error::{TexError, TexResult};
use alloc::vec::Vec;
use bitfield::bitfield;
use endian_writer::{EndianReader, LittleEndianReader};
use mh4u_assets_etc1::{ETC1A4_BLOCK_SIZE, ETC1_BLOCK_SIZE};

bitfield! {
    /// The flags word at offset 4.
    ///
    /// Bit layout:
    /// - Bits 0-11: Constant, same value in every known file.
    /// - Bits 12-23: Unused.
    /// - Bits 24-27: Size shift.
    /// - Bits 28-31: Unused.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TexFlags(u32);
    impl Debug;
    u32;

    /// Constant (bits 0-11)
    pub constant, _: 11, 0;
    /// Size shift (bits 24-27)
    pub u8, size_shift, _: 27, 24;
}

bitfield! {
    /// The geometry word at offset 8.
    ///
    /// Bit layout:
    /// - Bits 0-5: Mipmap count.
    /// - Bits 6-18: Width in pixels.
    /// - Bits 19-31: Height in pixels.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TexGeometry(u32);
    impl Debug;
    u32;

    /// Number of mipmap levels (bits 0-5)
    pub mipmap_count, _: 5, 0;
    /// Width in pixels (bits 6-18)
    pub width, _: 18, 6;
    /// Height in pixels (bits 19-31)
    pub height, _: 31, 19;
}

bitfield! {
    /// The format word at offset 12.
    ///
    /// Bit layout:
    /// - Bits 0-7: Unused.
    /// - Bits 8-15: Pixel type code.
    /// - Bits 16-31: Unused.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TexFormat(u32);
    impl Debug;
    u32;

    /// Pixel type code (bits 8-15)
    pub u8, pixel_type, _: 15, 8;
}

impl TexFlags {
    /// Wraps a raw flags word.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl TexGeometry {
    /// Wraps a raw geometry word.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Packs a geometry word from its fields. Values are truncated to their bit widths.
    pub const fn pack(mipmap_count: u32, width: u32, height: u32) -> Self {
        Self((mipmap_count & 0x3F) | ((width & 0x1FFF) << 6) | ((height & 0x1FFF) << 19))
    }

    /// The raw geometry word.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

impl TexFormat {
    /// Wraps a raw format word.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Packs a format word holding only a pixel type code.
    pub const fn with_pixel_type(code: u8) -> Self {
        Self((code as u32) << 8)
    }

    /// The raw format word.
    pub const fn raw(&self) -> u32 {
        self.0
    }
}

/// The pixel encodings a `.tex` container can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TexPixelFormat {
    /// Opaque ETC1, 8 bytes per 4x4 block.
    Etc1 = PIXEL_TYPE_ETC1,
    /// ETC1 with 4-bit explicit alpha, 16 bytes per 4x4 block.
    Etc1A4 = PIXEL_TYPE_ETC1A4,
}

impl TexPixelFormat {
    /// Maps a header pixel type code to a format.
    pub fn from_code(code: u8) -> TexResult<Self> {
        match code {
            PIXEL_TYPE_ETC1 => Ok(Self::Etc1),
            PIXEL_TYPE_ETC1A4 => Ok(Self::Etc1A4),
            other => Err(TexError::UnsupportedPixelFormat(other)),
        }
    }

    /// Whether each block carries 64 bits of alpha ahead of its colour.
    pub fn has_alpha(self) -> bool {
        self == Self::Etc1A4
    }

    /// Size of one compressed block in bytes.
    pub fn block_size(self) -> usize {
        match self {
            Self::Etc1 => ETC1_BLOCK_SIZE,
            Self::Etc1A4 => ETC1A4_BLOCK_SIZE,
        }
    }

    /// Size of the level 0 payload; `w*h/2` for ETC1, `w*h` for ETC1A4.
    pub fn payload_len(self, width: u32, height: u32) -> usize {
        let blocks = (width as usize / BLOCK_SIZE) * (height as usize / BLOCK_SIZE);
        blocks * self.block_size()
    }
}

/// A parsed `.tex` header, including the mipmap offset table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexHeader {
    /// Magic tag as stored; normally [`TEX_MAGIC`].
    pub magic: [u8; 4],
    /// Flags word.
    pub flags: TexFlags,
    /// Mipmap count and dimensions.
    pub geometry: TexGeometry,
    /// Pixel type.
    pub format: TexFormat,
    /// One offset per mipmap level, as stored.
    pub mipmap_offsets: Vec<u32>,
}

impl TexHeader {
    /// Width of mip level 0 in pixels.
    pub fn width(&self) -> u32 {
        self.geometry.width()
    }

    /// Height of mip level 0 in pixels.
    pub fn height(&self) -> u32 {
        self.geometry.height()
    }

    /// Number of mipmap levels.
    pub fn mipmap_count(&self) -> u32 {
        self.geometry.mipmap_count()
    }

    /// The raw pixel type code.
    pub fn pixel_type(&self) -> u8 {
        self.format.pixel_type()
    }

    /// The pixel format, if the code is one we can decode.
    pub fn pixel_format(&self) -> TexResult<TexPixelFormat> {
        TexPixelFormat::from_code(self.pixel_type())
    }

    /// Offset of the block stream from the start of the container.
    pub fn data_offset(&self) -> usize {
        data_offset_for(self.mipmap_count())
    }
}

/// Offset of the block stream for a container with `mipmap_count` levels.
#[inline]
pub fn data_offset_for(mipmap_count: u32) -> usize {
    TEX_HEADER_SIZE + mipmap_count as usize * MIPMAP_OFFSET_ENTRY_SIZE
}

/// The three packed words of the fixed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FixedHeader {
    pub magic: [u8; 4],
    pub flags: TexFlags,
    pub geometry: TexGeometry,
    pub format: TexFormat,
}

/// Reads the fixed 16 byte part of the header.
pub(crate) fn parse_fixed_header(data: &[u8]) -> TexResult<FixedHeader> {
    if data.len() < TEX_HEADER_SIZE {
        return Err(TexError::TruncatedInput {
            required: TEX_HEADER_SIZE,
            actual: data.len(),
        });
    }

    let magic = [data[0], data[1], data[2], data[3]];

    // SAFETY: We checked data.len() >= TEX_HEADER_SIZE (16), so reading words at 4, 8 and 12 is safe
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let flags = unsafe { reader.read_u32_at(TEX_FLAGS_OFFSET as isize) };
    let geometry = unsafe { reader.read_u32_at(TEX_GEOMETRY_OFFSET as isize) };
    let format = unsafe { reader.read_u32_at(TEX_FORMAT_OFFSET as isize) };

    Ok(FixedHeader {
        magic,
        flags: TexFlags(flags),
        geometry: TexGeometry(geometry),
        format: TexFormat(format),
    })
}

/// Reads `count` mipmap offsets from the start of `table`.
pub(crate) fn parse_mipmap_offsets(table: &[u8], count: u32) -> TexResult<Vec<u32>> {
    let required = count as usize * MIPMAP_OFFSET_ENTRY_SIZE;
    if table.len() < required {
        return Err(TexError::TruncatedInput {
            required,
            actual: table.len(),
        });
    }

    Ok(table[..required]
        .chunks_exact(MIPMAP_OFFSET_ENTRY_SIZE)
        .map(|entry| u32::from_le_bytes([entry[0], entry[1], entry[2], entry[3]]))
        .collect())
}

impl FixedHeader {
    pub(crate) fn with_mipmap_offsets(self, mipmap_offsets: Vec<u32>) -> TexHeader {
        TexHeader {
            magic: self.magic,
            flags: self.flags,
            geometry: self.geometry,
            format: self.format,
            mipmap_offsets,
        }
    }
}

/// Parses a `.tex` header from the start of `data`.
///
/// The magic tag is kept but not checked, and the pixel type is not validated here;
/// use [`TexHeader::pixel_format`] for that. This makes the function suitable for
/// inspecting containers the decoder does not support.
///
/// # Errors
///
/// [`TexError::TruncatedInput`] if `data` ends inside the header or the mipmap table.
pub fn parse_tex_header(data: &[u8]) -> TexResult<TexHeader> {
    let fixed = parse_fixed_header(data)?;
    let count = fixed.geometry.mipmap_count();
    let offsets = parse_mipmap_offsets(&data[TEX_HEADER_SIZE..], count).map_err(|_| {
        TexError::TruncatedInput {
            required: data_offset_for(count),
            actual: data.len(),
        }
    })?;

    tracing::debug!(
        width = fixed.geometry.width(),
        height = fixed.geometry.height(),
        mipmap_count = count,
        pixel_type = fixed.format.pixel_type(),
        "parsed tex header"
    );

    Ok(fixed.with_mipmap_offsets(offsets))
}
