//! Common test imports and fixture builders for `.tex` tests.
#![allow(unused_imports)]
#![allow(dead_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

pub use rstest::rstest;

use crate::tex::constants::*;
use crate::tex::header::{TexFormat, TexGeometry, TexPixelFormat};
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Builds `.tex` containers for tests.
pub struct TexFixture {
    pixel_type: u8,
    width: u32,
    height: u32,
    mipmap_offsets: Vec<u32>,
    payload: Option<Vec<u8>>,
}

impl TexFixture {
    /// A single-level container; the payload defaults to zeroed blocks of the right size.
    pub fn new(pixel_type: u8, width: u32, height: u32) -> Self {
        Self {
            pixel_type,
            width,
            height,
            mipmap_offsets: vec![0],
            payload: None,
        }
    }

    pub fn mipmap_offsets(mut self, offsets: &[u32]) -> Self {
        self.mipmap_offsets = offsets.to_vec();
        self
    }

    pub fn payload(mut self, payload: &[u8]) -> Self {
        self.payload = Some(payload.to_vec());
        self
    }

    pub fn build(self) -> Vec<u8> {
        let payload = self.payload.unwrap_or_else(|| {
            let len = TexPixelFormat::from_code(self.pixel_type)
                .map(|f| f.payload_len(self.width, self.height))
                .unwrap_or(0);
            vec![0u8; len]
        });

        let data_offset = TEX_HEADER_SIZE + self.mipmap_offsets.len() * 4;
        let mut data = vec![0u8; data_offset + payload.len()];
        data[..4].copy_from_slice(&TEX_MAGIC);

        let geometry =
            TexGeometry::pack(self.mipmap_offsets.len() as u32, self.width, self.height);
        let format = TexFormat::with_pixel_type(self.pixel_type);

        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe {
            writer.write_u32_at(0x0000_0020, 4);
            writer.write_u32_at(geometry.raw(), 8);
            writer.write_u32_at(format.raw(), 12);
            for (i, offset) in self.mipmap_offsets.iter().enumerate() {
                writer.write_u32_at(*offset, (TEX_HEADER_SIZE + i * 4) as isize);
            }
        }

        data[data_offset..].copy_from_slice(&payload);
        data
    }
}

/// An ETC1 block whose 16 pixels all decode to [`solid_etc1_value`]`(nibble)`.
///
/// Individual mode, both sub-blocks set to `nibble` on every channel, table 0,
/// all modifier indices 0.
pub fn solid_etc1_block(nibble: u8) -> [u8; 8] {
    let channel = (nibble << 4) | (nibble & 0xF);
    [0, 0, 0, 0, 0, channel, channel, channel]
}

/// Grey level produced by [`solid_etc1_block`]: the expanded nibble plus modifier +2.
pub fn solid_etc1_value(nibble: u8) -> u8 {
    (u32::from(nibble & 0xF) * 17 + 2).min(255) as u8
}

/// ETC1 block with base greys 136/68, tables 0/1, flip clear, and modifier index
/// equal to the pixel's row.
pub const GRADIENT_ETC1_BLOCK: [u8; 8] = [0xAA, 0xAA, 0xCC, 0xCC, 0x04, 0x84, 0x84, 0x84];

/// Payload of the 8x8 fixture: the gradient block, then solid 0x3, 0x7 and 0xA blocks.
pub fn etc1_fixture_payload() -> Vec<u8> {
    let mut payload = Vec::with_capacity(32);
    payload.extend_from_slice(&GRADIENT_ETC1_BLOCK);
    payload.extend_from_slice(&solid_etc1_block(0x3));
    payload.extend_from_slice(&solid_etc1_block(0x7));
    payload.extend_from_slice(&solid_etc1_block(0xA));
    payload
}

/// Expected grey level of each output pixel of the 8x8 fixture, row 0 first.
pub const EXPECTED_8X8_FIXTURE_GREY: [[u8; 8]; 8] = [
    [121, 121, 121, 121, 172, 172, 172, 172],
    [121, 121, 121, 121, 172, 172, 172, 172],
    [121, 121, 121, 121, 172, 172, 172, 172],
    [121, 121, 121, 121, 172, 172, 172, 172],
    [128, 128, 51, 51, 53, 53, 53, 53],
    [134, 134, 63, 63, 53, 53, 53, 53],
    [144, 144, 85, 85, 53, 53, 53, 53],
    [138, 138, 73, 73, 53, 53, 53, 53],
];

/// [`EXPECTED_8X8_FIXTURE_GREY`] as packed RGBA8.
pub fn expected_8x8_fixture_rgba8() -> Vec<u8> {
    EXPECTED_8X8_FIXTURE_GREY
        .iter()
        .flatten()
        .flat_map(|&v| [v, v, v, 255])
        .collect()
}

/// A reader over `data` that fails any read starting at or after byte `limit`.
#[cfg(feature = "std")]
pub struct FailAfter {
    data: Vec<u8>,
    position: usize,
    limit: usize,
}

#[cfg(feature = "std")]
impl FailAfter {
    pub fn new(data: Vec<u8>, limit: usize) -> Self {
        Self {
            data,
            position: 0,
            limit,
        }
    }
}

#[cfg(feature = "std")]
impl std::io::Read for FailAfter {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.position >= self.limit {
            return Err(std::io::Error::other("read past the allowed range"));
        }
        let end = self.data.len().min(self.limit).min(self.position + buf.len());
        let count = end.saturating_sub(self.position);
        buf[..count].copy_from_slice(&self.data[self.position..end]);
        self.position = end;
        Ok(count)
    }
}
