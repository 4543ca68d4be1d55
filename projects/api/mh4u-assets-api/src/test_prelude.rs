//! Common test imports and fixture builders for loader tests.
#![allow(unused_imports)]
#![allow(dead_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

pub use rstest::rstest;

use crate::sink::AssetSink;
use endian_writer::{EndianWriter, LittleEndianWriter};
use mh4u_assets_mod::Mesh;
use mh4u_assets_tex::DecodedTexture;
use thiserror::Error;

/// Builds small `.mod` containers: header, material table, descriptors, vertex
/// region, index region.
pub struct ModelBuilder {
    version: u16,
    materials: Vec<&'static str>,
    submeshes: Vec<(u8, Vec<[f32; 3]>, Vec<u16>)>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self {
            version: 0xE6,
            materials: Vec::new(),
            submeshes: Vec::new(),
        }
    }

    pub fn version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn material(mut self, name: &'static str) -> Self {
        self.materials.push(name);
        self
    }

    /// Adds a submesh whose records hold only a position; `indices` is the whole
    /// stream, including the extra index past `index_count`.
    pub fn submesh(mut self, stride: u8, positions: &[[f32; 3]], indices: &[u16]) -> Self {
        self.submeshes
            .push((stride, positions.to_vec(), indices.to_vec()));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let material_offset = 64;
        let mesh_offset = material_offset + self.materials.len() * 128;
        let vertex_offset = mesh_offset + self.submeshes.len() * 48;

        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        let mut descriptors = Vec::new();
        for (stride, positions, stream) in &self.submeshes {
            let words: [u32; 8] = [
                (positions.len() as u32) << 16,
                0,
                u32::from(*stride) << 16,
                0,
                vertices.len() as u32,
                0,
                (indices.len() / 2) as u32,
                stream.len().saturating_sub(1) as u32,
            ];
            let mut descriptor = [0u8; 48];
            let mut writer = unsafe { LittleEndianWriter::new(descriptor.as_mut_ptr()) };
            for (i, word) in words.iter().enumerate() {
                unsafe { writer.write_u32_at(*word, (i * 4) as isize) };
            }
            descriptors.extend_from_slice(&descriptor);

            for position in positions {
                let mut record = vec![0u8; usize::from(*stride)];
                for (i, value) in position.iter().enumerate() {
                    record[i * 4..i * 4 + 4].copy_from_slice(&value.to_le_bytes());
                }
                vertices.extend_from_slice(&record);
            }
            for index in stream {
                indices.extend_from_slice(&index.to_le_bytes());
            }
        }
        let index_offset = vertex_offset + vertices.len();

        let mut data = vec![0u8; 64];
        data[..4].copy_from_slice(b"MOD\0");
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        unsafe {
            writer.write_u32_at(u32::from(self.version), 4);
            writer.write_u32_at(
                self.submeshes.len() as u32 | (self.materials.len() as u32) << 16,
                8,
            );
            writer.write_u32_at(material_offset as u32, 48);
            writer.write_u32_at(mesh_offset as u32, 52);
            writer.write_u32_at(vertex_offset as u32, 56);
            writer.write_u32_at(index_offset as u32, 60);
        }

        for name in &self.materials {
            let mut record = [0u8; 128];
            record[..name.len()].copy_from_slice(name.as_bytes());
            data.extend_from_slice(&record);
        }
        data.extend_from_slice(&descriptors);
        data.extend_from_slice(&vertices);
        data.extend_from_slice(&indices);
        data
    }
}

/// An 8x8 ETC1 texture whose pixels are all the grey of `nibble`.
pub fn solid_etc1_texture(nibble: u8) -> Vec<u8> {
    let mut data = vec![0u8; 20];
    data[..4].copy_from_slice(b"TEX\0");
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(0x20, 4);
        writer.write_u32_at(1 | 8 << 6 | 8 << 19, 8);
        writer.write_u32_at(11 << 8, 12);
        writer.write_u32_at(0, 16);
    }

    let channel = nibble << 4 | nibble;
    for _ in 0..4 {
        data.extend_from_slice(&[0, 0, 0, 0, 0, channel, channel, channel]);
    }
    data
}

/// The RGBA8 pixel of [`solid_etc1_texture`]; the smallest modifier adds 2.
pub fn solid_etc1_rgba8(nibble: u8) -> [u8; 4] {
    let value = nibble * 17 + 2;
    [value, value, value, 255]
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("rejected")]
pub struct Rejected;

/// Fails every mesh and texture it is handed.
#[derive(Default)]
pub struct RejectingSink {
    pub calls: usize,
}

impl AssetSink for RejectingSink {
    type Error = Rejected;

    fn accept_texture(&mut self, _name: &str, _texture: DecodedTexture) -> Result<(), Rejected> {
        self.calls += 1;
        Err(Rejected)
    }

    fn accept_mesh(&mut self, _index: usize, _mesh: Mesh) -> Result<(), Rejected> {
        self.calls += 1;
        Err(Rejected)
    }
}
