//! Common test imports and fixture builders for `.mod` tests.
#![allow(unused_imports)]
#![allow(dead_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

pub use rstest::rstest;

use crate::mod_file::constants::*;
use crate::mod_file::descriptor::{DescriptorCountWord, DescriptorLayoutWord, SubmeshDescriptor};
use crate::mod_file::header::{ModCountsWord, ModHeader, ModVersionWord};
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Serializes a descriptor into its 48 byte form.
pub fn descriptor_bytes(descriptor: &SubmeshDescriptor) -> [u8; SUBMESH_DESCRIPTOR_SIZE] {
    let mut bytes = [0u8; SUBMESH_DESCRIPTOR_SIZE];
    let words = [
        descriptor.count_word.raw(),
        descriptor.attributes,
        descriptor.layout_word.raw(),
        descriptor.vertex_start_index,
        descriptor.vertex_offset,
        descriptor.vertex_format,
        descriptor.index_offset,
        descriptor.index_count,
        descriptor.trailer[0],
        descriptor.trailer[1],
        descriptor.trailer[2],
        descriptor.trailer[3],
    ];

    let mut writer = unsafe { LittleEndianWriter::new(bytes.as_mut_ptr()) };
    for (i, word) in words.iter().enumerate() {
        unsafe { writer.write_u32_at(*word, (i * 4) as isize) };
    }
    bytes
}

/// A `stride` byte vertex record; bytes not covered by a channel are zero.
pub fn vertex_record_bytes(
    stride: usize,
    position: [f32; 3],
    uv: Option<[f32; 2]>,
    skin: Option<([u8; 4], [u8; 4])>,
) -> Vec<u8> {
    let mut record = vec![0u8; stride];
    for (i, value) in position.iter().enumerate() {
        record[i * 4..i * 4 + 4].copy_from_slice(&value.to_le_bytes());
    }
    if let Some(uv) = uv {
        for (i, value) in uv.iter().enumerate() {
            let start = UV_OFFSET + i * 4;
            record[start..start + 4].copy_from_slice(&value.to_le_bytes());
        }
    }
    if let Some((bones, weights)) = skin {
        for i in 0..4 {
            record[BONE_BYTE_OFFSETS[i]] = bones[i];
            record[WEIGHT_BYTE_OFFSETS[i]] = weights[i];
        }
    }
    record
}

/// Vertex records and index stream of one submesh.
#[derive(Clone)]
pub struct SubmeshFixture {
    stride: usize,
    vertex_start_index: u32,
    vertices: Vec<Vec<u8>>,
    indices: Vec<u16>,
}

impl SubmeshFixture {
    pub fn new(stride: usize) -> Self {
        Self {
            stride,
            vertex_start_index: 0,
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    pub fn vertex_start_index(mut self, start: u32) -> Self {
        self.vertex_start_index = start;
        self
    }

    pub fn position(mut self, position: [f32; 3]) -> Self {
        self.vertices
            .push(vertex_record_bytes(self.stride, position, None, None));
        self
    }

    pub fn vertex(mut self, position: [f32; 3], uv: [f32; 2]) -> Self {
        self.vertices
            .push(vertex_record_bytes(self.stride, position, Some(uv), None));
        self
    }

    pub fn skinned_vertex(
        mut self,
        position: [f32; 3],
        uv: [f32; 2],
        bones: [u8; 4],
        weights: [u8; 4],
    ) -> Self {
        self.vertices.push(vertex_record_bytes(
            self.stride,
            position,
            Some(uv),
            Some((bones, weights)),
        ));
        self
    }

    /// Replaces the index stream. The descriptor's `index_count` is one less than its
    /// length, since readers take one index past the count.
    pub fn indices(mut self, indices: &[u16]) -> Self {
        self.indices = indices.to_vec();
        self
    }
}

/// Builds `.mod` containers for tests.
///
/// Layout: header, material table, descriptor table, vertex region, then the index
/// region with nothing after it.
#[derive(Clone)]
pub struct ModFixture {
    magic: [u8; 4],
    version: u16,
    materials: Vec<String>,
    submeshes: Vec<SubmeshFixture>,
}

struct Layout {
    header: ModHeader,
    descriptors: Vec<SubmeshDescriptor>,
    vertex_region: Vec<u8>,
    index_region: Vec<u8>,
}

impl Default for ModFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ModFixture {
    pub fn new() -> Self {
        Self {
            magic: MOD_MAGIC,
            version: MOD_VERSION,
            materials: Vec::new(),
            submeshes: Vec::new(),
        }
    }

    pub fn magic(mut self, magic: [u8; 4]) -> Self {
        self.magic = magic;
        self
    }

    pub fn version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn materials(mut self, names: &[&str]) -> Self {
        self.materials = names.iter().map(|name| String::from(*name)).collect();
        self
    }

    pub fn submesh(mut self, submesh: SubmeshFixture) -> Self {
        self.submeshes.push(submesh);
        self
    }

    /// The header [`Self::build`] writes.
    pub fn header(&self) -> ModHeader {
        self.layout().header
    }

    fn layout(&self) -> Layout {
        let mut descriptors = Vec::new();
        let mut vertex_region = Vec::new();
        let mut index_region: Vec<u8> = Vec::new();
        let mut total_vertices = 0u32;
        let mut total_indices = 0u32;

        for submesh in &self.submeshes {
            let base = submesh.vertex_start_index as usize * submesh.stride;
            let position = vertex_region.len().max(base);
            vertex_region.resize(position, 0);
            for record in &submesh.vertices {
                vertex_region.extend_from_slice(record);
            }

            let index_count = submesh.indices.len().saturating_sub(1) as u32;
            descriptors.push(SubmeshDescriptor {
                count_word: DescriptorCountWord::pack(0, submesh.vertices.len() as u16),
                layout_word: DescriptorLayoutWord::pack(0, submesh.stride as u8, 0),
                vertex_start_index: submesh.vertex_start_index,
                vertex_offset: (position - base) as u32,
                index_offset: (index_region.len() / 2) as u32,
                index_count,
                ..Default::default()
            });
            for index in &submesh.indices {
                index_region.extend_from_slice(&index.to_le_bytes());
            }

            total_vertices += submesh.vertices.len() as u32;
            total_indices += index_count;
        }

        let material_offset = MOD_HEADER_SIZE;
        let mesh_offset = material_offset + self.materials.len() * MATERIAL_RECORD_SIZE;
        let vertex_offset = mesh_offset + descriptors.len() * SUBMESH_DESCRIPTOR_SIZE;
        let index_offset = vertex_offset + vertex_region.len();

        let header = ModHeader {
            magic: self.magic,
            version_word: ModVersionWord::pack(self.version, 3),
            counts: ModCountsWord::pack(descriptors.len() as u16, self.materials.len() as u16),
            vertex_count: total_vertices,
            face_count: total_indices,
            vertex_id_count: total_vertices,
            vertex_buffer_size: vertex_region.len() as u32,
            second_buffer_size: 0,
            group_count: 1,
            bone_offset: 0,
            group_offset: 0,
            texture_offset: 0,
            material_offset: material_offset as u32,
            mesh_offset: mesh_offset as u32,
            vertex_offset: vertex_offset as u32,
            index_offset: index_offset as u32,
        };

        Layout {
            header,
            descriptors,
            vertex_region,
            index_region,
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let layout = self.layout();
        let header = &layout.header;

        let mut data = vec![0u8; MOD_HEADER_SIZE];
        data[..4].copy_from_slice(&header.magic);
        let words = [
            header.version_word.raw(),
            header.counts.raw(),
            header.vertex_count,
            header.face_count,
            header.vertex_id_count,
            header.vertex_buffer_size,
            header.second_buffer_size,
            header.group_count,
            header.bone_offset,
            header.group_offset,
            header.texture_offset,
            header.material_offset,
            header.mesh_offset,
            header.vertex_offset,
            header.index_offset,
        ];
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        for (i, word) in words.iter().enumerate() {
            unsafe { writer.write_u32_at(*word, (4 + i * 4) as isize) };
        }

        for name in &self.materials {
            let mut record = [0u8; MATERIAL_RECORD_SIZE];
            let len = name.len().min(MATERIAL_NAME_SIZE);
            record[..len].copy_from_slice(&name.as_bytes()[..len]);
            data.extend_from_slice(&record);
        }
        for descriptor in &layout.descriptors {
            data.extend_from_slice(&descriptor_bytes(descriptor));
        }
        data.extend_from_slice(&layout.vertex_region);
        data.extend_from_slice(&layout.index_region);
        data
    }
}

/// A reader that fails on any read at or past `limit`.
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

#[cfg(feature = "std")]
impl std::io::Seek for FailAfter {
    fn seek(&mut self, pos: std::io::SeekFrom) -> std::io::Result<u64> {
        let target = match pos {
            std::io::SeekFrom::Start(offset) => offset as i64,
            std::io::SeekFrom::End(offset) => self.data.len() as i64 + offset,
            std::io::SeekFrom::Current(offset) => self.position as i64 + offset,
        };
        if target < 0 {
            return Err(std::io::Error::other("seek before start"));
        }
        self.position = target as usize;
        Ok(target as u64)
    }
}
