use super::decode_mesh::{read_submesh, Mesh};
use super::descriptor::{read_submesh_descriptor, SubmeshDescriptor};
use super::header::{read_mod_header, ModHeader};
use super::materials::read_material_names;
use super::settings::MeshDecodeSettings;
use crate::error::ModResult;
use alloc::string::String;
use alloc::vec::Vec;
use std::io::{Read, Seek, SeekFrom};

/// A `.mod` container opened over a seekable byte source.
///
/// The header is read and validated on [`ModFile::open`]; submeshes and material names
/// are read on demand. The source is owned and released on drop.
#[derive(Debug)]
pub struct ModFile<R> {
    reader: R,
    header: ModHeader,
}

impl<R: Read + Seek> ModFile<R> {
    /// Reads and validates the header.
    ///
    /// # Errors
    ///
    /// [`crate::ModError::BadMagicOrVersion`] without reading past byte 64, or an
    /// I/O / truncation error.
    pub fn open(mut reader: R) -> ModResult<Self> {
        reader.seek(SeekFrom::Start(0))?;
        let header = read_mod_header(&mut reader)?;
        Ok(Self { reader, header })
    }

    /// The container header.
    pub fn header(&self) -> &ModHeader {
        &self.header
    }

    /// Number of submeshes.
    pub fn submesh_count(&self) -> usize {
        self.header.mesh_count()
    }

    /// Reads descriptor `index`.
    pub fn read_descriptor(&mut self, index: usize) -> ModResult<SubmeshDescriptor> {
        read_submesh_descriptor(&mut self.reader, &self.header, index)
    }

    /// Reads and decodes submesh `index`.
    pub fn read_submesh(&mut self, index: usize, settings: &MeshDecodeSettings) -> ModResult<Mesh> {
        let descriptor = self.read_descriptor(index)?;
        tracing::debug!(index, ?descriptor, "reading submesh");
        read_submesh(&mut self.reader, &self.header, &descriptor, settings)
    }

    /// Reads the names of all materials.
    pub fn read_material_names(&mut self) -> ModResult<Vec<String>> {
        read_material_names(&mut self.reader, &self.header)
    }

    /// Returns the underlying source.
    pub fn into_inner(self) -> R {
        self.reader
    }
}
