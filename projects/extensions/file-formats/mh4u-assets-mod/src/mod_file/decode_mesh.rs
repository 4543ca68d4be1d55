use super::descriptor::SubmeshDescriptor;
use super::header::ModHeader;
use super::settings::MeshDecodeSettings;
use super::vertex::{SkinInfluence, VertexRecord};
use crate::error::{ModError, ModResult};
use crate::strips::{decode_strips_with_mode, index_stream_from_bytes, Triangle};
use alloc::vec::Vec;

/// The decoded geometry of one submesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<[f32; 3]>,
    /// One UV per vertex, or empty if the submesh has none (or UV decoding was off).
    pub uvs: Vec<[f32; 2]>,
    /// One influence per vertex, when the records carry skinning and it was requested.
    pub skin: Option<Vec<SkinInfluence>>,
    /// Triangles indexing into `positions`.
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Whether the mesh carries UVs.
    pub fn has_uvs(&self) -> bool {
        !self.uvs.is_empty()
    }

    /// Builds a mesh from a submesh's raw vertex records and index stream.
    ///
    /// `vertex_data` must hold at least `vertex_count * stride` bytes. The index stream
    /// is decoded as far as it goes.
    pub fn from_raw(
        vertex_data: &[u8],
        index_data: &[u8],
        descriptor: &SubmeshDescriptor,
        settings: &MeshDecodeSettings,
    ) -> ModResult<Self> {
        descriptor.validate_stride()?;
        let stride = descriptor.stride();
        let vertex_count = descriptor.vertex_count();
        let required = descriptor.vertex_data_len();
        if vertex_data.len() < required {
            return Err(ModError::TruncatedInput {
                required,
                actual: vertex_data.len(),
            });
        }

        let records = vertex_data[..required]
            .chunks_exact(stride)
            .filter_map(VertexRecord::new);

        let decode_uvs = settings.decode_uvs && descriptor.has_uvs();
        let decode_skin = settings.decode_skin && descriptor.has_skin();
        let mut mesh = Mesh {
            positions: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(if decode_uvs { vertex_count } else { 0 }),
            skin: decode_skin.then(|| Vec::with_capacity(vertex_count)),
            triangles: Vec::new(),
        };

        for record in records {
            mesh.positions.push(record.position());
            if decode_uvs {
                if let Some(uv) = record.uv() {
                    mesh.uvs.push(uv);
                }
            }
            if let (Some(skin), Some(influence)) = (mesh.skin.as_mut(), record.skin()) {
                skin.push(influence);
            }
        }

        let indices = index_stream_from_bytes(index_data);
        mesh.triangles =
            decode_strips_with_mode(&indices, descriptor.vertex_start_index, settings.strip_mode)?;

        if let Some(&index) = mesh
            .triangles
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertex_count)
        {
            return Err(ModError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }

        tracing::debug!(
            vertices = mesh.positions.len(),
            triangles = mesh.triangles.len(),
            uvs = mesh.has_uvs(),
            skinned = mesh.skin.is_some(),
            "decoded submesh"
        );
        Ok(mesh)
    }
}

/// The part of `data` at `offset`, at most `len` bytes long.
fn region(data: &[u8], offset: u64, len: usize) -> &[u8] {
    let Ok(start) = usize::try_from(offset) else {
        return &[];
    };
    let available = data.get(start..).unwrap_or(&[]);
    &available[..available.len().min(len)]
}

/// Index stream bytes must cover all `index_count` indices; the extra trailing index is optional.
fn check_index_region(index_data: &[u8], descriptor: &SubmeshDescriptor) -> ModResult<()> {
    let required = descriptor.index_data_len() - 2;
    if index_data.len() < required {
        return Err(ModError::TruncatedInput {
            required,
            actual: index_data.len(),
        });
    }
    Ok(())
}

/// Decodes one submesh of an in-memory container with default settings.
pub fn decode_mesh_submesh(
    data: &[u8],
    header: &ModHeader,
    descriptor: &SubmeshDescriptor,
) -> ModResult<Mesh> {
    decode_mesh_submesh_with_settings(data, header, descriptor, &MeshDecodeSettings::default())
}

/// Decodes one submesh of an in-memory container.
///
/// # Errors
///
/// - [`ModError::VertexStrideTooSmall`] if records cannot hold a position.
/// - [`ModError::TruncatedInput`] if the vertex records or index stream run past `data`.
/// - [`ModError::Strip`] if the index stream is malformed.
/// - [`ModError::IndexOutOfRange`] if a triangle references a missing vertex.
pub fn decode_mesh_submesh_with_settings(
    data: &[u8],
    header: &ModHeader,
    descriptor: &SubmeshDescriptor,
    settings: &MeshDecodeSettings,
) -> ModResult<Mesh> {
    descriptor.validate_stride()?;
    let vertex_data = region(
        data,
        descriptor.vertex_data_offset(header),
        descriptor.vertex_data_len(),
    );
    let index_data = region(
        data,
        descriptor.index_data_offset(header),
        descriptor.index_data_len(),
    );
    check_index_region(index_data, descriptor)?;
    Mesh::from_raw(vertex_data, index_data, descriptor, settings)
}

/// Decodes one submesh from a seekable source.
///
/// Reads only the submesh's vertex records and index stream.
#[cfg(feature = "std")]
pub fn read_submesh<R: std::io::Read + std::io::Seek>(
    reader: &mut R,
    header: &ModHeader,
    descriptor: &SubmeshDescriptor,
    settings: &MeshDecodeSettings,
) -> ModResult<Mesh> {
    use mh4u_assets_common::io::read_up_to;
    use std::io::SeekFrom;

    descriptor.validate_stride()?;
    reader.seek(SeekFrom::Start(descriptor.vertex_data_offset(header)))?;
    let vertex_data = read_up_to(reader, descriptor.vertex_data_len())?;
    if vertex_data.len() < descriptor.vertex_data_len() {
        return Err(ModError::TruncatedInput {
            required: descriptor.vertex_data_len(),
            actual: vertex_data.len(),
        });
    }

    reader.seek(SeekFrom::Start(descriptor.index_data_offset(header)))?;
    let index_data = read_up_to(reader, descriptor.index_data_len())?;
    check_index_region(&index_data, descriptor)?;

    Mesh::from_raw(&vertex_data, &index_data, descriptor, settings)
}
