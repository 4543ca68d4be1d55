//! Drives the format crates over whole files and feeds a sink.

use crate::error::LoadError;
use crate::sink::AssetSink;
use alloc::string::String;
use alloc::vec::Vec;
use mh4u_assets_mod::{
    decode_mesh_submesh_with_settings, material_names, parse_mod_header, submesh_descriptor, Mesh,
    MeshDecodeSettings, ModError, ModHeader, ModResult,
};
use mh4u_assets_tex::decode_texture;

/// Options for [`load_model`] and [`load_model_from_slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LoadSettings {
    /// How each submesh is decoded.
    pub mesh: MeshDecodeSettings,
    /// Log and skip a submesh that fails to decode instead of aborting the load.
    ///
    /// Header errors and sink errors always abort.
    pub continue_on_error: bool,
}

/// What a model load delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    /// The model's header.
    pub header: ModHeader,
    /// Number of submeshes handed to the sink.
    pub delivered: usize,
    /// Submeshes that failed to decode and were skipped.
    pub skipped: Vec<usize>,
}

impl ModelSummary {
    fn new(header: ModHeader) -> Self {
        Self {
            header,
            delivered: 0,
            skipped: Vec::new(),
        }
    }
}

/// Decodes a texture held in memory and hands it to `sink` under `name`.
pub fn load_texture_from_slice<S: AssetSink>(
    data: &[u8],
    name: &str,
    sink: &mut S,
) -> Result<(), LoadError<S::Error>> {
    let texture = decode_texture(data)?;
    tracing::debug!(
        name,
        width = texture.header.width(),
        height = texture.header.height(),
        "loaded texture"
    );
    sink.accept_texture(name, texture).map_err(LoadError::Sink)
}

/// Reads and decodes a texture, then hands it to `sink` under `name`.
#[cfg(feature = "std")]
pub fn load_texture<R: std::io::Read, S: AssetSink>(
    reader: &mut R,
    name: &str,
    sink: &mut S,
) -> Result<(), LoadError<S::Error>> {
    let texture = mh4u_assets_tex::read_texture(reader)?;
    tracing::debug!(
        name,
        width = texture.header.width(),
        height = texture.header.height(),
        "loaded texture"
    );
    sink.accept_texture(name, texture).map_err(LoadError::Sink)
}

/// Decodes every submesh of a model held in memory.
///
/// Material names go to [`AssetSink::accept_materials`] first, then each submesh to
/// [`AssetSink::accept_mesh`] in increasing index order. An unreadable material table
/// is logged and forwarded as an empty list; it never stops the submeshes.
///
/// # Errors
///
/// - [`LoadError::Model`] if the header is invalid, or a submesh fails and
///   [`LoadSettings::continue_on_error`] is not set.
/// - [`LoadError::Sink`] if the sink rejects anything.
pub fn load_model_from_slice<S: AssetSink>(
    data: &[u8],
    sink: &mut S,
    settings: &LoadSettings,
) -> Result<ModelSummary, LoadError<S::Error>> {
    let header = parse_mod_header(data)?;
    forward_materials(material_names(data, &header), sink)?;

    let mut summary = ModelSummary::new(header);
    for index in 0..header.mesh_count() {
        let mesh = submesh_descriptor(data, &header, index).and_then(|descriptor| {
            decode_mesh_submesh_with_settings(data, &header, &descriptor, &settings.mesh)
        });
        forward_mesh(index, mesh, sink, settings, &mut summary)?;
    }
    Ok(summary)
}

/// Reads every submesh of a model from a seekable source.
///
/// Behaves like [`load_model_from_slice`]. A bad header is reported without reading
/// past it.
#[cfg(feature = "std")]
pub fn load_model<R: std::io::Read + std::io::Seek, S: AssetSink>(
    reader: R,
    sink: &mut S,
    settings: &LoadSettings,
) -> Result<ModelSummary, LoadError<S::Error>> {
    let mut model = mh4u_assets_mod::ModFile::open(reader)?;
    let names = model.read_material_names();
    forward_materials(names, sink)?;

    let mut summary = ModelSummary::new(*model.header());
    for index in 0..model.submesh_count() {
        let mesh = model.read_submesh(index, &settings.mesh);
        forward_mesh(index, mesh, sink, settings, &mut summary)?;
    }
    Ok(summary)
}

fn forward_materials<S: AssetSink>(
    names: ModResult<Vec<String>>,
    sink: &mut S,
) -> Result<(), LoadError<S::Error>> {
    let names = names.unwrap_or_else(|error| {
        tracing::warn!(%error, "material names unreadable, continuing without them");
        Vec::new()
    });
    sink.accept_materials(&names).map_err(LoadError::Sink)
}

fn forward_mesh<S: AssetSink>(
    index: usize,
    mesh: Result<Mesh, ModError>,
    sink: &mut S,
    settings: &LoadSettings,
    summary: &mut ModelSummary,
) -> Result<(), LoadError<S::Error>> {
    match mesh {
        Ok(mesh) => {
            sink.accept_mesh(index, mesh).map_err(LoadError::Sink)?;
            summary.delivered += 1;
            Ok(())
        }
        Err(error) if settings.continue_on_error => {
            tracing::warn!(index, %error, "skipping submesh");
            summary.skipped.push(index);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
