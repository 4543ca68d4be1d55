use crate::error::ExportError;
use crate::sinks::obj::{write_mtl, write_obj};
use image::{ImageFormat, RgbaImage};
use mh4u_assets_api::{AssetSink, DecodedTexture, Mesh};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Writes textures as PNG files and collects submeshes for [`ExportSink::write_model`].
pub struct ExportSink {
    /// Where the next texture is written.
    texture_path: PathBuf,
    materials: Vec<String>,
    meshes: Vec<(usize, Mesh)>,
}

impl ExportSink {
    pub fn new(texture_path: PathBuf) -> Self {
        Self {
            texture_path,
            materials: Vec::new(),
            meshes: Vec::new(),
        }
    }

    /// Writes the collected submeshes to `obj_path`. If `texture` is given, a `.mtl`
    /// next to it binds that image to every submesh.
    pub fn write_model(&self, obj_path: &Path, texture: Option<&Path>) -> Result<(), ExportError> {
        let material = match texture {
            Some(texture) => {
                let mtl_path = obj_path.with_extension("mtl");
                let name = mtl_name(obj_path);
                let mut writer = BufWriter::new(File::create(&mtl_path)?);
                write_mtl(&mut writer, &name, &relative_to(texture, obj_path))?;
                Some((mtl_path, name))
            }
            None => None,
        };

        let mut writer = BufWriter::new(File::create(obj_path)?);
        let material = material.as_ref().map(|(path, name)| {
            (relative_to(path, obj_path), name.as_str())
        });
        write_obj(&mut writer, &self.meshes, &self.materials, material)?;
        tracing::info!(path = %obj_path.display(), submeshes = self.meshes.len(), "wrote model");
        Ok(())
    }
}

fn mtl_name(obj_path: &Path) -> String {
    obj_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("material"))
}

/// `path` as referenced from a file next to `from`; only the file name if they
/// share a directory.
fn relative_to(path: &Path, from: &Path) -> String {
    let same_dir = path.parent() == from.parent();
    match (same_dir, path.file_name()) {
        (true, Some(name)) => name.to_string_lossy().into_owned(),
        _ => path.to_string_lossy().into_owned(),
    }
}

impl AssetSink for ExportSink {
    type Error = ExportError;

    fn accept_texture(&mut self, name: &str, texture: DecodedTexture) -> Result<(), ExportError> {
        let (width, height) = (texture.pixels.width(), texture.pixels.height());
        let mut image = RgbaImage::from_raw(width, height, texture.pixels.to_rgba8())
            .ok_or(ExportError::ImageSize { width, height })?;
        // Decoded rows are bottom-up, PNG rows top-down.
        image::imageops::flip_vertical_in_place(&mut image);

        if let Some(parent) = self.texture_path.parent() {
            fs::create_dir_all(parent)?;
        }
        image.save_with_format(&self.texture_path, ImageFormat::Png)?;
        tracing::info!(
            name,
            path = %self.texture_path.display(),
            width,
            height,
            "wrote texture"
        );
        Ok(())
    }

    fn accept_mesh(&mut self, index: usize, mesh: Mesh) -> Result<(), ExportError> {
        tracing::debug!(
            index,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangles.len(),
            "collected submesh"
        );
        self.meshes.push((index, mesh));
        Ok(())
    }

    fn accept_materials(&mut self, names: &[String]) -> Result<(), ExportError> {
        self.materials = names.to_vec();
        Ok(())
    }
}
