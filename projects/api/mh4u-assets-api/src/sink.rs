//! The host side of loading.

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::Infallible;
use mh4u_assets_mod::Mesh;
use mh4u_assets_tex::DecodedTexture;

/// Receives decoded assets.
///
/// Loaders call the methods in file order: materials first, then submeshes in
/// increasing index order. Returning an error aborts the load with
/// [`crate::LoadError::Sink`].
pub trait AssetSink {
    /// Error reported by the sink.
    type Error: core::error::Error + 'static;

    /// Receives a decoded texture.
    fn accept_texture(&mut self, name: &str, texture: DecodedTexture) -> Result<(), Self::Error>;

    /// Receives a decoded submesh.
    fn accept_mesh(&mut self, index: usize, mesh: Mesh) -> Result<(), Self::Error>;

    /// Receives the model's material names. Ignored by default.
    fn accept_materials(&mut self, names: &[String]) -> Result<(), Self::Error> {
        let _ = names;
        Ok(())
    }
}

/// A sink that keeps everything it receives.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Textures with the name they were loaded under.
    pub textures: Vec<(String, DecodedTexture)>,
    /// Submeshes with their index in the model.
    pub meshes: Vec<(usize, Mesh)>,
    /// Material names of the last loaded model.
    pub materials: Vec<String>,
}

impl AssetSink for MemorySink {
    type Error = Infallible;

    fn accept_texture(&mut self, name: &str, texture: DecodedTexture) -> Result<(), Self::Error> {
        self.textures.push((String::from(name), texture));
        Ok(())
    }

    fn accept_mesh(&mut self, index: usize, mesh: Mesh) -> Result<(), Self::Error> {
        self.meshes.push((index, mesh));
        Ok(())
    }

    fn accept_materials(&mut self, names: &[String]) -> Result<(), Self::Error> {
        self.materials = names.to_vec();
        Ok(())
    }
}
