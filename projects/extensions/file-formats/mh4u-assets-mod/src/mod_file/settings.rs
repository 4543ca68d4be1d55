use crate::strips::StripMode;

/// Controls which vertex channels are decoded and how index streams are checked.
///
/// # Example
///
/// ```
/// use mh4u_assets_mod::{MeshDecodeSettings, StripMode};
///
/// let settings = MeshDecodeSettings {
///     decode_skin: false,
///     strip_mode: StripMode::Strict,
///     ..Default::default()
/// };
/// assert!(settings.decode_uvs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshDecodeSettings {
    /// Decode UVs when the vertex stride has room for them.
    pub decode_uvs: bool,
    /// Decode bone indices and weights when the vertex stride has room for them.
    pub decode_skin: bool,
    /// Handling of strips with too few indices.
    pub strip_mode: StripMode,
}

impl Default for MeshDecodeSettings {
    fn default() -> Self {
        Self {
            decode_uvs: true,
            decode_skin: true,
            strip_mode: StripMode::Lenient,
        }
    }
}
