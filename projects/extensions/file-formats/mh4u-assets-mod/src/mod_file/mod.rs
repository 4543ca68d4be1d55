/// Layout constants of the `.mod` container.
pub mod constants;

/// Decode a submesh's vertices and triangles.
pub mod decode_mesh;

/// Submesh descriptors.
pub mod descriptor;

/// The container header.
pub mod header;

/// Material name table.
pub mod materials;

/// A container opened over a reader.
#[cfg(feature = "std")]
pub mod model_file;

/// Decode options.
pub mod settings;

/// Vertex records.
pub mod vertex;

pub use decode_mesh::*;
pub use descriptor::*;
pub use header::*;
pub use materials::*;
#[cfg(feature = "std")]
pub use model_file::*;
pub use settings::*;
pub use vertex::*;
