//! Path based loading using lightweight-mmap.

use crate::file_io::FileOperationResult;
use crate::loader::{load_model_from_slice, load_texture_from_slice, LoadSettings, ModelSummary};
use crate::sink::AssetSink;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Maps `path` and runs `operation` over its bytes. Empty files are passed as an
/// empty slice, since they cannot be mapped.
fn with_mapped_file<T, E>(
    path: &Path,
    operation: impl FnOnce(&[u8]) -> FileOperationResult<T, E>,
) -> FileOperationResult<T, E> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    if size == 0 {
        return operation(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    operation(mapping.as_slice())
}

/// Loads the texture at `path` into `sink`, named after the file.
///
/// # Example
///
/// ```no_run
/// use mh4u_assets_api::file_io::load_texture_file;
/// use mh4u_assets_api::MemorySink;
/// use std::path::Path;
///
/// let mut sink = MemorySink::default();
/// load_texture_file(Path::new("hunter_face.tex"), &mut sink).unwrap();
/// assert_eq!(sink.textures[0].0, "hunter_face.tex");
/// ```
pub fn load_texture_file<S: AssetSink>(
    path: &Path,
    sink: &mut S,
) -> FileOperationResult<(), S::Error> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    with_mapped_file(path, |data| {
        Ok(load_texture_from_slice(data, &name, sink)?)
    })
}

/// Loads every submesh of the model at `path` into `sink`.
pub fn load_model_file<S: AssetSink>(
    path: &Path,
    sink: &mut S,
    settings: &LoadSettings,
) -> FileOperationResult<ModelSummary, S::Error> {
    with_mapped_file(path, |data| {
        let summary = load_model_from_slice(data, sink, settings)?;
        tracing::debug!(
            path = %path.display(),
            delivered = summary.delivered,
            skipped = summary.skipped.len(),
            "loaded model"
        );
        Ok(summary)
    })
}
