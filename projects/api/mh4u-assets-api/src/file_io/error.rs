//! Error types for path based loading.

use crate::error::LoadError;
use core::convert::Infallible;
use thiserror::Error;

/// Result type for path based loading. `E` is the sink's error type.
pub type FileOperationResult<T, E = Infallible> = Result<T, FileOperationError<E>>;

/// Errors that can occur while loading an asset from a path.
///
/// Either the file could not be opened and mapped, or its contents failed to load.
#[derive(Debug, Error)]
pub enum FileOperationError<E> {
    /// I/O operation failed
    #[error("I/O operation failed: {0}")]
    Io(#[from] FileIoError),

    /// Loading the mapped bytes failed
    #[error("Load failed: {0}")]
    Load(#[from] LoadError<E>),
}

/// Errors from the `lightweight-mmap` backend.
#[cfg(feature = "lightweight-mmap")]
#[derive(Debug, Error)]
pub enum LightweightMmapError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

/// File I/O errors from the mapping backend.
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error from lightweight-mmap backend
    #[cfg(feature = "lightweight-mmap")]
    #[error("lightweight-mmap error: {0}")]
    LightweightMmap(#[from] LightweightMmapError),
}

#[cfg(feature = "lightweight-mmap")]
impl<E> From<lightweight_mmap::handles::HandleOpenError> for FileOperationError<E> {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::Io(FileIoError::LightweightMmap(
            LightweightMmapError::FileHandle(e),
        ))
    }
}

#[cfg(feature = "lightweight-mmap")]
impl<E> From<lightweight_mmap::mmap::MmapError> for FileOperationError<E> {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::Io(FileIoError::LightweightMmap(
            LightweightMmapError::MemoryMapping(e),
        ))
    }
}
