//! Error types for loading assets into a sink.

use mh4u_assets_mod::ModError;
use mh4u_assets_tex::TexError;
use thiserror::Error;

/// Errors that can occur while loading an asset into a sink.
///
/// `E` is the error type of the sink, see [`crate::AssetSink::Error`].
#[derive(Debug, Error)]
pub enum LoadError<E> {
    /// The texture could not be decoded.
    #[error("Texture decoding failed: {0}")]
    Texture(#[from] TexError),

    /// The model could not be decoded.
    #[error("Model decoding failed: {0}")]
    Model(#[from] ModError),

    /// The sink refused the decoded data.
    #[error("Sink rejected asset: {0}")]
    Sink(#[source] E),
}
