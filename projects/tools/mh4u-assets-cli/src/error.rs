use mh4u_assets_api::FileOperationError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`crate::sinks::ExportSink`] while writing decoded assets.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("Pixel buffer does not match {width}x{height}")]
    ImageSize { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    FileOperation(#[from] FileOperationError<ExportError>),
    #[error(transparent)]
    Texture(#[from] mh4u_assets_tex::TexError),
    #[error(transparent)]
    Model(#[from] mh4u_assets_mod::ModError),
    #[error("{0}: not a .tex or .mod file")]
    UnknownFormat(PathBuf),
}
