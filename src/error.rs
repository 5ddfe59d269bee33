//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image, resampler, HTTP, and archive errors, and provides
//! semantic variants for precondition, collision, and argument failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input directory is not a valid directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("Image file {} already exists", path.display())]
    Collision { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Manifest {} lists no archive URLs", path.display())]
    EmptyManifest { path: PathBuf },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    /// True for failures that abort a run even when per-item collection is enabled.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::NotADirectory { .. } | Error::ZeroSize { .. } | Error::InvalidArgument { .. }
        )
    }
}

impl From<fast_image_resize::ResizeError> for Error {
    fn from(e: fast_image_resize::ResizeError) -> Self {
        Error::Resize(e.to_string())
    }
}

impl From<fast_image_resize::ImageBufferError> for Error {
    fn from(e: fast_image_resize::ImageBufferError) -> Self {
        Error::Resize(e.to_string())
    }
}
