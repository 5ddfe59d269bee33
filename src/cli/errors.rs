use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },

    #[error("Extension must not be empty or start with '.', got: {extension:?}")]
    InvalidExtension { extension: String },

    #[error("Run finished with {errors} failed item(s)")]
    ItemsFailed { errors: usize },

    #[error(transparent)]
    Lib(#[from] crate::Error),
}
