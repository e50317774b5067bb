use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressError {
    #[error("Invalid input path: {0} does not exist or is not a directory")]
    InvalidInput(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid target width: {0}. Must be greater than 0")]
    InvalidTargetWidth(u32),

    #[error("Failed to create output directory: {0}")]
    DirectoryCreationFailed(PathBuf),

    #[error("External transcoder failed for {path}: {stderr}")]
    ExternalTool { path: PathBuf, stderr: String },

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, CompressError>;
