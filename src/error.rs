// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Unsupported input file format: {}", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("File operation failed for {}: {source}", path.display())]
    FileOperation { path: PathBuf, source: io::Error },

    #[error("Search error: {0}")]
    Search(String),

    #[error("Extraction error: {0}")]
    Extraction(String),

    #[error("Document archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Document XML error: {0}")]
    Xml(String),

    #[error("PDF conversion failed: {0}")]
    Conversion(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl PipelineError {
    pub fn file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileOperation {
            path: path.into(),
            source,
        }
    }

    /// Underlying I/O error kind, if this error came from the filesystem.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::FileOperation { source, .. } => Some(source.kind()),
            Self::Io(source) => Some(source.kind()),
            Self::Zip(zip::result::ZipError::Io(source)) => Some(source.kind()),
            _ => None,
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnsupportedFormat { .. })
    }
}
