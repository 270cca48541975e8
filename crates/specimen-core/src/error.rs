// this_file: crates/specimen-core/src/error.rs

//! Error types for specimen

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpecimenError>;

/// Main error type for specimen
#[derive(Debug, Error)]
pub enum SpecimenError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("Error accessing path {path:?}: {message}")]
    WalkAccess { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font format: {0}")]
    InvalidFontFormat(String),
}

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to allocate a {width}x{height} canvas")]
    PixmapCreationFailed { width: u32, height: u32 },
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Cannot create output directory {path:?}: {source}")]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {path:?}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpecimenError {
    /// Short machine-friendly kind, used in batch summaries
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FontLoad(FontLoadError::FileNotFound(_)) => "file-not-found",
            Self::FontLoad(FontLoadError::InvalidFontFormat(_)) => "invalid-font-format",
            Self::Render(_) => "render",
            Self::Export(_) => "io-write",
            Self::Io(_) => "io",
            Self::WalkAccess { .. } => "walk-access",
            Self::Config(_) => "config",
        }
    }
}
