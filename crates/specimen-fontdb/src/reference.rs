// this_file: crates/specimen-fontdb/src/reference.rs

//! Where the plain label font comes from
//!
//! Decorative or symbol fonts can make their own name unreadable, so every
//! sheet also carries the title in a sober reference face. Rendering only
//! sees a [`Font`]; providers decide how the bytes are obtained.

use std::path::PathBuf;

use specimen_core::Result;

use crate::Font;

/// DejaVu Sans Bold, compiled into the binary
static EMBEDDED_REFERENCE: &[u8] = include_bytes!("../../../fonts/DejaVuSans-Bold.ttf");

/// Supplies the font used for the secondary title label
pub trait ReferenceFontProvider: Send + Sync {
    /// Short description for logs
    fn describe(&self) -> String;

    fn load(&self) -> Result<Font>;
}

/// The reference font bundled at build time
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedReference;

impl ReferenceFontProvider for EmbeddedReference {
    fn describe(&self) -> String {
        "embedded DejaVu Sans Bold".to_string()
    }

    fn load(&self) -> Result<Font> {
        Font::from_data(EMBEDDED_REFERENCE.to_vec(), "DejaVuSans-Bold.ttf")
    }
}

/// A reference font read from disk
#[derive(Debug, Clone)]
pub struct FileReference {
    path: PathBuf,
}

impl FileReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReferenceFontProvider for FileReference {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Font> {
        Font::from_file(&self.path)
    }
}
