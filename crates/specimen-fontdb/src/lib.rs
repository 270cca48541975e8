// this_file: crates/specimen-fontdb/src/lib.rs

//! Font loading for specimen sheets
//!
//! A [`Font`] owns the bytes of one font file and hands out parsed views on
//! demand. Parsing succeeds or fails on content alone; the file extension is
//! never consulted here.

pub mod names;
pub mod reference;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use specimen_core::error::{FontLoadError, Result, SpecimenError};

pub use names::{name_label, FontNames, NameEntry, NAME_IDS};
pub use reference::{EmbeddedReference, FileReference, ReferenceFontProvider};

/// A parsed-and-validated font held in memory
pub struct Font {
    data: Vec<u8>,
    source: String,
    units_per_em: u16,
}

impl Font {
    /// Reads and validates a font file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => {
                SpecimenError::from(FontLoadError::FileNotFound(path.display().to_string()))
            },
            _ => SpecimenError::Io(err),
        })?;

        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_data(data, source)
    }

    /// Validates raw bytes as a TrueType/OpenType font.
    ///
    /// Collections are accepted and their first face is used.
    pub fn from_data(data: Vec<u8>, source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let font_ref = ReadFontRef::from_index(&data, 0)
            .map_err(|err| FontLoadError::InvalidFontFormat(format!("{}: {}", source, err)))?;

        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .unwrap_or(1000);

        Ok(Font {
            data,
            source,
            units_per_em,
        })
    }

    /// Parsed view for skrifa metadata and outline access
    pub fn font_ref(&self) -> Result<skrifa::FontRef<'_>> {
        skrifa::FontRef::from_index(&self.data, 0).map_err(|err| {
            SpecimenError::from(FontLoadError::InvalidFontFormat(format!(
                "{}: {}",
                self.source, err
            )))
        })
    }

    /// File name the font came from, or a label for in-memory fonts
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    pub fn glyph_count(&self) -> Option<u32> {
        ReadFontRef::from_index(&self.data, 0)
            .ok()
            .and_then(|font| font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32))
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("source", &self.source)
            .field("bytes", &self.data.len())
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_invalid_format() {
        let result = Font::from_data(vec![0; 100], "zeros.ttf");
        assert!(matches!(
            result,
            Err(SpecimenError::FontLoad(FontLoadError::InvalidFontFormat(_)))
        ));
    }

    #[test]
    fn test_empty_is_invalid_format() {
        assert!(Font::from_data(Vec::new(), "empty.otf").is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = Font::from_file("/nonexistent/path/to/font.ttf");
        assert!(matches!(
            result,
            Err(SpecimenError::FontLoad(FontLoadError::FileNotFound(_)))
        ));
    }

    #[test]
    fn test_embedded_reference_parses() {
        let font = EmbeddedReference.load().unwrap();
        assert_eq!(font.units_per_em(), 2048);
        assert!(font.glyph_count().unwrap_or(0) > 100);
        assert!(font.font_ref().is_ok());
    }
}
