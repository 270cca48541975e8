// this_file: crates/specimen-export/src/lib.rs

//! Output stage: PNG bytes and the files that hold them
//!
//! Output names derive from the input file, never from font metadata:
//! `fonts/FreeSansBold.ttf` becomes `<outdir>/FreeSansBold.ttf.png`.

pub mod png;

use std::fs;
use std::path::{Path, PathBuf};

use specimen_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

pub use png::{encode_bitmap_to_png, PngExporter};

/// Where the sheet for `font_path` goes inside `outdir`
pub fn output_path(outdir: &Path, font_path: &Path, extension: &str) -> PathBuf {
    let basename = font_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| font_path.display().to_string());
    outdir.join(format!("{}.{}", basename, extension))
}

/// Encodes `bitmap` with `exporter` and writes it next to its siblings in `outdir`.
///
/// The directory is created, with parents, when missing.
pub fn write_specimen(
    exporter: &dyn Exporter,
    outdir: &Path,
    font_path: &Path,
    bitmap: &BitmapData,
) -> Result<PathBuf> {
    fs::create_dir_all(outdir).map_err(|source| ExportError::CreateDirFailed {
        path: outdir.to_path_buf(),
        source,
    })?;

    let bytes = exporter.export(bitmap)?;
    log::debug!(
        "Encoded {} bytes of {} with the {} exporter",
        bytes.len(),
        exporter.mime_type(),
        exporter.name()
    );
    let path = output_path(outdir, font_path, exporter.extension());
    fs::write(&path, &bytes).map_err(|source| ExportError::WriteFailed {
        path: path.clone(),
        source,
    })?;

    log::info!("Written to \"{}\"", path.display());
    Ok(path)
}
