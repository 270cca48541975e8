// this_file: crates/specimen-cli/src/walk.rs

//! Font discovery under a directory tree

use std::path::{Path, PathBuf};

use specimen_core::{Result, SpecimenError};
use walkdir::WalkDir;

/// Name endings that mark a font file; matched case-sensitively
pub const FONT_SUFFIXES: [&str; 2] = [".ttf", ".otf"];

pub fn has_font_suffix(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| FONT_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Lazily yields every font-named entry below `root`, in file-name order.
///
/// Directories are never yielded. A traversal failure is yielded as
/// [`SpecimenError::WalkAccess`]; the caller decides whether to go on.
pub fn font_candidates(root: &Path) -> impl Iterator<Item = Result<PathBuf>> {
    let root = root.to_path_buf();
    WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                if !entry.file_type().is_dir() && has_font_suffix(entry.path()) {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            },
            Err(err) => Some(Err(SpecimenError::WalkAccess {
                path: err.path().map_or_else(|| root.clone(), Path::to_path_buf),
                message: err.to_string(),
            })),
        })
}
