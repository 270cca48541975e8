// this_file: crates/specimen-cli/src/batch.rs

//! Batch driver
//!
//! Every font file goes through load, names, render and write on its own.
//! A failure is logged against that file and the batch moves on; nothing
//! is shared between files except the read-only config and reference font.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use specimen_core::{Result, SpecimenConfig, SpecimenError};
use specimen_export::{write_specimen, PngExporter};
use specimen_fontdb::{Font, FontNames};
use specimen_render_skia::SpecimenRenderer;

use crate::walk::font_candidates;

/// What a batch did
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Output files, in the order they were written
    pub written: Vec<PathBuf>,
    /// Files that could not be loaded, rendered or written
    pub failed: usize,
    /// Explicit paths that did not exist
    pub skipped: usize,
    /// Traversal error that ended a walk early
    pub walk_error: Option<SpecimenError>,
}

impl BatchSummary {
    pub fn log(&self) {
        log::info!(
            "Done: {} written, {} failed, {} skipped",
            self.written.len(),
            self.failed,
            self.skipped
        );
    }

    fn record(&mut self, path: &Path, result: Result<PathBuf>) {
        match result {
            Ok(written) => self.written.push(written),
            Err(err) => {
                log::error!("{}: {} ({})", path.display(), err, err.kind());
                self.failed += 1;
            },
        }
    }
}

/// Renders specimen sheets for many fonts with one configuration
pub struct BatchRunner<'a> {
    config: &'a SpecimenConfig,
    reference: &'a Font,
    exporter: PngExporter,
    parallel: bool,
}

impl<'a> BatchRunner<'a> {
    pub fn new(config: &'a SpecimenConfig, reference: &'a Font) -> Self {
        Self {
            config,
            reference,
            exporter: PngExporter::new(),
            parallel: false,
        }
    }

    /// Render files on the rayon pool instead of one after another
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs one font file through the whole pipeline and returns the PNG path
    pub fn process_font(&self, path: &Path) -> Result<PathBuf> {
        let basename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        log::info!("Reading \"{}\"", basename);

        let font = Font::from_file(path)?;
        log::debug!(
            "{}: {} units per em, {} glyphs",
            basename,
            font.units_per_em(),
            font.glyph_count().unwrap_or(0)
        );

        let names = FontNames::from_font(&font)?;
        names.log();

        let renderer = SpecimenRenderer::new(self.config);
        log::debug!("{}: rendering with {}", basename, renderer.name());
        let rendered = renderer.render(&font, names.full_name(), self.reference)?;

        write_specimen(&self.exporter, &self.config.outdir, path, &rendered.bitmap)
    }

    /// Processes explicit paths; missing ones are skipped with a warning
    pub fn run_paths(&self, paths: &[PathBuf]) -> BatchSummary {
        let mut summary = BatchSummary::default();
        let mut present = Vec::with_capacity(paths.len());
        for path in paths {
            if path.exists() {
                present.push(path.clone());
            } else {
                log::warn!("Missing file {}, skipping", path.display());
                summary.skipped += 1;
            }
        }
        self.render_all(&present, &mut summary);
        summary
    }

    /// Processes every font file under `root`.
    ///
    /// Fails only when `root` is not a directory. A traversal error stops the
    /// walk; files already handled keep their output and the error is kept
    /// in [`BatchSummary::walk_error`].
    pub fn run_walk(&self, root: &Path) -> Result<BatchSummary> {
        if !root.is_dir() {
            return Err(SpecimenError::Config(format!(
                "Walk root {} is not a directory",
                root.display()
            )));
        }

        let mut summary = BatchSummary::default();
        if self.parallel {
            let mut paths = Vec::new();
            for candidate in font_candidates(root) {
                match candidate {
                    Ok(path) => paths.push(path),
                    Err(err) => {
                        log::error!("{}", err);
                        summary.walk_error = Some(err);
                        break;
                    },
                }
            }
            self.render_all(&paths, &mut summary);
        } else {
            for candidate in font_candidates(root) {
                match candidate {
                    Ok(path) => {
                        let result = self.process_font(&path);
                        summary.record(&path, result);
                    },
                    Err(err) => {
                        log::error!("{}", err);
                        summary.walk_error = Some(err);
                        break;
                    },
                }
            }
        }
        Ok(summary)
    }

    fn render_all(&self, paths: &[PathBuf], summary: &mut BatchSummary) {
        if self.parallel {
            let results: Vec<(&PathBuf, Result<PathBuf>)> = paths
                .par_iter()
                .map(|path| (path, self.process_font(path)))
                .collect();
            for (path, result) in results {
                summary.record(path, result);
            }
        } else {
            for path in paths {
                let result = self.process_font(path);
                summary.record(path, result);
            }
        }
    }
}
