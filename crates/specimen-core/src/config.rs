// this_file: crates/specimen-core/src/config.rs

//! Render configuration
//!
//! Everything one specimen sheet depends on, apart from the font itself.
//! The same config is shared read-only by every file in a batch.

use std::path::PathBuf;

use crate::error::{Result, SpecimenError};
use crate::layout::MARGIN;

/// Lines drawn below the title when no custom text is given
pub const DEFAULT_SAMPLE_LINES: [&str; 3] = [
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!?%&1234567890üöäÜÖÄßéèáà@",
];

/// Glyph hinting mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hinting {
    #[default]
    None,
    Full,
}

/// What to do with a title wider than the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleFit {
    /// Center regardless of width; overflow is clipped on both edges
    #[default]
    Center,
    /// Draw the title at a smaller size so it spans at most the canvas width
    ShrinkToFit,
}

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 2000,
            height: 800,
        }
    }
}

/// Parameters for rendering one specimen sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SpecimenConfig {
    pub canvas: CanvasSize,
    /// Font size in points
    pub size: f32,
    /// Screen resolution in dots per inch
    pub dpi: f32,
    pub hinting: Hinting,
    /// Line spacing multiplier (2.0 means double spaced)
    pub spacing: f32,
    pub title_fit: TitleFit,
    pub sample_lines: Vec<String>,
    /// Directory that receives `<font basename>.png`
    pub outdir: PathBuf,
}

impl Default for SpecimenConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            size: 100.0,
            dpi: 72.0,
            hinting: Hinting::None,
            spacing: 1.5,
            title_fit: TitleFit::Center,
            sample_lines: DEFAULT_SAMPLE_LINES.iter().map(|s| s.to_string()).collect(),
            outdir: PathBuf::from("png"),
        }
    }
}

impl SpecimenConfig {
    /// Pixels per em for the configured size and resolution
    pub fn pixels_per_em(&self) -> f32 {
        self.size * self.dpi / 72.0
    }

    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(SpecimenError::Config(format!(
                "Canvas must not be empty: {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        for (name, value) in [
            ("size", self.size),
            ("dpi", self.dpi),
            ("spacing", self.spacing),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SpecimenError::Config(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        // Every baseline, down to the last sample line, must fit in i32
        let ppem = self.size as f64 * self.dpi as f64 / 72.0;
        let advance = (ppem * self.spacing as f64).ceil();
        let lines = self.sample_lines.len() as f64 + 2.0;
        let last_baseline = MARGIN as f64 + ppem.ceil() + advance * lines;
        if last_baseline > i32::MAX as f64 {
            return Err(SpecimenError::Config(format!(
                "size {} at {} dpi with spacing {} puts lines beyond the pixel range",
                self.size, self.dpi, self.spacing
            )));
        }
        Ok(())
    }
}

/// Splits custom sample text into lines.
///
/// The separator is the two-character sequence `\n` as typed on a command
/// line, not a newline character. Real newlines stay inside their line.
pub fn split_sample_text(wanted: &str) -> Vec<String> {
    wanted.split("\\n").map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpecimenConfig::default();
        assert_eq!(config.canvas, CanvasSize { width: 2000, height: 800 });
        assert_eq!(config.size, 100.0);
        assert_eq!(config.dpi, 72.0);
        assert_eq!(config.spacing, 1.5);
        assert_eq!(config.hinting, Hinting::None);
        assert_eq!(config.title_fit, TitleFit::Center);
        assert_eq!(config.sample_lines.len(), 3);
        assert_eq!(config.outdir, PathBuf::from("png"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_pixels_per_em() {
        let config = SpecimenConfig {
            size: 12.0,
            dpi: 144.0,
            ..SpecimenConfig::default()
        };
        assert_eq!(config.pixels_per_em(), 24.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty = SpecimenConfig {
            canvas: CanvasSize { width: 0, height: 800 },
            ..SpecimenConfig::default()
        };
        assert!(empty.validate().is_err());

        let negative = SpecimenConfig {
            spacing: -1.0,
            ..SpecimenConfig::default()
        };
        assert!(negative.validate().is_err());

        let nan = SpecimenConfig {
            dpi: f32::NAN,
            ..SpecimenConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_sizes_beyond_pixel_range() {
        let huge = SpecimenConfig {
            size: 1.0e10,
            ..SpecimenConfig::default()
        };
        let err = huge.validate().unwrap_err();
        assert_eq!(err.kind(), "config");

        let many_lines = SpecimenConfig {
            size: 1.0e7,
            sample_lines: vec!["x".to_string(); 200],
            ..SpecimenConfig::default()
        };
        assert!(many_lines.validate().is_err());

        let large_but_fine = SpecimenConfig {
            size: 10_000.0,
            ..SpecimenConfig::default()
        };
        assert!(large_but_fine.validate().is_ok());
    }

    #[test]
    fn test_split_on_literal_backslash_n() {
        assert_eq!(split_sample_text("Abc\\nXyz\\nMno"), vec!["Abc", "Xyz", "Mno"]);
    }

    #[test]
    fn test_split_keeps_real_newlines() {
        assert_eq!(split_sample_text("Abc\nXyz"), vec!["Abc\nXyz"]);
    }

    #[test]
    fn test_split_single_line() {
        assert_eq!(split_sample_text("Hamburgefonstiv"), vec!["Hamburgefonstiv"]);
    }
}
