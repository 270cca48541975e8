// this_file: crates/specimen-cli/src/cli.rs

//! CLI argument definitions using Clap v4

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use specimen_core::{
    config::DEFAULT_SAMPLE_LINES, split_sample_text, CanvasSize, Hinting, SpecimenConfig,
    TitleFit,
};

/// Render a specimen sheet PNG for each TrueType/OpenType font
#[derive(Parser, Debug)]
#[command(name = "specimen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Font files to render (.ttf, .otf)
    pub fonts: Vec<PathBuf>,

    /// Single font file (kept for older scripts; merged with FONTS)
    #[arg(long = "fontfile")]
    pub fontfile: Option<PathBuf>,

    /// Recursively look for .ttf/.otf files under this directory
    #[arg(long = "walk")]
    pub walk: Option<PathBuf>,

    /// Screen resolution in dots per inch
    #[arg(long = "dpi", default_value_t = 72.0)]
    pub dpi: f32,

    /// Glyph hinting mode
    #[arg(long = "hinting", value_enum, default_value = "none")]
    pub hinting: HintingArg,

    /// Output directory, created if missing
    #[arg(long = "outdir", default_value = "png")]
    pub outdir: PathBuf,

    /// Font size in points
    #[arg(long = "size", default_value_t = 100.0)]
    pub size: f32,

    /// Line spacing (e.g. 2 means double spaced)
    #[arg(long = "spacing", default_value_t = 1.5)]
    pub spacing: f32,

    /// Canvas width in pixels
    #[arg(long = "width", default_value_t = 2000)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long = "height", default_value_t = 800)]
    pub height: u32,

    /// Custom sample text. Lines are separated by the two characters
    /// backslash and n (type `'one\ntwo'`); newline characters are not separators.
    #[arg(long = "wanted", verbatim_doc_comment)]
    pub wanted: Option<String>,

    /// Shrink the title to the canvas width instead of letting it overflow
    #[arg(long = "fit-title")]
    pub fit_title: bool,

    /// Font file for the plain title label (defaults to the built-in DejaVu Sans Bold)
    #[arg(long = "reference-font")]
    pub reference_font: Option<PathBuf>,

    /// Render files on all cores
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Only report warnings and errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Hinting modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum HintingArg {
    None,
    Full,
}

impl From<HintingArg> for Hinting {
    fn from(arg: HintingArg) -> Self {
        match arg {
            HintingArg::None => Hinting::None,
            HintingArg::Full => Hinting::Full,
        }
    }
}

impl Cli {
    /// Explicit font paths in the order given, `--fontfile` first
    pub fn font_paths(&self) -> Vec<PathBuf> {
        self.fontfile
            .iter()
            .chain(self.fonts.iter())
            .cloned()
            .collect()
    }

    pub fn to_config(&self) -> SpecimenConfig {
        let sample_lines = match &self.wanted {
            Some(wanted) => split_sample_text(wanted),
            None => DEFAULT_SAMPLE_LINES.iter().map(|s| s.to_string()).collect(),
        };

        SpecimenConfig {
            canvas: CanvasSize {
                width: self.width,
                height: self.height,
            },
            size: self.size,
            dpi: self.dpi,
            hinting: self.hinting.into(),
            spacing: self.spacing,
            title_fit: if self.fit_title {
                TitleFit::ShrinkToFit
            } else {
                TitleFit::Center
            },
            sample_lines,
            outdir: self.outdir.clone(),
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Warn
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let cli = Cli::parse_from(["specimen", "a.ttf"]);
        assert_eq!(cli.to_config(), SpecimenConfig::default());
        assert_eq!(cli.font_paths(), vec![PathBuf::from("a.ttf")]);
        assert_eq!(cli.log_level(), log::LevelFilter::Info);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "specimen",
            "--dpi",
            "144",
            "--hinting",
            "full",
            "--outdir",
            "out",
            "--size",
            "48",
            "--spacing",
            "2",
            "--width",
            "1200",
            "--height",
            "600",
            "--wanted",
            "Abc\\nXyz",
            "--fit-title",
            "--fontfile",
            "legacy.otf",
            "b.ttf",
        ]);
        let config = cli.to_config();
        assert_eq!(config.dpi, 144.0);
        assert_eq!(config.hinting, Hinting::Full);
        assert_eq!(config.outdir, PathBuf::from("out"));
        assert_eq!(config.size, 48.0);
        assert_eq!(config.spacing, 2.0);
        assert_eq!(config.canvas, CanvasSize { width: 1200, height: 600 });
        assert_eq!(config.sample_lines, vec!["Abc", "Xyz"]);
        assert_eq!(config.title_fit, TitleFit::ShrinkToFit);
        assert_eq!(
            cli.font_paths(),
            vec![PathBuf::from("legacy.otf"), PathBuf::from("b.ttf")]
        );
    }

    #[test]
    fn test_unknown_hinting_is_rejected() {
        assert!(Cli::try_parse_from(["specimen", "--hinting", "slight", "a.ttf"]).is_err());
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["specimen", "-q", "-v", "a.ttf"]).is_err());
        let cli = Cli::parse_from(["specimen", "--verbose", "a.ttf"]);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_no_inputs_parses() {
        let cli = Cli::parse_from(["specimen"]);
        assert!(cli.font_paths().is_empty());
        assert!(cli.walk.is_none());
    }
}
