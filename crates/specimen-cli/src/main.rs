// this_file: crates/specimen-cli/src/main.rs

//! specimen - write a PNG specimen sheet for each font file

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use specimen_cli::{BatchRunner, Cli};
use specimen_fontdb::{EmbeddedReference, FileReference, ReferenceFontProvider};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level());

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        },
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let paths = cli.font_paths();
    if paths.is_empty() && cli.walk.is_none() {
        log::error!("No font given: pass font files, --fontfile <path> or --walk <dir>");
        return Ok(ExitCode::FAILURE);
    }

    let config = cli.to_config();
    config.validate().context("Invalid settings")?;

    let provider: Box<dyn ReferenceFontProvider> = match &cli.reference_font {
        Some(path) => Box::new(FileReference::new(path)),
        None => Box::new(EmbeddedReference),
    };
    let reference = provider
        .load()
        .with_context(|| format!("Cannot load reference font {}", provider.describe()))?;
    log::debug!("Reference font: {}", provider.describe());

    let runner = BatchRunner::new(&config, &reference).parallel(cli.parallel);
    let summary = match &cli.walk {
        Some(root) => {
            if !paths.is_empty() {
                log::warn!("--walk given, ignoring {} explicit font path(s)", paths.len());
            }
            runner.run_walk(root)?
        },
        None => runner.run_paths(&paths),
    };
    summary.log();

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging; RUST_LOG directives take precedence over the flag level.
fn init_logger(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
