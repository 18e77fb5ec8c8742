//! Generate command implementation

use std::path::PathBuf;

use tracing::info;

use super::helpers::{load_config, render_models};
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::generator::{HeaderContext, ModelGenerator};
use crate::source;
use crate::ui::display::{display_generated, display_orphans};

/// Run generate command
pub fn run(config_path: Option<PathBuf>, args: GenerateArgs, verbose: bool) -> Result<()> {
    let config = load_config(config_path)?;
    let language = args.language.unwrap_or(config.language);
    let output = args.output.unwrap_or_else(|| config.output_path());

    let models = source::collect(&config)?;
    let generator = ModelGenerator::new(language, HeaderContext::from_config(&config), output);
    info!(
        language = %language,
        output = %generator.output_dir().display(),
        dry_run = args.dry_run,
        "generating models"
    );

    let files = render_models(&generator, &models, args.dry_run)?;
    if !args.dry_run {
        generator.write(&files)?;
    }

    let orphans = generator.find_orphans(&files)?;
    let prune = args.prune && !args.dry_run;
    if prune {
        generator.prune(&orphans)?;
    }

    display_generated(&files, &config.project_directory, args.dry_run, verbose);
    display_orphans(&orphans, &config.project_directory, prune);

    Ok(())
}
