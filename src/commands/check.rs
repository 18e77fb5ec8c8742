//! Check command implementation

use std::path::PathBuf;

use console::Style;

use super::helpers::{load_config, render_models};
use crate::error::{ModelSyncError, Result};
use crate::generator::{HeaderContext, ModelGenerator};
use crate::source;
use crate::ui::display::Summary;

/// Run check command: fail when generating would change any file
pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let models = source::collect(&config)?;
    let generator = ModelGenerator::new(
        config.language,
        HeaderContext::from_config(&config),
        config.output_path(),
    );

    let files = render_models(&generator, &models, true)?;

    let summary = Summary::from_files(&files);
    if summary.changed() > 0 {
        let mut stale: Vec<&str> = files
            .iter()
            .filter(|f| f.is_changed())
            .map(|f| f.model.as_str())
            .collect();
        stale.dedup();
        return Err(ModelSyncError::ModelsOutOfDate {
            models: stale.join(", "),
        });
    }

    println!(
        "{} {} models up to date ({})",
        Style::new().green().bold().apply_to("✓"),
        models.len(),
        summary.line()
    );
    Ok(())
}
