//! Shared helpers for commands

use std::path::PathBuf;

use crate::config::{CONFIG_FILE_NAME, ConfigFile};
use crate::error::Result;
use crate::generator::{GeneratedFile, ModelGenerator};
use crate::schema::ModelSet;
use crate::ui;

/// Load the configuration from `path`, or `modelsync.yaml` in the current directory
pub fn load_config(path: Option<PathBuf>) -> Result<ConfigFile> {
    let path = path.unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    ConfigFile::load(&path)
}

/// Render every model, showing progress when there are several
pub fn render_models(
    generator: &ModelGenerator,
    models: &ModelSet,
    quiet: bool,
) -> Result<Vec<GeneratedFile>> {
    let mut reporter = ui::reporter_for(models.len(), quiet);
    let mut files = Vec::new();

    for (name, source) in models.iter() {
        reporter.start_model(name);
        match generator.generate_model(name, source) {
            Ok(rendered) => files.extend(rendered),
            Err(e) => {
                reporter.abandon();
                return Err(e);
            }
        }
        reporter.finish_model();
    }

    reporter.finish();
    Ok(files)
}
