//! Project configuration (`modelsync.yaml`)
//!
//! Names the target language, where generated files go, and which sample
//! payloads feed each root model. Relative paths resolve against the
//! directory holding the configuration file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, config as config_error};
use crate::language::Language;

/// Default configuration file name, looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "modelsync.yaml";

/// Output directory used when the configuration names none
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "Models";

fn default_output_directory() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
}

/// Configuration from modelsync.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Project name written into file headers (defaults to the config directory name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Target language
    pub language: Language,

    /// Package or namespace for languages that declare one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Root models and their sample payloads
    #[serde(default)]
    pub models: Vec<ModelSource>,

    /// Directory the configuration was loaded from
    #[serde(skip)]
    pub project_directory: PathBuf,
}

/// A root model and the payload files that describe it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelSource {
    pub name: String,

    /// File paths or glob patterns, relative to the project directory
    #[serde(default)]
    pub sources: Vec<String>,
}

impl ConfigFile {
    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(config_error::not_found(display));
        }

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config_error::read_failed(display.clone(), e.to_string()))?;
        let mut config: Self = serde_yaml::from_str(&yaml)
            .map_err(|e| config_error::parse_failed(display.clone(), e.to_string()))?;
        config.validate()?;

        let absolute = dunce::canonicalize(path)
            .map_err(|e| config_error::read_failed(display, e.to_string()))?;
        config.project_directory = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        tracing::debug!(
            path = %absolute.display(),
            models = config.models.len(),
            language = %config.language,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Validate model declarations
    pub fn validate(&self) -> Result<()> {
        if self.models.is_empty() {
            return Err(config_error::invalid("at least one model is required"));
        }

        let mut seen = HashSet::new();
        for model in &self.models {
            if !is_model_name(&model.name) {
                return Err(config_error::invalid(format!(
                    "model name '{}' must start with a letter and contain only letters, digits or '_'",
                    model.name
                )));
            }
            if !seen.insert(model.name.as_str()) {
                return Err(config_error::invalid(format!(
                    "model '{}' is declared more than once",
                    model.name
                )));
            }
            if model.sources.is_empty() {
                return Err(config_error::invalid(format!(
                    "model '{}' has no sources",
                    model.name
                )));
            }
        }

        Ok(())
    }

    /// Project name for file headers
    pub fn project_name(&self) -> String {
        if let Some(project) = &self.project {
            return project.clone();
        }
        self.project_directory
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "modelsync".to_string())
    }

    /// Output directory resolved against the project directory
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output_directory)
    }

    /// Resolve a path from the configuration against the project directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_directory.join(path)
        }
    }
}

/// Identifier starting with an ASCII letter, then letters, digits or `_`
pub fn is_model_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
