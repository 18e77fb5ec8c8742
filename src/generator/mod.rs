//! Model file generation
//!
//! This module handles:
//! - File headers and their dates (via header module)
//! - Assembling files from formatter pieces (via render module)
//! - Reading previous output for custom lines and change detection (via previous module)
//! - Writing changed files and finding orphaned ones (via `ModelGenerator`)

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::common::fs::{files_with_extensions, write_atomic};
use crate::error::{Result, fs as fs_error};
use crate::language::{Language, LanguageFormatter};
use crate::schema::{GeneratorDataSource, ModelSet};

pub mod header;
pub mod previous;
pub mod render;

pub use header::HeaderContext;
pub use previous::PreviousModel;
pub use render::render_file;

/// Text in the header of every generated file
pub const GENERATED_MARKER: &str = "Auto-Generated using modelsync";

/// Trailing comment that marks a hand-edited property line to keep on regeneration
pub const CUSTOM_MARKER: &str = "modelsync:custom";

/// What generating a file would do to the file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Created,
    Updated,
    Unchanged,
}

/// One rendered model file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub model: String,
    pub path: PathBuf,
    pub contents: String,
    pub status: FileStatus,
}

impl GeneratedFile {
    pub fn is_changed(&self) -> bool {
        self.status != FileStatus::Unchanged
    }
}

/// Renders every model of a [`ModelSet`] in one language into an output directory
pub struct ModelGenerator {
    language: Language,
    formatter: Box<dyn LanguageFormatter>,
    context: HeaderContext,
    output_dir: PathBuf,
}

impl ModelGenerator {
    pub fn new(language: Language, context: HeaderContext, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            language,
            formatter: language.formatter(),
            context,
            output_dir: output_dir.into(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render all models and compare them against the files already on disk
    pub fn generate(&self, models: &ModelSet) -> Result<Vec<GeneratedFile>> {
        let mut files = Vec::new();
        for (name, source) in models.iter() {
            files.extend(self.generate_model(name, source)?);
        }
        Ok(files)
    }

    /// Render one model (one file per formatter) and compare against disk
    pub fn generate_model(
        &self,
        name: &str,
        source: &GeneratorDataSource,
    ) -> Result<Vec<GeneratedFile>> {
        let mut files = Vec::new();

        for formatter in self.formatters() {
            let path = self.output_dir.join(formatter.file_name(name));
            let previous = PreviousModel::load(&path, formatter)?;
            let custom = previous
                .as_ref()
                .map(|p| p.custom_properties.as_slice())
                .unwrap_or_default();

            let lines = source.lines(|key| formatter.property_name(key));
            let contents = render_file(formatter, name, &lines, custom, &self.context);

            let status = match &previous {
                None => FileStatus::Created,
                Some(p) if p.contains_updates(&contents) => FileStatus::Updated,
                Some(_) => FileStatus::Unchanged,
            };
            debug!(model = name, path = %path.display(), ?status, "rendered model");

            files.push(GeneratedFile {
                model: name.to_string(),
                path,
                contents,
                status,
            });
        }

        Ok(files)
    }

    /// Render all models as `(file name, contents)` without looking at the output directory
    pub fn render(&self, models: &ModelSet) -> Vec<(String, String)> {
        let mut rendered = Vec::new();
        for (name, source) in models.iter() {
            for formatter in self.formatters() {
                let lines = source.lines(|key| formatter.property_name(key));
                rendered.push((
                    formatter.file_name(name),
                    render_file(formatter, name, &lines, &[], &self.context),
                ));
            }
        }
        rendered
    }

    /// Write every changed file. Returns how many were written.
    pub fn write(&self, files: &[GeneratedFile]) -> Result<usize> {
        let mut written = 0;
        for file in files.iter().filter(|f| f.is_changed()) {
            write_atomic(&file.path, &file.contents)?;
            info!(path = %file.path.display(), status = ?file.status, "wrote model");
            written += 1;
        }
        Ok(written)
    }

    /// Generated files in the output directory that no current model produces
    pub fn find_orphans(&self, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
        let extensions = self.language.extensions();
        let mut orphans = Vec::new();

        for path in files_with_extensions(&self.output_dir, &extensions) {
            if files.iter().any(|f| f.path == path) {
                continue;
            }
            let contents =
                std::fs::read_to_string(&path).map_err(|e| fs_error::read_failed(&path, e))?;
            if contents.contains(GENERATED_MARKER) {
                warn!(path = %path.display(), "generated file has no matching model");
                orphans.push(path);
            }
        }

        Ok(orphans)
    }

    /// Delete orphaned files
    pub fn prune(&self, orphans: &[PathBuf]) -> Result<()> {
        for path in orphans {
            std::fs::remove_file(path).map_err(|e| fs_error::write_failed(path, e))?;
            info!(path = %path.display(), "removed orphaned model");
        }
        Ok(())
    }

    fn formatters(&self) -> Vec<&dyn LanguageFormatter> {
        let main: &dyn LanguageFormatter = self.formatter.as_ref();
        let mut formatters = vec![main];
        formatters.extend(self.formatter.companion());
        formatters
    }
}
