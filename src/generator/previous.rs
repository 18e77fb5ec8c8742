//! Previously generated files: custom lines to keep and change detection

use std::path::Path;

use super::CUSTOM_MARKER;
use super::header::is_header_date_line;
use crate::domain::CustomProperty;
use crate::error::{Result, fs as fs_error};
use crate::language::LanguageFormatter;

/// Contents of a model file written by an earlier run
#[derive(Debug, Clone, Default)]
pub struct PreviousModel {
    /// File contents split on `\n`
    pub file_components: Vec<String>,
    pub custom_properties: Vec<CustomProperty>,
}

impl PreviousModel {
    /// Split previous contents and pick out lines tagged as custom
    pub fn parse(contents: &str, formatter: &dyn LanguageFormatter) -> Self {
        let marker = format!("{} {CUSTOM_MARKER}", formatter.line_comment());
        let file_components: Vec<String> = contents.split('\n').map(str::to_string).collect();

        let custom_properties = file_components
            .iter()
            .filter(|line| line.contains(&marker))
            .filter_map(|line| {
                formatter.property(line).map(|property| CustomProperty {
                    custom_line: line.clone(),
                    property,
                })
            })
            .collect();

        Self {
            file_components,
            custom_properties,
        }
    }

    /// Read the model at `path`, or `None` when it was never generated
    pub fn load(path: &Path, formatter: &dyn LanguageFormatter) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        let contents =
            std::fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))?;
        Ok(Some(Self::parse(&contents, formatter)))
    }

    /// Whether `new_contents` differs from this file in more than its header dates
    pub fn contains_updates(&self, new_contents: &str) -> bool {
        let new_lines: Vec<&str> = new_contents.split('\n').collect();
        if new_lines.len() != self.file_components.len() {
            return true;
        }

        self.file_components
            .iter()
            .zip(new_lines)
            .any(|(old, new)| old != new && !(is_header_date_line(old) && is_header_date_line(new)))
    }
}
