//! Error types and handling for modelsync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers live in sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`source`]: Sample payload errors
//! - [`fs`]: File system errors
//! - [`record`]: Record decoding errors

pub mod config;
pub mod fs;
pub mod record;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for modelsync operations
#[derive(Error, Diagnostic, Debug)]
pub enum ModelSyncError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(modelsync::config::not_found),
        help("Create a modelsync.yaml or point to one with --config")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(modelsync::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(modelsync::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(modelsync::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // Language errors
    #[error("Language not supported: {language}")]
    #[diagnostic(
        code(modelsync::language::not_supported),
        help("Supported languages: swift, kotlin, objc, rust")
    )]
    LanguageNotSupported { language: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(modelsync::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    ShellNotSupported { shell: String },

    // Source payload errors
    #[error("No sample payloads match '{pattern}'")]
    #[diagnostic(
        code(modelsync::source::not_found),
        help("Source paths are resolved relative to the directory containing modelsync.yaml")
    )]
    SourceNotFound { pattern: String },

    #[error("Failed to parse sample payload: {path}: {reason}")]
    #[diagnostic(code(modelsync::source::parse_failed))]
    PayloadParseFailed { path: String, reason: String },

    #[error("Invalid sample payload: {path}: {reason}")]
    #[diagnostic(
        code(modelsync::source::invalid),
        help("A sample payload must be a JSON object or an array of JSON objects")
    )]
    PayloadInvalid { path: String, reason: String },

    #[error("Invalid source pattern '{pattern}': {reason}")]
    #[diagnostic(code(modelsync::source::invalid_pattern))]
    InvalidSourcePattern { pattern: String, reason: String },

    // Generation errors
    #[error("Models are out of date: {models}")]
    #[diagnostic(
        code(modelsync::generate::out_of_date),
        help("Run 'modelsync generate' to update the generated models")
    )]
    ModelsOutOfDate { models: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(modelsync::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(modelsync::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    // Record errors
    #[error("Failed to decode {record}: {reason}")]
    #[diagnostic(
        code(modelsync::records::decode_failed),
        help("Missing and null fields decode to defaults; other values must match the field type")
    )]
    RecordDecodeFailed { record: String, reason: String },
}

impl From<serde_yaml::Error> for ModelSyncError {
    fn from(err: serde_yaml::Error) -> Self {
        ModelSyncError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ModelSyncError>;

#[cfg(test)]
mod tests;
