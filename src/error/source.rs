//! Sample payload errors

use std::path::Path;

use super::ModelSyncError;

/// Creates a source not found error
pub fn not_found(pattern: impl Into<String>) -> ModelSyncError {
    ModelSyncError::SourceNotFound {
        pattern: pattern.into(),
    }
}

/// Creates a payload parse failed error
pub fn parse_failed(path: &Path, reason: impl ToString) -> ModelSyncError {
    ModelSyncError::PayloadParseFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid payload error
pub fn invalid(path: &Path, reason: impl Into<String>) -> ModelSyncError {
    ModelSyncError::PayloadInvalid {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// Creates an invalid source pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> ModelSyncError {
    ModelSyncError::InvalidSourcePattern {
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}
