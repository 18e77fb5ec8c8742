//! File system errors

use std::path::Path;

use super::ModelSyncError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> ModelSyncError {
    ModelSyncError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> ModelSyncError {
    ModelSyncError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
