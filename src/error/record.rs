//! Record decoding errors

use super::ModelSyncError;

/// Creates a record decode failed error
pub fn decode_failed(record: impl Into<String>, reason: impl ToString) -> ModelSyncError {
    ModelSyncError::RecordDecodeFailed {
        record: record.into(),
        reason: reason.to_string(),
    }
}
