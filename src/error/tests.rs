//! Error type tests
//!
//! Tests for `ModelSyncError` and its conversions.

#![allow(clippy::unwrap_used)]

use std::path::Path;

use miette::Diagnostic;

use crate::error::ModelSyncError;
use crate::error::config::{
    invalid as config_invalid, not_found as config_not_found, parse_failed as config_parse_failed,
    read_failed as config_read_failed,
};
use crate::error::fs::{read_failed as file_read_failed, write_failed as file_write_failed};
use crate::error::record::decode_failed as record_decode_failed;
use crate::error::source::{
    invalid as payload_invalid, invalid_pattern, not_found as source_not_found,
    parse_failed as payload_parse_failed,
};

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = ModelSyncError::LanguageNotSupported {
        language: "cobol".to_string(),
    };
    assert_eq!(err.to_string(), "Language not supported: cobol");
}

#[test]
fn test_error_code() {
    let err = ModelSyncError::ModelsOutOfDate {
        models: "Rating".to_string(),
    };
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("modelsync::generate::out_of_date".to_string())
    );
}

#[test]
fn test_error_help() {
    let err = config_not_found("modelsync.yaml");
    let help = err.help().map(|h| h.to_string()).unwrap();
    assert!(help.contains("--config"));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: ModelSyncError = parse_result.unwrap_err().into();
    assert!(matches!(err, ModelSyncError::ConfigParseFailed { .. }));
}

test_error_contains!(
    test_record_decode_failed,
    record_decode_failed("MatrixOptions", "invalid type: string \"seven\", expected i64"),
    "Failed to decode MatrixOptions",
    "expected i64"
);

test_error_contains!(
    test_config_not_found,
    config_not_found("/path/to/modelsync.yaml"),
    "Configuration file not found",
    "/path/to/modelsync.yaml"
);

test_error_contains!(
    test_config_parse_failed,
    config_parse_failed("modelsync.yaml", "missing field `models`"),
    "Failed to parse configuration file",
    "missing field `models`"
);

test_error_contains!(
    test_config_invalid,
    config_invalid("duplicate model name 'Rating'"),
    "Invalid configuration",
    "Rating"
);

test_error_contains!(
    test_config_read_failed,
    config_read_failed("modelsync.yaml", "permission denied"),
    "Failed to read configuration file"
);

test_error_contains!(
    test_source_not_found,
    source_not_found("samples/*.json"),
    "No sample payloads match",
    "samples/*.json"
);

test_error_contains!(
    test_payload_parse_failed,
    payload_parse_failed(Path::new("rating.json"), "EOF while parsing"),
    "Failed to parse sample payload",
    "rating.json"
);

test_error_contains!(
    test_payload_invalid,
    payload_invalid(Path::new("rating.json"), "root is a number"),
    "Invalid sample payload",
    "root is a number"
);

test_error_contains!(
    test_invalid_pattern,
    invalid_pattern("samples/[", "unclosed class"),
    "Invalid source pattern",
    "samples/["
);

test_error_contains!(
    test_file_read_failed,
    file_read_failed(Path::new("Models/Rating.swift"), "permission denied"),
    "Failed to read file",
    "Rating.swift"
);

test_error_contains!(
    test_file_write_failed,
    file_write_failed(Path::new("Models/Rating.swift"), "disk full"),
    "Failed to write file",
    "disk full"
);

test_error_contains!(
    test_models_out_of_date,
    ModelSyncError::ModelsOutOfDate {
        models: "Rating, Price".to_string(),
    },
    "Models are out of date",
    "Rating, Price"
);
