//! Common test utilities for modelsync integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// 2018-01-04T00:00:00Z, so headers read "01/04/18"
pub const FIXED_EPOCH: &str = "1515024000";

pub const RATING_PAYLOAD: &str = r#"{"count": 12, "average": 4.5}"#;

pub const MATRIX_PAYLOAD: &str = r#"[
    {
        "productId": 486154,
        "hasHsnSizeChart": false,
        "itemNumber": "A-486154",
        "price": {"amount": 19.99},
        "images": [{"url": "front.png"}]
    },
    {
        "productId": 486155,
        "hasHsnSizeChart": true,
        "price": {"amount": 25}
    }
]"#;

/// A temporary project directory for integration tests
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Workspace with `modelsync.yaml` and sample payloads for Rating and MatrixOptions
    #[allow(dead_code)]
    pub fn with_samples(language: &str) -> Self {
        let workspace = Self::new();
        workspace.write_file("samples/rating.json", RATING_PAYLOAD);
        workspace.write_file("samples/matrix/options.json", MATRIX_PAYLOAD);
        workspace.write_file(
            "modelsync.yaml",
            &format!(
                "project: ModelSynchro\n\
                 author: Jonathan Samudio\n\
                 company: Prolific Interactive\n\
                 language: {language}\n\
                 models:\n  \
                   - name: Rating\n    sources: [samples/rating.json]\n  \
                   - name: MatrixOptions\n    sources: [\"samples/matrix/*.json\"]\n"
            ),
        );
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// modelsync running inside the workspace with a pinned header date
    pub fn cmd(&self) -> Command {
        let mut cmd = modelsync_cmd();
        cmd.current_dir(&self.path)
            .env("SOURCE_DATE_EPOCH", FIXED_EPOCH)
            .env_remove("MODELSYNC_CONFIG")
            .env_remove("MODELSYNC_LOG");
        cmd
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn modelsync_cmd() -> Command {
    Command::cargo_bin("modelsync").expect("modelsync binary")
}
