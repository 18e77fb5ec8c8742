//! Sample payload discovery and loading
//!
//! Source entries in the configuration are file paths or glob patterns
//! relative to the project directory. Every matched file holds either one
//! JSON object or an array of them; each object is one iteration of the
//! model it belongs to.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::ConfigFile;
use crate::error::{Result, fs as fs_error, source as source_error};
use crate::schema::ModelSet;

const GLOB_CHARS: &[char] = &['*', '?', '[', '{'];

fn is_glob(segment: &str) -> bool {
    segment.contains(GLOB_CHARS)
}

/// Files matched by one source entry, sorted
pub fn resolve(project_dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob(pattern) {
        let path = project_dir.join(pattern);
        if path.is_file() {
            return Ok(vec![path]);
        }
        return Err(source_error::not_found(pattern));
    }

    // Walk from the longest literal prefix so unrelated directories are skipped
    let normalized = pattern.replace('\\', "/");
    let segments: Vec<&str> = normalized.split('/').collect();
    let literal = segments.iter().take_while(|s| !is_glob(s)).count();
    let base = project_dir.join(segments[..literal].join("/"));
    let rest = segments[literal..].join("/");

    let glob = Glob::new(&rest).map_err(|e| source_error::invalid_pattern(pattern, e))?;

    let mut files: Vec<PathBuf> = WalkDir::new(&base)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let Ok(relative) = e.path().strip_prefix(&base) else {
                return false;
            };
            let relative = relative.to_string_lossy().replace('\\', "/");
            glob.matched(&CandidatePath::from(relative.as_str())).is_some()
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    if files.is_empty() {
        return Err(source_error::not_found(pattern));
    }
    files.sort();
    debug!(pattern, matches = files.len(), "resolved source pattern");
    Ok(files)
}

/// Objects of one payload file, in file order
pub fn load_payload(path: &Path) -> Result<Vec<Map<String, Value>>> {
    let contents = std::fs::read_to_string(path).map_err(|e| fs_error::read_failed(path, e))?;
    let value: Value =
        serde_json::from_str(&contents).map_err(|e| source_error::parse_failed(path, e))?;

    match value {
        Value::Object(object) => Ok(vec![object]),
        Value::Array(items) if items.is_empty() => {
            Err(source_error::invalid(path, "array has no objects"))
        }
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(object) => Ok(object),
                _ => Err(source_error::invalid(
                    path,
                    format!("element {idx} is not an object"),
                )),
            })
            .collect(),
        _ => Err(source_error::invalid(path, "root is not an object")),
    }
}

/// Walk every configured payload into one model set
pub fn collect(config: &ConfigFile) -> Result<ModelSet> {
    let mut models = ModelSet::new();

    for model in &config.models {
        let mut files = Vec::new();
        for pattern in &model.sources {
            files.extend(resolve(&config.project_directory, pattern)?);
        }
        files.sort();
        files.dedup();
        observe_files(&mut models, &model.name, &files)?;
    }

    info!(models = models.len(), "collected models from payloads");
    Ok(models)
}

/// Walk ad-hoc payload files into a model set rooted at `name`
pub fn collect_files(name: &str, files: &[PathBuf]) -> Result<ModelSet> {
    let mut models = ModelSet::new();
    observe_files(&mut models, name, files)?;
    Ok(models)
}

fn observe_files(models: &mut ModelSet, name: &str, files: &[PathBuf]) -> Result<()> {
    for file in files {
        let objects = load_payload(file)?;
        debug!(model = name, path = %file.display(), objects = objects.len(), "loaded payload");
        for object in &objects {
            models.observe_object(name, object);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelSyncError;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) -> PathBuf {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_resolve_literal_path() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "samples/rating.json", "{}");

        assert_eq!(resolve(temp.path(), "samples/rating.json").unwrap(), vec![path]);
    }

    #[test]
    fn test_resolve_missing_literal_path() {
        let temp = TempDir::new().unwrap();
        let result = resolve(temp.path(), "samples/rating.json");
        assert!(matches!(result, Err(ModelSyncError::SourceNotFound { .. })));
    }

    #[test]
    fn test_resolve_glob_is_sorted() {
        let temp = TempDir::new().unwrap();
        let b = write(temp.path(), "samples/rating_b.json", "{}");
        let a = write(temp.path(), "samples/rating_a.json", "{}");
        write(temp.path(), "samples/price.json", "{}");
        write(temp.path(), "samples/rating_c.txt", "{}");

        assert_eq!(resolve(temp.path(), "samples/rating_*.json").unwrap(), vec![a, b]);
    }

    #[test]
    fn test_resolve_recursive_glob() {
        let temp = TempDir::new().unwrap();
        let top = write(temp.path(), "samples/matrix.json", "{}");
        let nested = write(temp.path(), "samples/2018/01/matrix.json", "{}");

        assert_eq!(
            resolve(temp.path(), "samples/**/matrix.json").unwrap(),
            vec![nested, top]
        );
    }

    #[test]
    fn test_resolve_glob_without_matches() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "samples/price.json", "{}");

        match resolve(temp.path(), "samples/*.yaml") {
            Err(ModelSyncError::SourceNotFound { pattern }) => assert_eq!(pattern, "samples/*.yaml"),
            other => panic!("expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_object_and_array_payloads() {
        let temp = TempDir::new().unwrap();
        let single = write(temp.path(), "one.json", r#"{"count": 1}"#);
        let many = write(temp.path(), "many.json", r#"[{"count": 1}, {"count": 2}]"#);

        assert_eq!(load_payload(&single).unwrap().len(), 1);
        assert_eq!(load_payload(&many).unwrap().len(), 2);
    }

    #[test]
    fn test_load_rejects_bad_payloads() {
        let temp = TempDir::new().unwrap();
        let broken = write(temp.path(), "broken.json", "{");
        let scalar = write(temp.path(), "scalar.json", "42");
        let empty = write(temp.path(), "empty.json", "[]");
        let mixed = write(temp.path(), "mixed.json", r#"[{"a": 1}, 2]"#);

        assert!(matches!(
            load_payload(&broken),
            Err(ModelSyncError::PayloadParseFailed { .. })
        ));
        for path in [scalar, empty, mixed] {
            assert!(matches!(
                load_payload(&path),
                Err(ModelSyncError::PayloadInvalid { .. })
            ));
        }
    }

    #[test]
    fn test_collect_from_config() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "samples/rating_1.json", r#"{"count": 3, "average": 4}"#);
        write(temp.path(), "samples/rating_2.json", r#"{"count": 5, "average": 4.5}"#);

        let mut config = ConfigFile::from_yaml(
            "language: swift\nmodels:\n  - name: Rating\n    sources: [samples/rating_*.json, samples/rating_1.json]\n",
        )
        .unwrap();
        config.project_directory = temp.path().to_path_buf();

        let models = collect(&config).unwrap();
        let rating = models.get("Rating").unwrap();
        assert_eq!(rating.iterations(), 2);
    }

    #[test]
    fn test_collect_files_roots_at_name() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "p.json", r#"{"price": {"amount": 1.5}}"#);

        let models = collect_files("Product", &[path]).unwrap();
        assert_eq!(models.names(), vec!["Product", "Price"]);
    }
}
