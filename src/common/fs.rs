//! Common file system operations with unified error handling

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

/// Write `contents` to `path` through a temporary file in the same directory,
/// so readers never observe a partially written file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| fs_error::write_failed(path, e))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| fs_error::write_failed(path, e))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| fs_error::write_failed(path, e))?;
    temp.persist(path)
        .map_err(|e| fs_error::write_failed(path, e.error))?;

    Ok(())
}

/// Files directly inside `dir` with one of the given extensions, sorted by path.
/// A missing directory has no files.
pub fn files_with_extensions(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.contains(&ext))
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    files.sort();
    files
}
