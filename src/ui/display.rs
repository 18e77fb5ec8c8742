//! Styled output for generation results

use std::path::{Path, PathBuf};

use console::Style;

use crate::generator::{FileStatus, GeneratedFile};

/// Counts of generated files by status
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl Summary {
    pub fn from_files(files: &[GeneratedFile]) -> Self {
        files.iter().fold(Self::default(), |mut summary, file| {
            match file.status {
                FileStatus::Created => summary.created += 1,
                FileStatus::Updated => summary.updated += 1,
                FileStatus::Unchanged => summary.unchanged += 1,
            }
            summary
        })
    }

    pub fn changed(&self) -> usize {
        self.created + self.updated
    }

    /// One-line description, e.g. `2 created, 1 updated, 4 unchanged`
    pub fn line(&self) -> String {
        format!(
            "{} created, {} updated, {} unchanged",
            self.created, self.updated, self.unchanged
        )
    }
}

fn relative<'a>(path: &'a Path, base: &Path) -> std::borrow::Cow<'a, str> {
    path.strip_prefix(base).unwrap_or(path).to_string_lossy()
}

fn status_label(status: FileStatus, dry_run: bool) -> String {
    let (label, style) = match (status, dry_run) {
        (FileStatus::Created, false) => ("created", Style::new().green()),
        (FileStatus::Created, true) => ("would create", Style::new().green()),
        (FileStatus::Updated, false) => ("updated", Style::new().yellow()),
        (FileStatus::Updated, true) => ("would update", Style::new().yellow()),
        (FileStatus::Unchanged, _) => ("unchanged", Style::new().dim()),
    };
    format!("{:>12}", style.apply_to(label))
}

/// Print changed files (and unchanged ones when `verbose`), then a summary line
pub fn display_generated(files: &[GeneratedFile], base: &Path, dry_run: bool, verbose: bool) {
    for file in files.iter().filter(|f| verbose || f.is_changed()) {
        println!(
            "{} {}",
            status_label(file.status, dry_run),
            relative(&file.path, base)
        );
    }

    let summary = Summary::from_files(files);
    let heading = if dry_run { "Dry run:" } else { "Done:" };
    println!("{} {}", Style::new().bold().apply_to(heading), summary.line());
}

/// Print generated files that no model produces any more
pub fn display_orphans(orphans: &[PathBuf], base: &Path, pruned: bool) {
    if orphans.is_empty() {
        return;
    }

    let label = if pruned { "removed" } else { "orphaned" };
    for orphan in orphans {
        println!(
            "{:>12} {}",
            Style::new().red().apply_to(label),
            relative(orphan, base)
        );
    }
    if !pruned {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("Run with --prune to remove orphaned models")
        );
    }
}
