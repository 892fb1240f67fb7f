//! Source file discovery and in-place rewriting

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::converter::{convert_source, Scope};
use crate::output::write_file;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Path not found: {0:?}")]
    PathNotFound(PathBuf),
}

/// A file whose conversion differs from its current content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    pub path: PathBuf,
    pub changed_lines: usize,
}

/// A file that could not be read or written back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a rewrite run
#[derive(Debug, Default)]
pub struct Report {
    pub files_scanned: usize,
    pub changes: Vec<FileChange>,
    pub skipped: Vec<SkippedFile>,
}

impl Report {
    pub fn changed_lines(&self) -> usize {
        self.changes.iter().map(|c| c.changed_lines).sum()
    }
}

/// Find all files under `root` that the config selects.
///
/// A path naming a single file is returned as-is, whatever its extension.
pub fn collect_sources(root: &Path, config: &Config) -> Result<Vec<PathBuf>, SourceError> {
    if !root.exists() {
        return Err(SourceError::PathNotFound(root.to_path_buf()));
    }

    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded_dir(e, config));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_file() && config.matches_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn is_excluded_dir(entry: &DirEntry, config: &Config) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| config.is_excluded(name))
}

/// Convert each file. Changed files are written back unless `check` is set.
///
/// A file that fails to read or write is skipped with a warning and listed
/// in [`Report::skipped`]; the remaining files are still processed.
pub fn rewrite_files(files: &[PathBuf], scope: Scope, check: bool) -> Report {
    let mut report = Report::default();

    for path in files {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                log::warn!("Skipping {:?}: {}", path, e);
                report.skipped.push(SkippedFile {
                    path: path.clone(),
                    reason: e.to_string(),
                });
                continue;
            }
        };
        report.files_scanned += 1;

        let converted = convert_source(&source, scope);
        if converted == source {
            continue;
        }

        let changed_lines = source
            .lines()
            .zip(converted.lines())
            .filter(|(before, after)| before != after)
            .count();

        if check {
            log::debug!("{:?} would change ({} lines)", path, changed_lines);
        } else if let Err(e) = write_file(path, &converted) {
            log::warn!("Failed to write {:?}: {}", path, e);
            report.skipped.push(SkippedFile {
                path: path.clone(),
                reason: e.to_string(),
            });
            continue;
        } else {
            log::info!("Rewrote {:?} ({} lines)", path, changed_lines);
        }

        report.changes.push(FileChange {
            path: path.clone(),
            changed_lines,
        });
    }

    report
}
