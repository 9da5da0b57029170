// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Changed-file records consumed by the analysis pipeline.

use serde::Serialize;
use std::fmt;

/// Status of a file between the base and target refs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Added,
    #[default]
    Modified,
    Deleted,
}

impl FileStatus {
    /// Single-letter form, as shown by `git diff --name-status`.
    pub fn letter(&self) -> char {
        match self {
            FileStatus::Added => 'A',
            FileStatus::Modified => 'M',
            FileStatus::Deleted => 'D',
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            FileStatus::Added => "added",
            FileStatus::Modified => "modified",
            FileStatus::Deleted => "deleted",
        })
    }
}

/// A single file changed between two refs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangedFile {
    /// Repository-relative path, `/`-separated.
    pub path: String,
    /// Change status.
    pub status: FileStatus,
    /// Lines added.
    pub additions: usize,
    /// Lines removed.
    pub deletions: usize,
}

impl ChangedFile {
    /// Create a new record.
    pub fn new(
        path: impl Into<String>,
        status: FileStatus,
        additions: usize,
        deletions: usize,
    ) -> Self {
        Self {
            path: path.into(),
            status,
            additions,
            deletions,
        }
    }

    /// Total lines touched.
    pub fn churn(&self) -> usize {
        self.additions.saturating_add(self.deletions)
    }

    pub fn is_deleted(&self) -> bool {
        self.status == FileStatus::Deleted
    }
}

/// Lowercase extension of the last segment of `path`.
pub(crate) fn extension_of(path: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) => name[idx + 1..].to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_churn() {
        let file = ChangedFile::new("src/lib.rs", FileStatus::Modified, 40, 2);
        assert_eq!(file.churn(), 42);
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension_of("src/Main.RS"), "rs");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(".env"), "env");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        // Dots in directory names are ignored.
        assert_eq!(extension_of("conf.d/Makefile"), "");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(FileStatus::Added.letter(), 'A');
        assert_eq!(FileStatus::default(), FileStatus::Modified);
        assert_eq!(format!("{:<9}|", FileStatus::Deleted), "deleted  |");
    }
}
