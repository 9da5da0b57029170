// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Status and content-kind bucketing of changed files.

use serde::Serialize;
use std::fmt;

use super::change::{ChangedFile, FileStatus};
use super::rules::{classify, ContentKind};

/// Named buckets of a [`CategoryReport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Added,
    Modified,
    Deleted,
    Code,
    Tests,
    Docs,
    Config,
    Dependencies,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Added => "added",
            Category::Modified => "modified",
            Category::Deleted => "deleted",
            Category::Code => "code",
            Category::Tests => "tests",
            Category::Docs => "docs",
            Category::Config => "config",
            Category::Dependencies => "dependencies",
            Category::Other => "other",
        }
    }

    /// Status buckets.
    pub fn statuses() -> &'static [Category] {
        &[Category::Added, Category::Modified, Category::Deleted]
    }

    /// Content-kind buckets, in classification priority order, with
    /// `Other` last.
    pub fn kinds() -> &'static [Category] {
        &[
            Category::Tests,
            Category::Docs,
            Category::Dependencies,
            Category::Config,
            Category::Code,
            Category::Other,
        ]
    }

    fn for_status(status: FileStatus) -> Self {
        match status {
            FileStatus::Added => Category::Added,
            FileStatus::Modified => Category::Modified,
            FileStatus::Deleted => Category::Deleted,
        }
    }

    fn for_kind(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Test => Category::Tests,
            ContentKind::Doc => Category::Docs,
            ContentKind::Dependency => Category::Dependencies,
            ContentKind::Config => Category::Config,
            ContentKind::Code => Category::Code,
            ContentKind::Other => Category::Other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Changed files partitioned twice: once by status, once by content kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    pub added: Vec<ChangedFile>,
    pub modified: Vec<ChangedFile>,
    pub deleted: Vec<ChangedFile>,
    pub code: Vec<ChangedFile>,
    pub tests: Vec<ChangedFile>,
    pub docs: Vec<ChangedFile>,
    pub config: Vec<ChangedFile>,
    pub dependencies: Vec<ChangedFile>,
    pub other: Vec<ChangedFile>,
}

impl CategoryReport {
    /// Files in a bucket.
    pub fn files(&self, category: Category) -> &[ChangedFile] {
        match category {
            Category::Added => &self.added,
            Category::Modified => &self.modified,
            Category::Deleted => &self.deleted,
            Category::Code => &self.code,
            Category::Tests => &self.tests,
            Category::Docs => &self.docs,
            Category::Config => &self.config,
            Category::Dependencies => &self.dependencies,
            Category::Other => &self.other,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.files(category).len()
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<ChangedFile> {
        match category {
            Category::Added => &mut self.added,
            Category::Modified => &mut self.modified,
            Category::Deleted => &mut self.deleted,
            Category::Code => &mut self.code,
            Category::Tests => &mut self.tests,
            Category::Docs => &mut self.docs,
            Category::Config => &mut self.config,
            Category::Dependencies => &mut self.dependencies,
            Category::Other => &mut self.other,
        }
    }
}

/// Bucket every file by status and by content kind. Input order is kept
/// within each bucket.
pub fn categorize(files: &[ChangedFile]) -> CategoryReport {
    let mut report = CategoryReport::default();

    for file in files {
        report
            .bucket_mut(Category::for_status(file.status))
            .push(file.clone());
        report
            .bucket_mut(Category::for_kind(classify(&file.path)))
            .push(file.clone());
    }

    tracing::debug!(
        "Categorized {} files: {} code, {} tests, {} docs, {} config, {} dependencies, {} other",
        files.len(),
        report.code.len(),
        report.tests.len(),
        report.docs.len(),
        report.config.len(),
        report.dependencies.len(),
        report.other.len()
    );

    report
}
