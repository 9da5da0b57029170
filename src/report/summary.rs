// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Everything the presentation layer needs about one branch.

use serde::Serialize;

use crate::analysis::{
    assess, categorize, checklist, suggest_reviewers, CategoryReport, ChangedFile, RiskReport,
};

/// Aggregate line and file counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffTotals {
    pub files: usize,
    pub additions: usize,
    pub deletions: usize,
}

impl DiffTotals {
    pub fn from_files(files: &[ChangedFile]) -> Self {
        Self {
            files: files.len(),
            additions: files.iter().map(|f| f.additions).sum(),
            deletions: files.iter().map(|f| f.deletions).sum(),
        }
    }
}

/// Analysis results for a target branch against its base.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewSummary {
    pub branch: String,
    pub base: String,
    pub totals: DiffTotals,
    pub files: Vec<ChangedFile>,
    pub categories: CategoryReport,
    pub risks: RiskReport,
    pub suggested_reviewers: Vec<String>,
    pub checklist: Vec<String>,
}

impl ReviewSummary {
    /// Run the analysis pipeline over `files`.
    pub fn build(
        branch: impl Into<String>,
        base: impl Into<String>,
        files: Vec<ChangedFile>,
    ) -> Self {
        let categories = categorize(&files);
        let risks = assess(&files);
        let suggested_reviewers = suggest_reviewers(&files);
        let checklist = checklist(&risks);

        Self {
            branch: branch.into(),
            base: base.into(),
            totals: DiffTotals::from_files(&files),
            files,
            categories,
            risks,
            suggested_reviewers,
            checklist,
        }
    }

    /// Whether the branches differ at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
