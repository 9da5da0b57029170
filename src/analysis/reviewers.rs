// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reviewer handle suggestions from top-level directories.

use std::collections::BTreeSet;

use super::change::ChangedFile;

/// Maximum number of suggested reviewers.
pub const MAX_REVIEWERS: usize = 4;

/// Suggest reviewer handles: one `@team` per top-level directory touched,
/// with `_` turned into `-`, sorted, at most [`MAX_REVIEWERS`].
/// Files at the repository root contribute nothing.
pub fn suggest_reviewers(files: &[ChangedFile]) -> Vec<String> {
    let handles: BTreeSet<String> = files
        .iter()
        .filter_map(|f| {
            let mut segments = f.path.split('/');
            let top = segments.next()?;
            segments.next()?;
            Some(format!("@{}", top.replace('_', "-")))
        })
        .collect();

    handles.into_iter().take(MAX_REVIEWERS).collect()
}
