// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Branch-to-branch diff extraction.

use crate::analysis::{ChangedFile, FileStatus};
use crate::error::{GitError, Result};
use git2::{Delta, DiffFindOptions, Patch};

use super::repo::{Repository, ResolvedRef};

/// Changed files between two refs, with the refs they resolved to.
#[derive(Debug, Clone)]
pub struct BranchDiff {
    pub base: ResolvedRef,
    pub target: ResolvedRef,
    pub files: Vec<ChangedFile>,
}

impl Repository {
    /// Diff `base` against `target` (same as `git diff base..target`).
    ///
    /// Both names are resolved with [`Repository::resolve_ref`], base
    /// first. Identical trees yield an empty file list.
    pub fn branch_diff(&self, base: &str, target: &str, remote: &str) -> Result<BranchDiff> {
        let base = self.resolve_ref(base, remote)?;
        let target = self.resolve_ref(target, remote)?;
        let files = self.changed_files_between(&base, &target)?;

        tracing::debug!(
            "{} file(s) changed between {} {} and {} {}",
            files.len(),
            base.kind,
            base.name,
            target.kind,
            target.name
        );

        Ok(BranchDiff {
            base,
            target,
            files,
        })
    }

    fn changed_files_between(
        &self,
        base: &ResolvedRef,
        target: &ResolvedRef,
    ) -> Result<Vec<ChangedFile>> {
        let repo = self.inner();
        let base_tree = repo
            .find_commit(base.commit)
            .and_then(|c| c.tree())
            .map_err(GitError::from)?;
        let target_tree = repo
            .find_commit(target.commit)
            .and_then(|c| c.tree())
            .map_err(GitError::from)?;

        let mut diff = repo
            .diff_tree_to_tree(Some(&base_tree), Some(&target_tree), None)
            .map_err(GitError::from)?;
        // Pair deleted and added files into renames, as `git diff` does.
        diff.find_similar(Some(DiffFindOptions::new().renames(true)))
            .map_err(GitError::from)?;

        let mut files = Vec::with_capacity(diff.deltas().len());
        for (idx, delta) in diff.deltas().enumerate() {
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(|p| p.to_string_lossy().replace('\\', "/"))
                .unwrap_or_default();

            let status = match delta.status() {
                Delta::Added => FileStatus::Added,
                Delta::Deleted => FileStatus::Deleted,
                _ => FileStatus::Modified,
            };

            // Binary files have no line stats and count as zero.
            let patch = Patch::from_diff(&diff, idx).map_err(GitError::from)?;
            let (additions, deletions) = match patch {
                Some(patch) => {
                    let (_, added, removed) = patch.line_stats().map_err(GitError::from)?;
                    (added, removed)
                }
                None => (0, 0),
            };

            files.push(ChangedFile::new(path, status, additions, deletions));
        }

        Ok(files)
    }
}
