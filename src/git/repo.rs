// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository access and ref resolution.

use crate::error::{GitError, Result, ReviewError};
use git2::{BranchType, Oid, Repository as Git2Repo};
use std::fmt;
use std::path::Path;

/// Wrapper around git2::Repository with additional functionality.
pub struct Repository {
    inner: Git2Repo,
}

/// Where a ref name was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// A local branch.
    Local,
    /// A remote-tracking branch.
    Remote,
    /// Any other commit-ish (SHA, tag, `HEAD~2`, ...).
    Commit,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefKind::Local => write!(f, "local branch"),
            RefKind::Remote => write!(f, "remote branch"),
            RefKind::Commit => write!(f, "commit"),
        }
    }
}

/// A ref name resolved to a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRef {
    /// Name actually used, e.g. `origin/feature` for a remote hit.
    pub name: String,
    pub kind: RefKind,
    pub commit: Oid,
}

impl Repository {
    /// Open the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                ReviewError::Git(GitError::NotARepository)
            } else {
                ReviewError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        tracing::debug!("Opened repository at {:?}", repo.path());

        Ok(Self { inner: repo })
    }

    /// Get a reference to the inner git2 repository.
    pub fn inner(&self) -> &Git2Repo {
        &self.inner
    }

    /// Resolve a branch or ref name to a commit.
    ///
    /// Lookup order: local branch `name`, remote-tracking branch
    /// `<remote>/<name>`, then any commit-ish `name`. Failures in the
    /// remote lookup (missing remote, missing branch) fall through to the
    /// commit-ish lookup.
    pub fn resolve_ref(&self, name: &str, remote: &str) -> Result<ResolvedRef> {
        if let Some(commit) = self.branch_commit(name, BranchType::Local) {
            tracing::debug!("Resolved '{}' as local branch", name);
            return Ok(ResolvedRef {
                name: name.to_string(),
                kind: RefKind::Local,
                commit,
            });
        }

        let remote_name = format!("{}/{}", remote, name);
        if let Some(commit) = self.branch_commit(&remote_name, BranchType::Remote) {
            tracing::debug!("Resolved '{}' as remote branch '{}'", name, remote_name);
            return Ok(ResolvedRef {
                name: remote_name,
                kind: RefKind::Remote,
                commit,
            });
        }

        let commit = self
            .inner
            .revparse_single(name)
            .and_then(|obj| obj.peel_to_commit())
            .map_err(|e| {
                tracing::debug!("Commit lookup for '{}' failed: {}", name, e.message());
                ReviewError::Git(GitError::RefNotFound {
                    reference: name.to_string(),
                    remote: remote.to_string(),
                })
            })?;

        tracing::debug!("Resolved '{}' as commit {}", name, commit.id());
        Ok(ResolvedRef {
            name: name.to_string(),
            kind: RefKind::Commit,
            commit: commit.id(),
        })
    }

    fn branch_commit(&self, name: &str, kind: BranchType) -> Option<Oid> {
        let branch = self.inner.find_branch(name, kind).ok()?;
        let commit = branch.get().peel_to_commit().ok()?;
        Some(commit.id())
    }
}
