// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Resolves branch names and turns the diff between two refs into the
//! [`ChangedFile`](crate::analysis::ChangedFile) list the analysis core
//! consumes.

mod diff;
mod repo;

pub use diff::BranchDiff;
pub use repo::{RefKind, Repository, ResolvedRef};
