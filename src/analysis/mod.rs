// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Change analysis core.
//!
//! Pure functions over a list of [`ChangedFile`] records: categorization,
//! risk assessment, reviewer suggestions and checklist generation. Nothing
//! in here touches git, the terminal or the file system.

mod categorize;
mod change;
mod checklist;
mod reviewers;
mod risk;
pub mod rules;

pub use categorize::{categorize, Category, CategoryReport};
pub use change::{ChangedFile, FileStatus};
pub use checklist::{checklist, BASELINE_ITEMS};
pub use reviewers::suggest_reviewers;
pub use risk::{assess, estimate_minutes, LargeChange, RiskReport, LARGE_CHANGE_THRESHOLD};
pub use rules::{ContentKind, SensitiveArea};
