// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! review-ready - branch review preparation
//!
//! Compares a branch against its base and tells a reviewer what they are
//! about to look at.
//!
//! # Features
//!
//! - **Categorization**: changed files grouped by status and by kind
//!   (code, tests, docs, config, dependencies)
//! - **Risk assessment**: large changes, sensitive areas, new dependencies,
//!   code changed without tests
//! - **Focus areas**: the handful of files to read first
//! - **Checklist**: review items tailored to what was touched
//!
//! # Example
//!
//! ```
//! use review_ready::analysis::{assess, categorize, checklist, ChangedFile, FileStatus};
//!
//! let files = vec![
//!     ChangedFile::new("src/large.py", FileStatus::Modified, 150, 60),
//!     ChangedFile::new("src/foo.py", FileStatus::Modified, 10, 2),
//! ];
//!
//! let categories = categorize(&files);
//! assert_eq!(categories.code.len(), 2);
//!
//! let risks = assess(&files);
//! assert_eq!(risks.large_changes.len(), 1);
//! assert_eq!(risks.missing_tests.len(), 2);
//!
//! let items = checklist(&risks);
//! assert_eq!(items.len(), 4);
//! ```

// Module declarations
pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod report;

// Re-exports for convenience
pub use config::ReviewConfig;
pub use error::{Result, ReviewError};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of review-ready.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Whether the tree had uncommitted changes at compile time.
    pub const GIT_DIRTY: Option<&str> = option_env!("VERGEN_GIT_DIRTY");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        let dirty = if GIT_DIRTY == Some("true") { "-dirty" } else { "" };
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({}{} {})", VERSION, &sha[..7.min(sha.len())], dirty, date)
            }
            (Some(sha), None) => {
                format!("{} ({}{})", VERSION, &sha[..7.min(sha.len())], dirty)
            }
            _ => VERSION.to_string(),
        }
    }
}
