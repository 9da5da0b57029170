// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command execution.

use crate::analysis::ChangedFile;
use crate::config::ReviewConfig;
use crate::error::Result;
use crate::git::Repository;
use crate::report::{Reporter, ReviewSummary};

use super::args::Cli;

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!("review-ready {}", crate::version::version_string());

    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        ReviewConfig::load_from(config_path)?
    } else {
        ReviewConfig::load()?
    };

    let base = cli.base.clone().unwrap_or_else(|| config.review.base.clone());
    let remote = cli
        .remote
        .clone()
        .unwrap_or_else(|| config.review.remote.clone());
    let exclude = config.review.exclude_patterns()?;

    tracing::debug!(
        "Comparing {} against {} (remote: {}) in {:?}",
        cli.branch,
        base,
        remote,
        cli.repo
    );

    let repo = Repository::open(&cli.repo)?;
    let diff = repo.branch_diff(&base, &cli.branch, &remote)?;

    let files = apply_excludes(diff.files, &exclude);
    let summary = ReviewSummary::build(&cli.branch, &base, files);

    let reporter = Reporter::new(&config.ui, cli.no_color);
    reporter.print(&summary, cli.format)?;

    Ok(())
}

/// Drop files whose path matches any exclude pattern.
fn apply_excludes(files: Vec<ChangedFile>, patterns: &[glob::Pattern]) -> Vec<ChangedFile> {
    if patterns.is_empty() {
        return files;
    }

    let before = files.len();
    let kept: Vec<ChangedFile> = files
        .into_iter()
        .filter(|f| !patterns.iter().any(|p| p.matches(&f.path)))
        .collect();

    if kept.len() != before {
        tracing::debug!("Excluded {} file(s) by pattern", before - kept.len());
    }
    kept
}
