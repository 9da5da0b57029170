// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// review-ready - prepare a branch for code review
///
/// Compares a branch against its base, groups the changed files, flags
/// review risks and prints a checklist for the reviewer.
#[derive(Parser, Debug)]
#[command(name = "review-ready")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Summarize a branch's changes for code review", long_about = None)]
pub struct Cli {
    /// Branch (or any ref) to review
    #[arg(value_name = "BRANCH")]
    pub branch: String,

    /// Base branch to compare against [default: config `review.base`, else main]
    #[arg(short, long)]
    pub base: Option<String>,

    /// Path to the repository
    #[arg(short, long, default_value = ".")]
    pub repo: PathBuf,

    /// Remote consulted for tracking branches [default: config `review.remote`, else origin]
    #[arg(long)]
    pub remote: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, env = "REVIEW_READY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

/// Output format for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable panels (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}
