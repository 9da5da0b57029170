// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Review risk assessment.
//!
//! Aggregates a list of changed files into a [`RiskReport`]: oversized
//! changes, sensitive areas touched, dependency manifests, code changed
//! without tests, where to look first, and a rough time budget.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use super::change::ChangedFile;
use super::rules::{classify, is_dependency_file, sensitive_areas, ContentKind, SensitiveArea};

/// Churn at or above which a file counts as a large change.
pub const LARGE_CHANGE_THRESHOLD: usize = 100;

/// Maximum number of missing-test examples reported.
pub const MAX_MISSING_TESTS: usize = 3;

/// Maximum number of focus areas reported.
pub const MAX_FOCUS_AREAS: usize = 5;

/// Review time bounds, in minutes.
pub const MIN_ESTIMATE_MINUTES: usize = 5;
pub const MAX_ESTIMATE_MINUTES: usize = 60;

/// Base review time, in minutes.
const BASE_MINUTES: usize = 3;

/// Lines of churn per extra review minute.
const LINES_PER_MINUTE: usize = 50;

/// A file flagged for its size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargeChange {
    #[serde(flatten)]
    pub file: ChangedFile,
    pub churn: usize,
}

/// Aggregated review risk for a set of changed files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskReport {
    /// Files with churn at or above [`LARGE_CHANGE_THRESHOLD`].
    pub large_changes: Vec<LargeChange>,
    /// Files per sensitive area. Only areas with matches are present.
    pub sensitive_areas: BTreeMap<SensitiveArea, Vec<ChangedFile>>,
    /// Dependency manifests and lockfiles touched.
    pub new_dependencies: Vec<ChangedFile>,
    /// Highest-churn code files, when code changed but no test did.
    pub missing_tests: Vec<ChangedFile>,
    /// Where a reviewer should look first.
    pub focus_areas: Vec<ChangedFile>,
    /// Estimated review time.
    pub estimate_minutes: usize,
}

impl Default for RiskReport {
    fn default() -> Self {
        Self {
            large_changes: Vec::new(),
            sensitive_areas: BTreeMap::new(),
            new_dependencies: Vec::new(),
            missing_tests: Vec::new(),
            focus_areas: Vec::new(),
            estimate_minutes: MIN_ESTIMATE_MINUTES,
        }
    }
}

impl RiskReport {
    /// Whether any file touched `area`.
    pub fn touches(&self, area: SensitiveArea) -> bool {
        self.sensitive_areas
            .get(&area)
            .map(|files| !files.is_empty())
            .unwrap_or(false)
    }
}

/// Assess the review risk of a set of changed files.
pub fn assess(files: &[ChangedFile]) -> RiskReport {
    let large_changes = find_large_changes(files);
    let sensitive = tag_sensitive_areas(files);
    let new_dependencies = files
        .iter()
        .filter(|f| is_dependency_file(&f.path))
        .cloned()
        .collect();
    let missing_tests = find_missing_tests(files);
    let focus_areas = rank_focus_areas(&large_changes, &sensitive);
    let estimate_minutes = estimate_minutes(files);

    let report = RiskReport {
        large_changes,
        sensitive_areas: sensitive,
        new_dependencies,
        missing_tests,
        focus_areas,
        estimate_minutes,
    };

    tracing::debug!(
        "Risk assessment: {} large, {} sensitive areas, {} dependency files, {} missing tests, ~{} min",
        report.large_changes.len(),
        report.sensitive_areas.len(),
        report.new_dependencies.len(),
        report.missing_tests.len(),
        report.estimate_minutes
    );

    report
}

fn find_large_changes(files: &[ChangedFile]) -> Vec<LargeChange> {
    files
        .iter()
        .filter(|f| f.churn() >= LARGE_CHANGE_THRESHOLD)
        .map(|f| LargeChange {
            file: f.clone(),
            churn: f.churn(),
        })
        .collect()
}

fn tag_sensitive_areas(files: &[ChangedFile]) -> BTreeMap<SensitiveArea, Vec<ChangedFile>> {
    let mut areas: BTreeMap<SensitiveArea, Vec<ChangedFile>> = BTreeMap::new();
    for file in files {
        for area in sensitive_areas(&file.path) {
            areas.entry(area).or_default().push(file.clone());
        }
    }
    areas
}

/// Deleted files never count as touching code or tests.
fn find_missing_tests(files: &[ChangedFile]) -> Vec<ChangedFile> {
    let live: Vec<(&ChangedFile, ContentKind)> = files
        .iter()
        .filter(|f| !f.is_deleted())
        .map(|f| (f, classify(&f.path)))
        .collect();

    let tests_touched = live.iter().any(|(_, kind)| *kind == ContentKind::Test);
    if tests_touched {
        return Vec::new();
    }

    let mut code: Vec<&ChangedFile> = live
        .iter()
        .filter(|(_, kind)| *kind == ContentKind::Code)
        .map(|(f, _)| *f)
        .collect();

    // Stable: equal churn keeps input order.
    code.sort_by(|a, b| b.churn().cmp(&a.churn()));
    code.into_iter()
        .take(MAX_MISSING_TESTS)
        .cloned()
        .collect()
}

fn rank_focus_areas(
    large_changes: &[LargeChange],
    sensitive: &BTreeMap<SensitiveArea, Vec<ChangedFile>>,
) -> Vec<ChangedFile> {
    let mut pool: Vec<&ChangedFile> = large_changes.iter().map(|l| &l.file).collect();
    pool.extend(sensitive.values().flatten());
    pool.sort_by(|a, b| b.churn().cmp(&a.churn()));

    let mut seen = HashSet::new();
    let mut focus = Vec::new();
    for file in pool {
        if focus.len() == MAX_FOCUS_AREAS {
            break;
        }
        if seen.insert(file.path.as_str()) {
            focus.push(file.clone());
        }
    }
    focus
}

/// `3 + files + churn / 50`, clamped to the review time bounds.
pub fn estimate_minutes(files: &[ChangedFile]) -> usize {
    let churn = files
        .iter()
        .fold(0usize, |acc, f| acc.saturating_add(f.churn()));
    BASE_MINUTES
        .saturating_add(files.len())
        .saturating_add(churn / LINES_PER_MINUTE)
        .clamp(MIN_ESTIMATE_MINUTES, MAX_ESTIMATE_MINUTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FileStatus;

    fn modified(path: &str, additions: usize, deletions: usize) -> ChangedFile {
        ChangedFile::new(path, FileStatus::Modified, additions, deletions)
    }

    #[test]
    fn test_large_change_without_tests() {
        let files = vec![
            modified("src/large.py", 150, 60),
            modified("src/foo.py", 10, 2),
        ];

        let report = assess(&files);
        assert_eq!(report.large_changes.len(), 1);
        assert_eq!(report.large_changes[0].file.path, "src/large.py");
        assert_eq!(report.large_changes[0].churn, 210);

        let missing: Vec<_> = report.missing_tests.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(missing, ["src/large.py", "src/foo.py"]);
    }

    #[test]
    fn test_large_change_threshold_boundary() {
        let files = vec![modified("a.py", 99, 0), modified("b.py", 60, 40)];
        let report = assess(&files);
        assert_eq!(report.large_changes.len(), 1);
        assert_eq!(report.large_changes[0].file.path, "b.py");
        assert_eq!(report.large_changes[0].churn, 100);
    }

    #[test]
    fn test_empty_input() {
        let report = assess(&[]);
        assert_eq!(report, RiskReport::default());
        assert_eq!(report.estimate_minutes, 5);
        assert!(report.large_changes.is_empty());
        assert!(report.sensitive_areas.is_empty());
    }

    #[test]
    fn test_sensitive_areas_scenario() {
        let files = vec![
            ChangedFile::new("db/migrations/001.sql", FileStatus::Added, 20, 0),
            modified("auth/login.py", 12, 3),
        ];

        let report = assess(&files);
        let keys: Vec<_> = report.sensitive_areas.keys().copied().collect();
        assert_eq!(keys, [SensitiveArea::Auth, SensitiveArea::Database]);
        assert_eq!(report.sensitive_areas[&SensitiveArea::Database].len(), 1);
        assert_eq!(report.sensitive_areas[&SensitiveArea::Auth].len(), 1);
        assert!(report.touches(SensitiveArea::Auth));
        assert!(!report.touches(SensitiveArea::Payments));
    }

    #[test]
    fn test_file_recorded_under_every_matching_area() {
        let files = vec![modified("api/payments/handler.rs", 5, 5)];
        let report = assess(&files);
        assert!(report.touches(SensitiveArea::Payments));
        assert!(report.touches(SensitiveArea::Api));
        // Listed once per area, but only once in the focus list.
        assert_eq!(report.focus_areas.len(), 1);
    }

    #[test]
    fn test_new_dependencies() {
        let files = vec![
            modified("Cargo.toml", 2, 0),
            modified("Cargo.lock", 80, 10),
            modified("src/lib.rs", 1, 1),
        ];
        let report = assess(&files);
        let deps: Vec<_> = report.new_dependencies.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(deps, ["Cargo.toml", "Cargo.lock"]);
    }

    #[test]
    fn test_missing_tests_empty_when_tests_touched() {
        let files = vec![
            modified("src/foo.py", 300, 10),
            ChangedFile::new("tests/test_foo.py", FileStatus::Added, 5, 0),
            modified("README.md", 1, 0),
        ];
        assert!(assess(&files).missing_tests.is_empty());
    }

    #[test]
    fn test_deleted_tests_do_not_count_as_touched() {
        let files = vec![
            modified("src/foo.py", 10, 2),
            ChangedFile::new("tests/test_old.py", FileStatus::Deleted, 0, 30),
        ];
        let report = assess(&files);
        assert_eq!(report.missing_tests.len(), 1);
        assert_eq!(report.missing_tests[0].path, "src/foo.py");
    }

    #[test]
    fn test_deleted_code_is_not_missing_tests() {
        let files = vec![ChangedFile::new("src/gone.py", FileStatus::Deleted, 0, 90)];
        assert!(assess(&files).missing_tests.is_empty());
    }

    #[test]
    fn test_missing_tests_top_three_with_stable_ties() {
        let files = vec![
            modified("src/a.rs", 5, 0),
            modified("src/b.rs", 20, 0),
            modified("src/c.rs", 5, 0),
            modified("src/d.rs", 5, 0),
            modified("docs/guide.md", 500, 0),
        ];
        let missing: Vec<_> = assess(&files)
            .missing_tests
            .iter()
            .map(|f| f.path.clone())
            .collect();
        assert_eq!(missing, ["src/b.rs", "src/a.rs", "src/c.rs"]);
    }

    #[test]
    fn test_focus_areas_ranked_deduplicated_truncated() {
        let files = vec![
            modified("src/big_one.rs", 400, 0),
            modified("src/auth/session.rs", 30, 0),
            modified("src/api/routes.rs", 250, 0),
            modified("src/db/models.rs", 10, 0),
            modified("src/billing/invoice.rs", 70, 0),
            modified("config/settings.toml", 5, 0),
            modified("src/api/auth_handler.rs", 1, 0),
            modified("src/plain.rs", 90, 0),
        ];

        let report = assess(&files);
        assert!(report.focus_areas.len() <= MAX_FOCUS_AREAS);
        let paths: Vec<_> = report.focus_areas.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "src/big_one.rs",
                "src/api/routes.rs",
                "src/billing/invoice.rs",
                "src/auth/session.rs",
                "src/db/models.rs",
            ]
        );

        let churns: Vec<_> = report.focus_areas.iter().map(|f| f.churn()).collect();
        assert!(churns.windows(2).all(|w| w[0] >= w[1]));
        let unique: HashSet<_> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }

    #[test]
    fn test_estimate_formula_and_clamp() {
        assert_eq!(estimate_minutes(&[]), 5);
        // 3 + 1 + 0 = 4, clamped up.
        assert_eq!(estimate_minutes(&[modified("a.rs", 10, 0)]), 5);
        // 3 + 2 + 210 / 50 = 9
        assert_eq!(
            estimate_minutes(&[modified("a.rs", 150, 60), modified("b.rs", 10, 2)]),
            9
        );
        // 3 + 1 + 5000 / 50 = 104, clamped down.
        assert_eq!(estimate_minutes(&[modified("a.rs", 4000, 1000)]), 60);
        assert_eq!(
            estimate_minutes(&[modified("a.rs", usize::MAX, usize::MAX)]),
            60
        );
    }

    #[test]
    fn test_estimate_monotonic() {
        let mut files = Vec::new();
        let mut previous = estimate_minutes(&files);
        for i in 0..80 {
            files.push(modified(&format!("src/f{i}.rs"), i * 7, i * 3));
            let current = estimate_minutes(&files);
            assert!(current >= previous);
            assert!((MIN_ESTIMATE_MINUTES..=MAX_ESTIMATE_MINUTES).contains(&current));
            previous = current;
        }
    }
}
