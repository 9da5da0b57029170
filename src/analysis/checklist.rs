// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Reviewer checklist generation.

use super::risk::RiskReport;
use super::rules::SensitiveArea;

/// Items every review gets.
pub const BASELINE_ITEMS: [&str; 3] = [
    "Errors are handled and surfaced with useful messages",
    "Changed behavior is covered by tests",
    "Documentation and configuration match the code changes",
];

pub const DATABASE_ITEMS: [&str; 2] = [
    "Database queries are efficient (indexes, no N+1 patterns)",
    "Migrations are safe to run and to roll back",
];

pub const AUTH_ITEM: &str = "Authentication and authorization checks are correct";

pub const PAYMENTS_ITEM: &str = "Payment flows handle failures and duplicate requests safely";

pub const DEPENDENCY_ITEM: &str = "New or updated dependencies are vetted for license and security";

pub const SPLIT_ITEM: &str = "Large files could be split into smaller, focused units";

/// Build the checklist for a risk report. Conditional items follow the
/// baseline in a fixed order: database, auth, payments, dependencies,
/// large changes.
pub fn checklist(report: &RiskReport) -> Vec<String> {
    let mut items: Vec<String> = BASELINE_ITEMS.iter().map(|s| s.to_string()).collect();

    if report.touches(SensitiveArea::Database) {
        items.extend(DATABASE_ITEMS.iter().map(|s| s.to_string()));
    }
    if report.touches(SensitiveArea::Auth) {
        items.push(AUTH_ITEM.to_string());
    }
    if report.touches(SensitiveArea::Payments) {
        items.push(PAYMENTS_ITEM.to_string());
    }
    if !report.new_dependencies.is_empty() {
        items.push(DEPENDENCY_ITEM.to_string());
    }
    if !report.large_changes.is_empty() {
        items.push(SPLIT_ITEM.to_string());
    }

    items
}
