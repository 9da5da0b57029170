// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal and JSON rendering of a review summary.

use console::{measure_text_width, style, StyledObject, Term};
use std::io;

use crate::analysis::{Category, ChangedFile, LARGE_CHANGE_THRESHOLD};
use crate::cli::args::OutputFormat;
use crate::config::UiConfig;

use super::summary::ReviewSummary;

/// Renders summaries to stdout. Built once per invocation.
pub struct Reporter {
    term: Term,
    color: bool,
    emoji: bool,
}

impl Reporter {
    /// Create a reporter writing to stdout.
    pub fn new(ui: &UiConfig, no_color: bool) -> Self {
        Self {
            term: Term::stdout(),
            color: ui.color && !no_color,
            emoji: ui.emoji,
        }
    }

    /// Print a summary in the requested format.
    pub fn print(&self, summary: &ReviewSummary, format: OutputFormat) -> io::Result<()> {
        match format {
            OutputFormat::Json => self.print_json(summary),
            OutputFormat::Text if summary.is_empty() => self.term.write_line(&format!(
                "No differences between {} and {}",
                summary.base, summary.branch
            )),
            OutputFormat::Text => {
                for line in self.render_text(summary) {
                    self.term.write_line(&line)?;
                }
                Ok(())
            }
        }
    }

    fn print_json(&self, summary: &ReviewSummary) -> io::Result<()> {
        let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
        self.term.write_line(&json)
    }

    /// Render the text form of a summary, one entry per line.
    pub fn render_text(&self, summary: &ReviewSummary) -> Vec<String> {
        let mut out = vec![String::new()];

        let title = format!(
            "{}Review Summary for {} (base: {})",
            self.icon("📋 "),
            self.paint(style(summary.branch.as_str()).cyan().bold()),
            summary.base
        );
        out.extend(self.panel(None, &[title]));

        out.push(String::new());
        out.extend(self.panel(Some("Overview"), &self.overview_lines(summary)));

        out.push(String::new());
        out.extend(self.panel(Some("Change Overview"), &self.category_lines(summary)));

        if !summary.risks.focus_areas.is_empty() {
            let title = format!("{}Review Focus Areas", self.icon("🔍 "));
            out.push(String::new());
            out.extend(self.panel(Some(&title), &self.focus_lines(&summary.risks.focus_areas)));
        }

        let concerns = self.concern_lines(summary);
        if !concerns.is_empty() {
            let title = format!("{}Potential Concerns", self.icon("⚠️  "));
            out.push(String::new());
            out.extend(self.panel(Some(&title), &concerns));
        }

        if !summary.suggested_reviewers.is_empty() {
            let title = format!("{}Suggested Reviewers", self.icon("👥 "));
            out.push(String::new());
            out.extend(self.panel(Some(&title), &[summary.suggested_reviewers.join(", ")]));
        }

        if !summary.checklist.is_empty() {
            let title = format!("{}Checklist for Reviewer", self.icon("✅ "));
            let items: Vec<String> = summary
                .checklist
                .iter()
                .map(|item| format!("□ {}", item))
                .collect();
            out.push(String::new());
            out.extend(self.panel(Some(&title), &items));
        }

        out.push(String::new());
        out
    }

    fn overview_lines(&self, summary: &ReviewSummary) -> Vec<String> {
        let rows = [
            ("Files changed", summary.totals.files.to_string()),
            (
                "Additions",
                self.paint(style(format!("+{}", summary.totals.additions)).green())
                    .to_string(),
            ),
            (
                "Deletions",
                self.paint(style(format!("-{}", summary.totals.deletions)).red())
                    .to_string(),
            ),
            (
                "Est. review time",
                format!("{} minutes", summary.risks.estimate_minutes),
            ),
        ];
        rows.iter()
            .map(|(label, value)| format!("{:<18} {}", label, value))
            .collect()
    }

    fn category_lines(&self, summary: &ReviewSummary) -> Vec<String> {
        let rows = [
            ("Added", Category::Added),
            ("Modified", Category::Modified),
            ("Deleted", Category::Deleted),
            ("Code files", Category::Code),
            ("Tests", Category::Tests),
            ("Docs", Category::Docs),
            ("Config", Category::Config),
            ("Dependencies", Category::Dependencies),
            ("Other", Category::Other),
        ];
        rows.iter()
            .map(|(label, category)| {
                format!("{:<14} {:>5}", label, summary.categories.count(*category))
            })
            .collect()
    }

    fn focus_lines(&self, focus: &[ChangedFile]) -> Vec<String> {
        let width = focus
            .iter()
            .map(|f| measure_text_width(&f.path))
            .max()
            .unwrap_or(0)
            .max("File".len());

        let mut lines = vec![self
            .paint(style(format!(
                "{:<width$}  {:<8}  {:>6}  {:>6}",
                "File",
                "Status",
                "+",
                "-",
                width = width
            )))
            .bold()
            .to_string()];
        for f in focus {
            let pad = width - measure_text_width(&f.path);
            lines.push(format!(
                "{}{}  {:<8}  {:>6}  {:>6}",
                f.path,
                " ".repeat(pad),
                f.status.letter(),
                f.additions,
                f.deletions
            ));
        }
        lines
    }

    fn concern_lines(&self, summary: &ReviewSummary) -> Vec<String> {
        let risks = &summary.risks;
        let mut concerns = Vec::new();

        if !risks.large_changes.is_empty() {
            concerns.push(format!(
                "{} large file{} changed (≥{} LOC churn)",
                risks.large_changes.len(),
                if risks.large_changes.len() == 1 { "" } else { "s" },
                LARGE_CHANGE_THRESHOLD
            ));
        }
        if !risks.new_dependencies.is_empty() {
            concerns.push("New/updated dependencies detected".to_string());
        }
        if !risks.sensitive_areas.is_empty() {
            let areas: Vec<&str> = risks.sensitive_areas.keys().map(|a| a.as_str()).collect();
            concerns.push(format!("Sensitive areas touched: {}", areas.join(", ")));
        }
        if !risks.missing_tests.is_empty() {
            let examples: Vec<&str> = risks.missing_tests.iter().map(|f| f.path.as_str()).collect();
            concerns.push(format!(
                "No tests changed while code changed (e.g. {})",
                examples.join(", ")
            ));
        }

        concerns
            .into_iter()
            .map(|c| format!("{} {}", self.paint(style("•").yellow()), c))
            .collect()
    }

    /// Draw a box around `lines`, with an optional title in the top border.
    fn panel(&self, title: Option<&str>, lines: &[String]) -> Vec<String> {
        let title_width = title.map(|t| measure_text_width(t) + 3).unwrap_or(0);
        let inner = lines
            .iter()
            .map(|l| measure_text_width(l))
            .max()
            .unwrap_or(0)
            .max(title_width)
            + 2;

        let top = match title {
            Some(t) => format!(
                "┌─ {} {}┐",
                self.paint(style(t).bold()),
                "─".repeat(inner - title_width)
            ),
            None => format!("┌{}┐", "─".repeat(inner)),
        };

        let mut out = vec![self.dim(&top)];
        for line in lines {
            let pad = inner - 2 - measure_text_width(line);
            out.push(format!(
                "{} {}{} {}",
                self.dim("│"),
                line,
                " ".repeat(pad),
                self.dim("│")
            ));
        }
        out.push(self.dim(&format!("└{}┘", "─".repeat(inner))));
        out
    }

    fn icon(&self, icon: &'static str) -> &'static str {
        if self.emoji {
            icon
        } else {
            ""
        }
    }

    fn dim(&self, text: &str) -> String {
        self.paint(style(text).dim()).to_string()
    }

    /// Styling follows terminal detection unless color is turned off.
    fn paint<D>(&self, styled: StyledObject<D>) -> StyledObject<D> {
        if self.color {
            styled
        } else {
            styled.force_styling(false)
        }
    }
}
