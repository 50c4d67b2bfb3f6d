// crates/usecase/src/format/markdown.rs
use std::fmt::Write as _;

use chrono::{DateTime, Local};
use sanctuary_stats_domain::{
    analytics::FrequencyCounter,
    config::ReportPlan,
    model::{GroupSummary, RunTotals},
};

use super::{ReportFormatter, TOP_K};

const MISSING_DATE: &str = "n/a";

/// Markdown rendering of the report.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn preamble(&self, plan: &ReportPlan, generated_at: &DateTime<Local>) -> String {
        let mut out = format!("# {}\n\n", plan.title);
        for network in &plan.networks {
            let _ = writeln!(out, "* [{}](#{})", network.name, anchor(&network.name));
            for group in &network.groups {
                let _ = writeln!(out, "  * {}", group.name);
            }
        }
        let _ = write!(out, "\n_______________\n\n<sup>\nlast updated: {}\n</sup>\n\n", generated_at.to_rfc2822());
        out
    }

    fn network_heading(&self, network: &str) -> String {
        format!("## {network}\n")
    }

    fn group_section(&self, _network: &str, summary: &GroupSummary) -> String {
        let (first, last) = summary.date_range().unwrap_or((MISSING_DATE, MISSING_DATE));
        let mut out = String::new();
        let _ = writeln!(out, "\n### {}\n", summary.name);
        let _ = writeln!(out, "**SourceUnits:** {}  ", code(&summary.file_count.to_string()));
        let _ = writeln!(out, "**Unique Submissions (Name):** {}  \n", code(&summary.unique_names().to_string()));
        let _ = writeln!(out, "**First Submission:** {}  ", code(first));
        let _ = writeln!(out, "**Most Recent Submission:** {}  \n", code(last));
        let _ = writeln!(out, "#### Top {TOP_K}\n");
        write_top(&mut out, "Compiler", &summary.compilers);
        write_top(&mut out, "Names", &summary.names);
        write_top(&mut out, "Submission Dates", &summary.dates);
        out
    }

    fn totals_section(&self, _network: &str, totals: &RunTotals) -> String {
        let mut out = String::from("\n### ___totals___\n\n");
        let _ = writeln!(out, "**SourceUnits:** {}  ", code(&totals.file_count.to_string()));
        let _ = writeln!(
            out,
            "**Unique Contract Names (submissions):** {}  ",
            code(&totals.unique_name_count.to_string())
        );
        out
    }

    fn network_separator(&self) -> String {
        "\n--------\n\n".to_string()
    }
}

fn write_top(out: &mut String, label: &str, counter: &FrequencyCounter) {
    let _ = writeln!(out, "**{label}:**");
    for (entry, count) in counter.top_k(TOP_K) {
        let _ = writeln!(out, "   * {} ({count})", code(entry));
    }
    out.push('\n');
}

/// Inline code span that survives labels containing backticks.
fn code(text: &str) -> String {
    if text.contains('`') { format!("`` {text} ``") } else { format!("`{text}`") }
}

/// GitHub-style heading anchor.
pub fn anchor(heading: &str) -> String {
    heading
        .chars()
        .filter_map(|c| match c {
            ' ' | '/' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .flat_map(char::to_lowercase)
        .collect()
}
