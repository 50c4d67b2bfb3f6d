// crates/usecase/src/format.rs
pub mod jsonl;
pub mod markdown;

use chrono::{DateTime, Local};
use sanctuary_stats_domain::{
    config::ReportPlan,
    model::{GroupSummary, RunTotals},
};

pub use jsonl::JsonlFormatter;
pub use markdown::MarkdownFormatter;

/// Number of entries listed in each "Top" table.
pub const TOP_K: usize = 10;

/// Renders the pieces of a report. Every method returns a complete chunk so
/// the caller can hand it to the sink in one write.
pub trait ReportFormatter {
    fn preamble(&self, plan: &ReportPlan, generated_at: &DateTime<Local>) -> String;

    fn network_heading(&self, network: &str) -> String;

    fn group_section(&self, network: &str, summary: &GroupSummary) -> String;

    fn totals_section(&self, network: &str, totals: &RunTotals) -> String;

    /// Emitted between two consecutive networks.
    fn network_separator(&self) -> String;
}
