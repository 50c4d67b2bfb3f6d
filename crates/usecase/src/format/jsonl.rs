// crates/usecase/src/format/jsonl.rs
use chrono::{DateTime, Local};
use sanctuary_stats_domain::{
    config::ReportPlan,
    model::{GroupSummary, RunTotals},
};

use super::ReportFormatter;

/// One JSON object per line: a `report` header, a `group` object per group
/// and a `total` object per network.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        Self
    }
}

fn line(value: serde_json::Value) -> String {
    format!("{value}\n")
}

impl ReportFormatter for JsonlFormatter {
    fn preamble(&self, plan: &ReportPlan, generated_at: &DateTime<Local>) -> String {
        line(serde_json::json!({
            "type": "report",
            "title": plan.title,
            "generated_at": generated_at.to_rfc3339(),
            "networks": plan.networks.iter().map(|n| n.name.as_str()).collect::<Vec<_>>(),
        }))
    }

    fn network_heading(&self, _network: &str) -> String {
        String::new()
    }

    fn group_section(&self, network: &str, summary: &GroupSummary) -> String {
        let range = summary.date_range();
        line(serde_json::json!({
            "type": "group",
            "network": network,
            "name": summary.name,
            "file_count": summary.file_count,
            "unique_names": summary.unique_names(),
            "first_date": range.map(|(first, _)| first),
            "last_date": range.map(|(_, last)| last),
            "compilers": summary.compilers,
            "names": summary.names,
            "dates": summary.dates,
        }))
    }

    fn totals_section(&self, network: &str, totals: &RunTotals) -> String {
        line(serde_json::json!({
            "type": "total",
            "network": network,
            "file_count": totals.file_count,
            "unique_name_count": totals.unique_name_count,
        }))
    }

    fn network_separator(&self) -> String {
        String::new()
    }
}
