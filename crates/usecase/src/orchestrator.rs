use chrono::{DateTime, Local};
use log::info;
use sanctuary_stats_domain::{
    analytics::GroupAggregator,
    config::{GroupTarget, NetworkTarget, ReportPlan},
    model::{GroupSummary, RunTotals},
};
use sanctuary_stats_ports::{filesystem::FileEnumerator, records::RecordReader, report::ReportSink};
use sanctuary_stats_shared_kernel::{ApplicationError, Result, StatsError};

use crate::format::ReportFormatter;

/// Totals of one network, as returned by [`RunOrchestrator::run_plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTotals {
    pub network: String,
    pub totals: RunTotals,
}

/// Drives enumeration, aggregation and rendering for every group of a plan.
pub struct RunOrchestrator<'a> {
    enumerator: &'a dyn FileEnumerator,
    reader: &'a dyn RecordReader,
    formatter: &'a dyn ReportFormatter,
    aggregator: GroupAggregator,
    extension: String,
    log_file_name: String,
}

impl<'a> RunOrchestrator<'a> {
    pub fn new(
        enumerator: &'a dyn FileEnumerator,
        reader: &'a dyn RecordReader,
        formatter: &'a dyn ReportFormatter,
        plan: &ReportPlan,
    ) -> Self {
        Self {
            enumerator,
            reader,
            formatter,
            aggregator: GroupAggregator::new().with_utc(plan.utc),
            extension: plan.extension().to_string(),
            log_file_name: plan.log_file_name.clone(),
        }
    }

    /// Enumerate, filter and aggregate a single group.
    pub fn summarize_group(&self, group: &GroupTarget) -> Result<GroupSummary> {
        let files: Vec<_> = self
            .enumerator
            .collect(&group.path)?
            .into_iter()
            .filter(|entry| entry.has_extension(&self.extension))
            .collect();
        let records = self.reader.read(&group.path.join(&self.log_file_name))?;
        Ok(self.aggregator.summarize(&group.name, &files, records))
    }

    /// Report one network: a section per group, streamed as each completes,
    /// then the totals section.
    pub fn run(&self, network: &NetworkTarget, sink: &mut dyn ReportSink) -> Result<RunTotals> {
        let mut totals = RunTotals::new();
        for group in &network.groups {
            info!("{} / {}: scanning {}", network.name, group.name, group.path.display());
            let summary = self.summarize_group(group).map_err(|source| group_failed(&group.name, source))?;
            info!(
                "{} / {}: {} source unit(s), {} unique name(s)",
                network.name,
                group.name,
                summary.file_count,
                summary.unique_names()
            );
            sink.emit(&self.formatter.group_section(&network.name, &summary))?;
            totals.absorb(&summary);
        }
        sink.emit(&self.formatter.totals_section(&network.name, &totals))?;
        Ok(totals)
    }

    /// Full report: preamble once, then every network in plan order.
    pub fn run_plan(
        &self,
        plan: &ReportPlan,
        generated_at: &DateTime<Local>,
        sink: &mut dyn ReportSink,
    ) -> Result<Vec<NetworkTotals>> {
        sink.emit(&self.formatter.preamble(plan, generated_at))?;
        let mut results = Vec::with_capacity(plan.networks.len());
        for (idx, network) in plan.networks.iter().enumerate() {
            if idx > 0 {
                sink.emit(&self.formatter.network_separator())?;
            }
            sink.emit(&self.formatter.network_heading(&network.name))?;
            let totals = self.run(network, sink).map_err(|source| network_failed(&network.name, source))?;
            results.push(NetworkTotals { network: network.name.clone(), totals });
        }
        sink.finish()?;
        Ok(results)
    }
}

fn group_failed(group: &str, source: StatsError) -> StatsError {
    ApplicationError::GroupFailed { group: group.to_string(), source: Box::new(source) }.into()
}

fn network_failed(network: &str, source: StatsError) -> StatsError {
    ApplicationError::NetworkFailed { network: network.to_string(), source: Box::new(source) }.into()
}
