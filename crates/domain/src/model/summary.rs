use sanctuary_stats_shared_kernel::{FileCount, NameCount};
use serde::Serialize;

use crate::{analytics::FrequencyCounter, calendar::date_range};

/// Aggregated statistics for a single group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub name: String,
    pub file_count: FileCount,
    pub compilers: FrequencyCounter,
    pub names: FrequencyCounter,
    pub dates: FrequencyCounter,
}

impl GroupSummary {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    pub fn unique_names(&self) -> NameCount {
        NameCount::new(self.names.size())
    }

    /// Earliest and latest submission date, `None` when no dates were seen.
    pub fn date_range(&self) -> Option<(&str, &str)> {
        date_range(self.dates.labels())
    }

    pub fn first_date(&self) -> Option<&str> {
        self.date_range().map(|(first, _)| first)
    }

    pub fn last_date(&self) -> Option<&str> {
        self.date_range().map(|(_, last)| last)
    }
}

/// Running totals across the groups of one network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunTotals {
    pub file_count: FileCount,
    pub unique_name_count: NameCount,
}

impl RunTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one group into the totals. Names are not de-duplicated across groups.
    pub fn absorb(&mut self, summary: &GroupSummary) {
        self.file_count += summary.file_count;
        self.unique_name_count += summary.unique_names();
    }
}
