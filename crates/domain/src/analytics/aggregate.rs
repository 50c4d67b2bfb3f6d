use log::{debug, warn};
use sanctuary_stats_shared_kernel::FileCount;

use crate::{
    calendar::DateKey,
    model::{GroupSummary, SubmissionDate, SubmissionRecord},
};

/// Builds a [`GroupSummary`] from one group's files and structured-log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupAggregator {
    utc: bool,
}

impl GroupAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `date_created` timestamps using the UTC calendar date instead
    /// of the local one.
    pub fn with_utc(mut self, utc: bool) -> Self {
        self.utc = utc;
        self
    }

    /// Single aggregation pass. `files` must already be filtered to source units.
    pub fn summarize<F, I>(&self, name: &str, files: &[F], records: I) -> GroupSummary
    where
        I: IntoIterator<Item = SubmissionRecord>,
    {
        let mut summary = GroupSummary::new(name);
        summary.file_count = FileCount::new(files.len());

        let (mut skipped, mut blank) = (0usize, 0usize);
        for record in records {
            if record.errored {
                skipped += 1;
                continue;
            }
            if record.is_blank() {
                blank += 1;
                continue;
            }
            self.absorb(&mut summary, record);
        }
        if skipped > 0 || blank > 0 {
            debug!("{name}: skipped {skipped} record(s) marked with err, {blank} without aggregated fields");
        }
        summary
    }

    fn absorb(&self, summary: &mut GroupSummary, record: SubmissionRecord) {
        if let Some(compiler) = record.compiler {
            summary.compilers.add(compiler);
        }
        if let Some(name) = record.name {
            summary.names.add(name);
        }
        if let Some(date) = record.date
            && let Some(date) = self.resolve_date(&summary.name, date)
        {
            summary.dates.add(date);
        }
    }

    // Malformed dates are left out of the date table.
    fn resolve_date(&self, group: &str, date: SubmissionDate) -> Option<String> {
        let text = match date {
            SubmissionDate::Formatted(text) => text,
            SubmissionDate::Created(ts) => match ts.to_submission_date(self.utc) {
                Ok(text) => text,
                Err(err) => {
                    warn!("{group}: ignoring date_created: {err}");
                    return None;
                }
            },
        };
        match DateKey::parse(&text) {
            Ok(_) => Some(text),
            Err(err) => {
                warn!("{group}: ignoring date: {err}");
                None
            }
        }
    }
}
