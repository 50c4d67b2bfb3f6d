// crates/ports/src/records.rs
use std::path::Path;

use sanctuary_stats_domain::model::SubmissionRecord;
use sanctuary_stats_shared_kernel::Result;

/// Port for decoding a newline-delimited structured log.
///
/// Every non-blank line yields exactly one record; a line that fails to
/// decode fails the whole read.
pub trait RecordReader {
    fn read(&self, path: &Path) -> Result<Vec<SubmissionRecord>>;
}
