pub mod record;
pub mod summary;

pub use record::{SubmissionDate, SubmissionRecord, is_truthy};
pub use summary::{GroupSummary, RunTotals};
