pub mod date_key;
pub mod timestamp;

pub use date_key::{DateKey, date_range, sort_dates};
pub use timestamp::{SUBMISSION_DATE_TEMPLATE, Timestamp, format_template};
