pub mod plan;

pub use plan::{
    DEFAULT_LOG_FILE_NAME, DEFAULT_SOURCE_EXTENSION, DEFAULT_TITLE, GroupTarget, NetworkTarget, ReportPlan,
};
