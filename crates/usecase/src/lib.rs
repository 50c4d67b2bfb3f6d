//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports to build the report:
//!
//! - [`orchestrator`]: walks every network and group of a plan, streaming
//!   each section to the sink as soon as it is complete
//! - [`format`]: Markdown and JSON-lines renderers for sections and totals
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod format;
pub mod orchestrator;

pub use format::{JsonlFormatter, MarkdownFormatter, ReportFormatter};
pub use orchestrator::{NetworkTotals, RunOrchestrator};
