//! # Domain
//!
//! Pure aggregation logic for the submission statistics report:
//!
//! - [`analytics`]: frequency counting and the per-group aggregation pass
//! - [`calendar`]: `M/D/YYYY` ordering keys and timestamp formatting
//! - [`model`]: decoded log records, group summaries and run totals
//! - [`config`]: the explicit report plan (networks, groups, paths)
//!
//! Nothing here touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod calendar;
pub mod config;
pub mod model;
