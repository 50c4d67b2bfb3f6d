//! # Ports
//!
//! Interface definitions for the report's external collaborators:
//!
//! - [`filesystem`]: recursive listing of a group's directory
//! - [`records`]: decoding a group's structured log
//! - [`report`]: the sink the rendered report is written to
//!
//! The use-case layer only sees these traits, so it can be driven by
//! in-memory fakes in tests.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod records;
pub mod report;
