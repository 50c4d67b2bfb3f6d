// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod persistence;
pub mod records;
pub mod sink;

pub use filesystem::WalkFileEnumerator;
pub use records::JsonLinesReader;
pub use sink::WriterSink;
