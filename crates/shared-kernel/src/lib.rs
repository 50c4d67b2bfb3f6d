// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfrastructureError, Result, StatsError,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{FileCount, NameCount};
