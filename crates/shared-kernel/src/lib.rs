// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ErrorContext, FileSizeError, PresentationError, QueryError, QueryResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{FilePath, FileSize};
