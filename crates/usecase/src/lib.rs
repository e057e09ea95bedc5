//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`query`]: the file size query, driven through a [`SizeProbe`](file_size_ports::probe::SizeProbe)
//! - [`compat`]: sentinel-value adapter for callers expecting `-1` on failure
//!
//! Use cases depend on ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod compat;
pub mod query;

pub use compat::{NOT_FOUND_DIAGNOSTIC, SENTINEL_NOT_ACCESSIBLE, to_sentinel};
pub use query::FileSizeQuery;
