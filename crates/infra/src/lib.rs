// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod probe;

pub use probe::{MetadataSizeProbe, SeekSizeProbe, probe_for};
