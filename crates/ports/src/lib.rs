//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`probe`]: measuring the byte size of a single file
//!
//! These ports keep the use case independent of how a size is obtained.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod probe;
