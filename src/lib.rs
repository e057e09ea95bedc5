// tracing-subscriber と clap の推移的依存でバージョンが混在するための抑制
#![allow(clippy::multiple_crate_versions)]

//! Byte size of a single file, measured by seeking to its end.
//!
//! ```no_run
//! let size = file_size::query("Cargo.toml")?;
//! println!("{size} bytes ({size:#})");
//! # Ok::<(), file_size::FileSizeError>(())
//! ```

use std::path::Path;

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod version;

pub use file_size_ports::probe::{ProbeStrategy, SizeProbe};
pub use file_size_shared_kernel::{FilePath, FileSize, FileSizeError, QueryError, Result};
pub use file_size_usecase::{FileSizeQuery, NOT_FOUND_DIAGNOSTIC, SENTINEL_NOT_ACCESSIBLE, to_sentinel};
pub use version::VERSION;

use file_size_infra::{SeekSizeProbe, probe_for};

/// Size of the file at `path` using the seek-to-end technique.
///
/// # Errors
///
/// [`QueryError::FileNotAccessible`] when the file cannot be opened for
/// reading (including directories), [`QueryError::SizeUnavailable`] when the
/// end offset cannot be read back.
pub fn query(path: impl AsRef<Path>) -> Result<FileSize> {
    FileSizeQuery::new(&SeekSizeProbe::new()).run(path.as_ref())
}

/// Size of the file at `path` using the given probe strategy.
///
/// # Errors
///
/// Same as [`query`]; the metadata strategy additionally reports
/// [`QueryError::NotRegularFile`] for devices and other special files.
pub fn query_with(path: impl AsRef<Path>, strategy: ProbeStrategy) -> Result<FileSize> {
    let probe = probe_for(strategy);
    FileSizeQuery::new(probe.as_ref()).run(path.as_ref())
}

/// Alias of [`query`].
///
/// # Errors
///
/// See [`query`].
pub fn file_size(path: impl AsRef<Path>) -> Result<FileSize> {
    query(path)
}

/// Sentinel form of [`query`]: the byte count, or `-1` when the file could
/// not be measured. No diagnostic is printed.
pub fn get_file_size(path: impl AsRef<Path>) -> i64 {
    to_sentinel(&query(path))
}
