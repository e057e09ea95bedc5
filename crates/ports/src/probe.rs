// crates/ports/src/probe.rs
use std::{fmt, path::Path};

use file_size_shared_kernel::{FileSize, QueryResult};
use serde::{Deserialize, Serialize};

/// How a probe arrives at the byte count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStrategy {
    /// Open, seek to the end, read back the cursor position.
    #[default]
    Seek,
    /// Open, then read the length from the handle's metadata.
    Metadata,
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seek => f.write_str("seek"),
            Self::Metadata => f.write_str("metadata"),
        }
    }
}

/// Port for measuring a single file.
///
/// Implementations must release any handle they acquire before returning,
/// on both the success and failure paths.
pub trait SizeProbe: Send + Sync {
    fn strategy(&self) -> ProbeStrategy;
    fn probe(&self, path: &Path) -> QueryResult<FileSize>;
}
