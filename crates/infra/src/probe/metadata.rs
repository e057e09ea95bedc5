use std::path::Path;

use file_size_ports::probe::{ProbeStrategy, SizeProbe};
use file_size_shared_kernel::{FileSize, QueryError, QueryResult};

use crate::persistence::FileReader;

/// Measures a file from the metadata of an open handle.
///
/// Opening first keeps the accessibility rules identical to the seek probe.
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataSizeProbe;

impl MetadataSizeProbe {
    pub fn new() -> Self {
        Self
    }

    pub fn measure(path: &Path) -> QueryResult<FileSize> {
        let file = FileReader::open(path)?;
        let metadata = file
            .metadata()
            .map_err(|source| QueryError::SizeUnavailable { path: path.to_path_buf(), source })?;
        if !metadata.is_file() {
            return Err(QueryError::NotRegularFile { path: path.to_path_buf() });
        }
        Ok(FileSize::new(metadata.len()))
    }
}

impl SizeProbe for MetadataSizeProbe {
    fn strategy(&self) -> ProbeStrategy {
        ProbeStrategy::Metadata
    }

    fn probe(&self, path: &Path) -> QueryResult<FileSize> {
        Self::measure(path)
    }
}
