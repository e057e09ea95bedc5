use std::path::Path;

use file_size_ports::probe::SizeProbe;
use file_size_shared_kernel::{FileSize, Result};

/// Single-file size query. One open, one measurement, one release per call;
/// nothing is cached between calls.
pub struct FileSizeQuery<'a> {
    probe: &'a dyn SizeProbe,
}

impl<'a> FileSizeQuery<'a> {
    pub fn new(probe: &'a dyn SizeProbe) -> Self {
        Self { probe }
    }

    pub fn run(&self, path: &Path) -> Result<FileSize> {
        tracing::debug!(path = %path.display(), strategy = %self.probe.strategy(), "querying file size");
        match self.probe.probe(path) {
            Ok(size) => {
                tracing::debug!(path = %path.display(), bytes = size.bytes(), "file size resolved");
                Ok(size)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "file size query failed");
                Err(err.into())
            }
        }
    }
}
