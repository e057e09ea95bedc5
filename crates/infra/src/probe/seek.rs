use std::{
    io::{self, Seek, SeekFrom},
    path::Path,
};

use file_size_ports::probe::{ProbeStrategy, SizeProbe};
use file_size_shared_kernel::{FileSize, QueryError, QueryResult};

use crate::persistence::FileReader;

/// Measures a file by seeking to its end and reading back the cursor position.
///
/// Character devices report whatever their driver returns for the seek
/// (`/dev/null` yields 0). Use [`super::MetadataSizeProbe`] to reject
/// non-regular files instead. Pipes cannot be seeked and fail with
/// [`QueryError::SizeUnavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SeekSizeProbe;

impl SeekSizeProbe {
    pub fn new() -> Self {
        Self
    }

    pub fn measure(path: &Path) -> QueryResult<FileSize> {
        let mut file = FileReader::open(path)?;
        file.seek(SeekFrom::End(0)).map_err(|source| unavailable(path, source))?;
        let end = file.stream_position().map_err(|source| unavailable(path, source))?;
        tracing::trace!(path = %path.display(), end, "seeked to end of file");
        Ok(FileSize::new(end))
    }
}

impl SizeProbe for SeekSizeProbe {
    fn strategy(&self) -> ProbeStrategy {
        ProbeStrategy::Seek
    }

    fn probe(&self, path: &Path) -> QueryResult<FileSize> {
        Self::measure(path)
    }
}

fn unavailable(path: &Path, source: io::Error) -> QueryError {
    QueryError::SizeUnavailable { path: path.to_path_buf(), source }
}
