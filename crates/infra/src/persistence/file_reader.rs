use std::{
    fs::{File, OpenOptions},
    io,
    path::Path,
};

use file_size_shared_kernel::{QueryError, QueryResult};

/// Read-only file access with the error mapping shared by every probe.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` for reading.
    ///
    /// Every failure becomes [`QueryError::FileNotAccessible`]. Directories are
    /// refused even on platforms where opening one for reading succeeds. On
    /// Unix the open is non-blocking, so a FIFO without a writer is returned
    /// immediately instead of stalling the caller.
    pub fn open(path: &Path) -> QueryResult<File> {
        let file = read_only().open(path).map_err(|source| not_accessible(path, source))?;
        let metadata = file.metadata().map_err(|source| not_accessible(path, source))?;
        if metadata.is_dir() {
            return Err(not_accessible(path, io::Error::from(io::ErrorKind::IsADirectory)));
        }
        Ok(file)
    }
}

#[cfg(unix)]
fn read_only() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    options.read(true).custom_flags(libc::O_NONBLOCK);
    options
}

#[cfg(not(unix))]
fn read_only() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true);
    options
}

fn not_accessible(path: &Path, source: io::Error) -> QueryError {
    QueryError::FileNotAccessible { path: path.to_path_buf(), source }
}

/// Creates a named pipe at `path` for tests that need a non-seekable file.
#[cfg(all(test, unix))]
pub(crate) fn make_fifo(path: &Path) {
    let status = std::process::Command::new("mkfifo").arg(path).status().unwrap();
    assert!(status.success(), "mkfifo failed for {}", path.display());
}
