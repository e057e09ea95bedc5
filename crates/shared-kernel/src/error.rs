// crates/shared-kernel/src/error.rs
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileSizeError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FileSizeError>,
    },

    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, FileSizeError>;

impl FileSizeError {
    /// Returns the underlying query failure, looking through any context layers.
    pub fn query_error(&self) -> Option<&QueryError> {
        match self {
            Self::Context { source, .. } => source.query_error(),
            Self::Query(err) => Some(err),
            Self::Presentation(_) => None,
        }
    }

    pub fn is_not_accessible(&self) -> bool {
        self.query_error().is_some_and(QueryError::is_not_accessible)
    }
}

/// Failures while measuring a single file.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The file could not be opened for reading (missing, permission denied,
    /// invalid path, or a directory).
    #[error("File not accessible '{path}': {source}")]
    FileNotAccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but its end offset could not be determined.
    #[error("Size unavailable for '{path}': {source}")]
    SizeUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a regular file: '{path}'")]
    NotRegularFile { path: PathBuf },
}

pub type QueryResult<T> = std::result::Result<T, QueryError>;

impl QueryError {
    pub fn path(&self) -> &Path {
        match self {
            Self::FileNotAccessible { path, .. }
            | Self::SizeUnavailable { path, .. }
            | Self::NotRegularFile { path } => path,
        }
    }

    pub fn is_not_accessible(&self) -> bool {
        matches!(self, Self::FileNotAccessible { .. })
    }
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to render {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<std::io::Error> for PresentationError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for FileSizeError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FileSizeError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FileSizeError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FileSizeError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FileSizeError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
