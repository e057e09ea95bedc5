use std::path::PathBuf;

use file_size_ports::probe::ProbeStrategy;
use file_size_shared_kernel::FilePath;

use crate::logging::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raw byte count.
    #[default]
    Plain,
    /// Base-2 units, e.g. `1.5 KiB`.
    Human,
    Json,
}

/// Runtime configuration resolved from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub path: FilePath,
    pub format: OutputFormat,
    pub strategy: ProbeStrategy,
    /// Legacy output: the size, or `File Not Found!` followed by `-1`.
    pub compat: bool,
    pub log_level: LogLevel,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: FilePath::new(path),
            format: OutputFormat::default(),
            strategy: ProbeStrategy::default(),
            compat: false,
            log_level: LogLevel::default(),
        }
    }
}
