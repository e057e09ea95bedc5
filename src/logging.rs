use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Warn,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Self::Trace
        } else if verbose {
            Self::Debug
        } else {
            Self::Warn
        }
    }

    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// results. `RUST_LOG` applies unless a verbosity flag was given.
pub fn init(level: LogLevel) {
    let filter = match level {
        LogLevel::Warn => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive())),
        _ => EnvFilter::new(level.as_directive()),
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
