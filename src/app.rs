use std::{io::Write, process::ExitCode};

use anyhow::{Context, Result};

use crate::{config::Config, presentation, query_with};

/// How a run ended when no unexpected error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Measured,
    /// The failure was already reported through compatibility output.
    NotMeasured,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Measured => ExitCode::SUCCESS,
            Outcome::NotMeasured => ExitCode::FAILURE,
        }
    }
}

/// Measures `config.path` and writes the result to `out`.
///
/// # Errors
///
/// Query failures outside compatibility mode, and write failures.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<Outcome> {
    let result = query_with(&config.path, config.strategy);

    if config.compat {
        presentation::write_compat(out, &result).context("writing compatibility output")?;
        return Ok(if result.is_ok() { Outcome::Measured } else { Outcome::NotMeasured });
    }

    let size = result?;
    presentation::write_size(out, &config.path, size, config.format, config.strategy)
        .context("writing size report")?;
    Ok(Outcome::Measured)
}
