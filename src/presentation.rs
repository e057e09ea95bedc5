use std::io::Write;

use file_size_ports::probe::ProbeStrategy;
use file_size_shared_kernel::{ErrorContext, FilePath, FileSize, Result};
use file_size_usecase::{NOT_FOUND_DIAGNOSTIC, to_sentinel};
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
struct SizeReport<'a> {
    path: &'a FilePath,
    bytes: FileSize,
    human: String,
    strategy: ProbeStrategy,
}

/// Writes a successful measurement in the requested format.
pub fn write_size<W: Write>(
    out: &mut W,
    path: &FilePath,
    size: FileSize,
    format: OutputFormat,
    strategy: ProbeStrategy,
) -> Result<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{size}")?,
        OutputFormat::Human => writeln!(out, "{size:#}")?,
        OutputFormat::Json => {
            let report = SizeReport { path, bytes: size, human: size.to_human(), strategy };
            serde_json::to_writer(&mut *out, &report).context("rendering JSON report")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes the legacy rendering: the byte count, or the not-found diagnostic
/// followed by the sentinel.
pub fn write_compat<W: Write>(out: &mut W, result: &Result<FileSize>) -> Result<()> {
    if result.is_err() {
        writeln!(out, "{NOT_FOUND_DIAGNOSTIC}")?;
    }
    writeln!(out, "{}", to_sentinel(result))?;
    Ok(())
}
