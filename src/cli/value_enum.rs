use clap::ValueEnum;
use file_size_ports::probe::ProbeStrategy;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Plain,
    Human,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Plain => OutputFormat::Plain,
            CliOutputFormat::Human => OutputFormat::Human,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliProbeStrategy {
    Seek,
    Metadata,
}

impl From<CliProbeStrategy> for ProbeStrategy {
    fn from(value: CliProbeStrategy) -> Self {
        match value {
            CliProbeStrategy::Seek => ProbeStrategy::Seek,
            CliProbeStrategy::Metadata => ProbeStrategy::Metadata,
        }
    }
}
