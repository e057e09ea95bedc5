mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliOutputFormat, CliProbeStrategy};

use clap::Parser;

use crate::{
    config::{Config, OutputFormat},
    logging::LogLevel,
};

/// Parse CLI arguments and materialise a [`Config`].
///
/// Exits the process with clap's usage message on invalid arguments.
pub fn load_config() -> Config {
    Config::from(&Args::parse())
}

impl From<&Args> for Config {
    fn from(args: &Args) -> Self {
        // The legacy output has a single fixed shape.
        let format = if args.compat { OutputFormat::Plain } else { args.format.into() };

        Self {
            path: args.path.clone().into(),
            format,
            strategy: args.strategy.into(),
            compat: args.compat,
            log_level: LogLevel::from_flags(args.verbose, args.debug),
        }
    }
}
