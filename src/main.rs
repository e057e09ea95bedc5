// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use file_size::{app, cli, logging};

fn main() -> ExitCode {
    let config = cli::load_config();
    logging::init(config.log_level);

    let stdout = std::io::stdout();
    match app::run(&config, &mut stdout.lock()) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
