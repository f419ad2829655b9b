pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use std::process::ExitCode;
use unyaffs_core::ExtractOptions;

pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and are not failures
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    let opts = ExtractOptions {
        chunk_size: cli.chunk_size,
        spare_size: cli.spare_size,
        max_objects: cli.max_objects,
        max_warnings: cli.max_warnings,
    };

    match handlers::handle_extract(cli.image, opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
