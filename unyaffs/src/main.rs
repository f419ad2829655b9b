mod application;

mod presentation {
    pub mod cli;
}

use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn main() -> ExitCode {
    // RUST_LOG overrides; progress and diagnostics go to stderr, stdout is
    // reserved for the end-of-image notice
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    application::run()
}
