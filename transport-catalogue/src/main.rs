use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use transport_catalogue::requests::{Mode, RequestError, process};

fn init_logging() {
    // Logs go to stderr; stdout carries the JSON responses.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), RequestError> {
    let arg = std::env::args().nth(1);
    let mode = Mode::from_arg(arg.as_deref())?;
    process(mode, io::stdin().lock(), io::stdout().lock())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "request processing failed");
            ExitCode::FAILURE
        }
    }
}
