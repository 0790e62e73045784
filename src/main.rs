//! Prints the heroine's state once per second until the process is killed.
//!
//! Diagnostics go to stderr and are silent by default; set `RUST_LOG`
//! (for example `RUST_LOG=heroine=debug`) to see state changes.

use heroine::{Runner, RunnerConfig, SystemClock};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let mut runner = Runner::new(SystemClock, io::stdout(), RunnerConfig::default());

    match runner.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "heroine stopped");
            ExitCode::FAILURE
        }
    }
}
