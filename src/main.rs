//! Command line entry point.
//!
//! Parses arguments, runs the command, renders the report to stdout and maps
//! failures to a non-zero exit code. Diagnostics go to stderr via `tracing`.

use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use geograph::{
    cli::{render, run_cli, Cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let execution = run_cli(cli).context("failed to execute command")?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render(&execution, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;

    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!("command failed: {err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
