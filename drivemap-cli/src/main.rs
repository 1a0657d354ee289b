//! # drivemap CLI Entry Point
//!
//! Stores the user's network credential and maps the configured share to a
//! drive letter. Exits with status 1 on any failure.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use drivemap_cli::cli::{Cli, handle_cli};
use drivemap_core::output::print_error;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  match handle_cli(cmd) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{e:#}"));
      ExitCode::FAILURE
    }
  }
}
