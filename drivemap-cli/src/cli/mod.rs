//! # Command Line Interface
//!
//! Defines the `drivemap` arguments and runs the mapping workflow against
//! the platform ports.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser};
use drivemap_core::config::{DEFAULT_CONFIG_FILE, MappingConfig};
use drivemap_core::output::{ColorMode, format_drive, format_share, format_user, print_info, print_success};
use drivemap_core::prompts::TerminalSecretReader;
use drivemap_core::workflow::{self, MapOptions, Ports};
use tracing::debug;

use crate::platform;

/// Map a network share to a drive letter with stored credentials
#[derive(Parser, Debug)]
#[command(name = "drivemap")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Map a network share to a drive letter using credentials stored in Credential Manager")]
#[command(
  long_about = "Reads the drive letter and network share from a config file, asks for your password,\n\
        stores the credential in the Windows Credential Manager and maps the drive.\n\n\
        The config file holds two lines:\n\
        \n    drive_letter=Z:\n    network_path=\\\\server\\share"
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Path to the mapping config file
  #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILE)]
  pub config: PathBuf,

  /// Use this username instead of the current session's identity
  #[arg(short, long, value_name = "NAME")]
  pub user: Option<String>,

  /// Credential Manager target name (defaults to the network path)
  #[arg(short, long, value_name = "NAME")]
  pub target: Option<String>,

  /// Restore the mapping at next logon
  #[arg(long)]
  pub remember: bool,

  /// Validate the config and show what would be done without prompting or
  /// changing anything
  #[arg(long, short = 'n')]
  pub dry_run: bool,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,
}

impl Cli {
  fn map_options(&self) -> MapOptions {
    MapOptions {
      target_name: self.target.clone(),
      username: self.user.clone(),
      remember: self.remember,
    }
  }
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let config = MappingConfig::load(&cli.config).context("Invalid configuration. Please check your config file")?;
  debug!("Loaded config: {config:?}");

  let options = cli.map_options();

  if cli.dry_run {
    print_plan(&config, &options);
    return Ok(());
  }

  let identity = platform::get_identity_provider();
  let store = platform::get_credential_store();
  let drives = platform::get_network_drives();
  let secrets = TerminalSecretReader;

  let ports = Ports {
    identity: identity.as_ref(),
    secrets: &secrets,
    store: store.as_ref(),
    drives: drives.as_ref(),
  };

  workflow::run(&ports, &config, &options)?;
  Ok(())
}

fn print_plan(config: &MappingConfig, options: &MapOptions) {
  print_success("Configuration is valid.");
  print_info(&format!(
    "Would map {} to {}",
    format_drive(&config.drive_letter),
    format_share(&config.network_path)
  ));
  print_info(&format!("Credential target: {}", options.target_for(config)));

  match options.username.as_deref().filter(|name| !name.is_empty()) {
    Some(name) => print_info(&format!("Username: {}", format_user(name))),
    None => print_info("Username: current session identity"),
  }

  if options.remember {
    print_info("The mapping will be restored at next logon.");
  }
}

#[cfg(test)]
mod tests {
  use clap::CommandFactory;

  use super::*;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_defaults() {
    let cli = Cli::try_parse_from(["drivemap"]).unwrap();
    assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    assert!(cli.user.is_none());
    assert!(cli.target.is_none());
    assert!(!cli.remember);
    assert!(!cli.dry_run);
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.colors, ColorMode::Auto);
  }

  #[test]
  fn test_overrides_reach_map_options() {
    let cli = Cli::try_parse_from([
      "drivemap",
      "--config",
      "drives/z.txt",
      "-u",
      "alice@corp.example",
      "--target",
      "fileserver",
      "--remember",
      "-vv",
      "--colors",
      "NEVER",
    ])
    .unwrap();

    assert_eq!(cli.config, PathBuf::from("drives/z.txt"));
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.colors, ColorMode::Never);

    let options = cli.map_options();
    assert_eq!(options.username.as_deref(), Some("alice@corp.example"));
    assert_eq!(options.target_name.as_deref(), Some("fileserver"));
    assert!(options.remember);
  }
}
