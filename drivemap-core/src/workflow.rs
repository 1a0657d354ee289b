//! # Mapping Workflow
//!
//! The single linear run: resolve the user, prompt for the password, store
//! the credential, map the drive. Each stage talks to the OS only through
//! the ports in [`Ports`].
//!
//! Nothing is rolled back. A credential written in step three stays in the
//! store even when the mapping in step four fails.

use tracing::{debug, info};

use crate::config::MappingConfig;
use crate::creds::{Credential, CredentialStore};
use crate::drive::{NetworkDrives, map_drive};
use crate::errors::WorkflowError;
use crate::identity::{IdentityProvider, Username, resolve_identity};
use crate::output::{format_user, print_info, print_success};
use crate::prompts::SecretReader;

/// Prompt shown when asking for the password
pub const PASSWORD_PROMPT: &str = "Enter your password";

/// The OS services the workflow drives
pub struct Ports<'a> {
  pub identity: &'a dyn IdentityProvider,
  pub secrets: &'a dyn SecretReader,
  pub store: &'a dyn CredentialStore,
  pub drives: &'a dyn NetworkDrives,
}

/// Overrides supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct MapOptions {
  /// Credential Manager target name; the network path when unset
  pub target_name: Option<String>,
  /// Account to use instead of the session identity
  pub username: Option<String>,
  /// Restore the mapping at next logon
  pub remember: bool,
}

impl MapOptions {
  /// The target name the credential is stored under
  pub fn target_for(&self, config: &MappingConfig) -> String {
    self
      .target_name
      .clone()
      .filter(|target| !target.is_empty())
      .unwrap_or_else(|| config.network_path.clone())
  }
}

/// Run the full mapping sequence
pub fn run(ports: &Ports<'_>, config: &MappingConfig, options: &MapOptions) -> Result<(), WorkflowError> {
  let username = match options.username.as_deref().filter(|name| !name.is_empty()) {
    Some(name) => {
      debug!("Using username from command line");
      Username::new(name)?
    }
    None => resolve_identity(ports.identity)?,
  };

  print_info(&format!("Username: {}", format_user(username.as_str())));

  let secret = ports.secrets.read_secret(PASSWORD_PROMPT)?;

  let credential = Credential {
    target_name: options.target_for(config),
    username,
    secret,
  };

  info!("Writing credential for target {}", credential.target_name);
  ports.store.write(&credential)?;
  print_success("Credentials stored in Credential Manager successfully.");

  map_drive(ports.drives, config, &credential, options.remember)?;

  Ok(())
}
