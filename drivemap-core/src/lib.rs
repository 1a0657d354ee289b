//! # drivemap Core Library
//!
//! Platform-independent pieces of drivemap: the mapping config loader, the
//! ports through which the OS is reached (identity, secret prompt,
//! credential store, network drives) and the workflow that runs them in
//! order. OS adapters live in the CLI crate.

pub mod config;
pub mod creds;
pub mod drive;
pub mod errors;
pub mod identity;
pub mod output;
pub mod prompts;
pub mod workflow;

pub use config::{DEFAULT_CONFIG_FILE, MappingConfig};
pub use creds::{Credential, CredentialStore, Secret};
pub use drive::{DisconnectOutcome, NetworkDrives, NetworkResource, map_drive};
pub use errors::{
  ConfigError, CredentialStoreError, DriveMapError, DriveMapWarning, IdentityError, PromptError, WorkflowError,
};
pub use identity::{IdentityProvider, Username, resolve_identity};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use prompts::{SecretReader, TerminalSecretReader};
pub use workflow::{MapOptions, Ports, run};
