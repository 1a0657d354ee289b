//! # Error Types
//!
//! Typed errors for each stage of the mapping workflow. Every variant is
//! fatal except [`DriveMapWarning`], which is reported and then ignored.
//!
//! Error messages MUST NOT contain the secret.

use std::io;
use std::path::PathBuf;

/// Errors from loading the mapping config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Failed to read config file {}: {source}", path.display())]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Missing or empty '{0}' in config")]
  MissingField(&'static str),
}

/// Errors from resolving the current session identity
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
  #[error("Unable to determine the current user name")]
  Unavailable,

  #[error("Username cannot be empty")]
  Empty,
}

/// Errors from the interactive secret prompt
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
  #[error("Failed to read password: {0}")]
  Terminal(#[from] dialoguer::Error),
}

/// Errors from writing to the OS credential store
#[derive(Debug, thiserror::Error)]
pub enum CredentialStoreError {
  #[error("Failed to store credentials for '{target}' in Credential Manager (Error: {code})")]
  Write { target: String, code: u32 },

  #[error("Credential Manager is not available on this platform")]
  Unsupported,
}

/// Errors from establishing the drive mapping
#[derive(Debug, thiserror::Error)]
pub enum DriveMapError {
  #[error("Failed to map drive {drive} to {path} (Error: {code})")]
  Connect { drive: String, path: String, code: u32 },

  #[error("Network drive mapping is not available on this platform")]
  Unsupported,
}

/// Non-fatal failure to tear down an existing mapping
#[derive(Debug, thiserror::Error)]
#[error("Failed to disconnect existing connection on {drive} (Error: {code})")]
pub struct DriveMapWarning {
  pub drive: String,
  pub code: u32,
}

/// Any fatal error raised while running the workflow
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
  #[error(transparent)]
  Identity(#[from] IdentityError),

  #[error(transparent)]
  Prompt(#[from] PromptError),

  #[error(transparent)]
  CredentialStore(#[from] CredentialStoreError),

  #[error(transparent)]
  DriveMap(#[from] DriveMapError),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_missing_field_names_the_key() {
    let err = ConfigError::MissingField("network_path");
    assert_eq!(err.to_string(), "Missing or empty 'network_path' in config");
  }

  #[test]
  fn test_workflow_error_is_transparent() {
    let err: WorkflowError = DriveMapError::Connect {
      drive: "Z:".to_string(),
      path: r"\\server\share".to_string(),
      code: 53,
    }
    .into();
    assert_eq!(err.to_string(), r"Failed to map drive Z: to \\server\share (Error: 53)");
  }
}
