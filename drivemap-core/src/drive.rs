//! # Network Drive Mapping
//!
//! Replaces whatever is mapped on a drive letter with an authenticated
//! connection to a network share.

use tracing::debug;

use crate::config::MappingConfig;
use crate::creds::Credential;
use crate::errors::{DriveMapError, DriveMapWarning};
use crate::output::{format_drive, format_share, print_success, print_warning};

/// Result of tearing down an existing mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisconnectOutcome {
  /// A previous connection was removed
  Disconnected,
  /// Nothing was mapped on the drive letter
  NotConnected,
}

/// A disk-type network resource to attach to a local drive letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkResource {
  pub local_name: String,
  pub remote_name: String,
  /// Restore the connection at next logon
  pub remember: bool,
}

impl NetworkResource {
  pub fn from_config(config: &MappingConfig, remember: bool) -> Self {
    Self {
      local_name: config.drive_letter.clone(),
      remote_name: config.network_path.clone(),
      remember,
    }
  }
}

/// Port to the OS table of mapped network drives
#[cfg_attr(test, mockall::automock)]
pub trait NetworkDrives {
  /// Remove any connection on `local_name`, forcing open handles closed
  fn disconnect(&self, local_name: &str) -> Result<DisconnectOutcome, DriveMapWarning>;

  /// Connect `resource`, authenticating with `credential`
  fn connect(&self, resource: &NetworkResource, credential: &Credential) -> Result<(), DriveMapError>;
}

/// Map the configured drive letter to the configured share
///
/// A failed disconnect is reported as a warning and the connect is still
/// attempted.
pub fn map_drive(
  drives: &dyn NetworkDrives,
  config: &MappingConfig,
  credential: &Credential,
  remember: bool,
) -> Result<(), DriveMapError> {
  match drives.disconnect(&config.drive_letter) {
    Ok(outcome) => debug!("Disconnect on {}: {outcome:?}", config.drive_letter),
    Err(warning) => print_warning(&format!("Warning: {warning}.")),
  }

  let resource = NetworkResource::from_config(config, remember);
  drives.connect(&resource, credential)?;

  print_success(&format!(
    "Drive {} mapped to {} successfully.",
    format_drive(&config.drive_letter),
    format_share(&config.network_path)
  ));
  Ok(())
}

#[cfg(test)]
mod tests {
  use mockall::Sequence;

  use super::*;
  use crate::creds::Secret;
  use crate::identity::Username;

  fn config() -> MappingConfig {
    MappingConfig {
      drive_letter: "Z:".to_string(),
      network_path: r"\\server\share".to_string(),
    }
  }

  fn credential() -> Credential {
    Credential {
      target_name: r"\\server\share".to_string(),
      username: Username::new("alice@corp.example").unwrap(),
      secret: Secret::new("hunter22"),
    }
  }

  #[test]
  fn test_not_connected_still_connects() {
    let mut drives = MockNetworkDrives::new();
    let mut seq = Sequence::new();
    drives
      .expect_disconnect()
      .withf(|drive| drive == "Z:")
      .times(1)
      .in_sequence(&mut seq)
      .returning(|_| Ok(DisconnectOutcome::NotConnected));
    drives
      .expect_connect()
      .withf(|resource, credential| {
        resource.local_name == "Z:"
          && resource.remote_name == r"\\server\share"
          && !resource.remember
          && credential.username.as_str() == "alice@corp.example"
          && credential.secret.expose() == "hunter22"
      })
      .times(1)
      .in_sequence(&mut seq)
      .returning(|_, _| Ok(()));

    map_drive(&drives, &config(), &credential(), false).unwrap();
  }

  #[test]
  fn test_failed_disconnect_is_not_fatal() {
    let mut drives = MockNetworkDrives::new();
    drives.expect_disconnect().returning(|drive| {
      Err(DriveMapWarning {
        drive: drive.to_string(),
        code: 2404,
      })
    });
    drives.expect_connect().times(1).returning(|_, _| Ok(()));

    assert!(map_drive(&drives, &config(), &credential(), false).is_ok());
  }

  #[test]
  fn test_connect_failure_is_reported() {
    let mut drives = MockNetworkDrives::new();
    drives
      .expect_disconnect()
      .returning(|_| Ok(DisconnectOutcome::Disconnected));
    drives.expect_connect().returning(|resource, _| {
      Err(DriveMapError::Connect {
        drive: resource.local_name.clone(),
        path: resource.remote_name.clone(),
        code: 1326,
      })
    });

    let err = map_drive(&drives, &config(), &credential(), false).unwrap_err();
    assert!(matches!(err, DriveMapError::Connect { code: 1326, .. }));
  }

  #[test]
  fn test_remember_is_passed_through() {
    let mut drives = MockNetworkDrives::new();
    drives
      .expect_disconnect()
      .returning(|_| Ok(DisconnectOutcome::NotConnected));
    drives
      .expect_connect()
      .withf(|resource, _| resource.remember)
      .times(1)
      .returning(|_, _| Ok(()));

    map_drive(&drives, &config(), &credential(), true).unwrap();
  }
}
