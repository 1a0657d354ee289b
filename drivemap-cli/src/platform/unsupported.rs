//! Fallback adapters for platforms without Credential Manager or WNet

use drivemap_core::{
  Credential, CredentialStore, CredentialStoreError, DisconnectOutcome, DriveMapError, DriveMapWarning,
  IdentityProvider, NetworkDrives, NetworkResource,
};
use tracing::debug;

pub struct UnsupportedIdentity;

impl IdentityProvider for UnsupportedIdentity {
  fn principal_name(&self) -> Option<String> {
    debug!("User principal names are only available on Windows");
    None
  }

  fn account_name(&self) -> Option<String> {
    debug!("Session account lookup is only available on Windows");
    None
  }
}

pub struct UnsupportedCredentialStore;

impl CredentialStore for UnsupportedCredentialStore {
  fn write(&self, _credential: &Credential) -> Result<(), CredentialStoreError> {
    Err(CredentialStoreError::Unsupported)
  }
}

pub struct UnsupportedNetworkDrives;

impl NetworkDrives for UnsupportedNetworkDrives {
  fn disconnect(&self, _local_name: &str) -> Result<DisconnectOutcome, DriveMapWarning> {
    Ok(DisconnectOutcome::NotConnected)
  }

  fn connect(&self, _resource: &NetworkResource, _credential: &Credential) -> Result<(), DriveMapError> {
    Err(DriveMapError::Unsupported)
  }
}
