//! Platform-specific implementations of the core ports
//!
//! Windows talks to Credential Manager, the WNet API and the session
//! identity functions. Every other platform gets adapters that report the
//! operation as unsupported, so the binary still builds and `--dry-run`
//! still works there.

use drivemap_core::{CredentialStore, IdentityProvider, NetworkDrives};

#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod windows;

/// Get the identity provider for the current platform
pub fn get_identity_provider() -> Box<dyn IdentityProvider> {
  #[cfg(windows)]
  {
    Box::new(windows::WindowsIdentity)
  }
  #[cfg(not(windows))]
  {
    Box::new(unsupported::UnsupportedIdentity)
  }
}

/// Get the credential store for the current platform
pub fn get_credential_store() -> Box<dyn CredentialStore> {
  #[cfg(windows)]
  {
    Box::new(windows::WindowsCredentialStore)
  }
  #[cfg(not(windows))]
  {
    Box::new(unsupported::UnsupportedCredentialStore)
  }
}

/// Get the network drive table for the current platform
pub fn get_network_drives() -> Box<dyn NetworkDrives> {
  #[cfg(windows)]
  {
    Box::new(windows::WindowsNetworkDrives)
  }
  #[cfg(not(windows))]
  {
    Box::new(unsupported::UnsupportedNetworkDrives)
  }
}
