//! # Credential Management
//!
//! The credential handed to the OS credential store and used to authenticate
//! the drive mapping, plus the port through which it is persisted.

use std::fmt;

use zeroize::Zeroize;

use crate::errors::CredentialStoreError;
use crate::identity::Username;

/// Password that is wiped from memory on drop
///
/// Never reveals its contents through `Debug`.
#[derive(Clone, Default)]
pub struct Secret(String);

impl Secret {
  pub fn new(value: impl Into<String>) -> Self {
    Self(value.into())
  }

  /// Borrow the plaintext, only for handing to an OS call
  pub fn expose(&self) -> &str {
    &self.0
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl Drop for Secret {
  fn drop(&mut self) {
    self.0.zeroize();
  }
}

impl fmt::Debug for Secret {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Secret(*** {} bytes ***)", self.0.len())
  }
}

/// A generic credential addressed by an arbitrary target name
#[derive(Debug, Clone)]
pub struct Credential {
  pub target_name: String,
  pub username: Username,
  pub secret: Secret,
}

/// Port to the OS-managed credential store
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore {
  /// Persist `credential` under its target name, replacing any existing entry
  fn write(&self, credential: &Credential) -> Result<(), CredentialStoreError>;
}
