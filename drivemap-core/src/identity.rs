//! # Identity Resolution
//!
//! Determines which account the credential and drive mapping are created
//! for. The fully-qualified user principal name (`user@domain`) is preferred,
//! with the plain logon name of the session as a fallback.

use std::fmt;

use tracing::debug;

use crate::errors::IdentityError;
use crate::output::print_warning;

/// A non-empty account name, either a UPN or a plain logon name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
  pub fn new(username: impl Into<String>) -> Result<Self, IdentityError> {
    let username = username.into();
    if username.is_empty() {
      return Err(IdentityError::Empty);
    }
    Ok(Self(username))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for Username {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Port to the OS identity lookups for the current session
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider {
  /// The user principal name, if the session has one
  fn principal_name(&self) -> Option<String>;

  /// The simple logon account name
  fn account_name(&self) -> Option<String>;
}

/// Resolve the current user, preferring the UPN over the account name
pub fn resolve_identity(provider: &dyn IdentityProvider) -> Result<Username, IdentityError> {
  if let Some(upn) = provider.principal_name().filter(|name| !name.is_empty()) {
    debug!("Resolved user principal name");
    return Username::new(upn);
  }

  print_warning("Unable to retrieve the current user's UPN. Using a standard username instead.");

  match provider.account_name().filter(|name| !name.is_empty()) {
    Some(name) => {
      debug!("Resolved fallback account name");
      Username::new(name)
    }
    None => Err(IdentityError::Unavailable),
  }
}
