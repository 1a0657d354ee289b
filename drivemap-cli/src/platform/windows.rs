//! Windows implementation of the core ports
//!
//! Identity comes from `GetUserNameExW`/`GetUserNameW`, credentials go to
//! Credential Manager through `CredWriteW`, and drives are mapped with the
//! WNet connection functions.

use std::ptr;

use drivemap_core::{
  Credential, CredentialStore, CredentialStoreError, DisconnectOutcome, DriveMapError, DriveMapWarning,
  IdentityProvider, NetworkDrives, NetworkResource,
};
use tracing::debug;
use windows_sys::Win32::Foundation::{ERROR_NOT_CONNECTED, FILETIME, GetLastError, NO_ERROR};
use windows_sys::Win32::NetworkManagement::WNet::{
  CONNECT_UPDATE_PROFILE, NETRESOURCEW, RESOURCETYPE_DISK, WNetAddConnection2W, WNetCancelConnection2W,
};
use windows_sys::Win32::Security::Authentication::Identity::{GetUserNameExW, NameUserPrincipal};
use windows_sys::Win32::Security::Credentials::{CRED_PERSIST_ENTERPRISE, CRED_TYPE_GENERIC, CREDENTIALW, CredWriteW};
use windows_sys::Win32::System::WindowsProgramming::GetUserNameW;

mod helpers;

use helpers::{from_wide, to_credential_blob, to_wide, to_wide_secret};

/// Maximum user name length (`UNLEN` in Lmcons.h)
const UNLEN: usize = 256;

/// Session identity lookups
pub struct WindowsIdentity;

impl IdentityProvider for WindowsIdentity {
  fn principal_name(&self) -> Option<String> {
    let mut buffer = vec![0u16; UNLEN * 2 + 1];
    let mut len = buffer.len() as u32;

    // SAFETY: `buffer` is writable for `len` UTF-16 units and `len` points to
    // a live u32 for the duration of the call.
    let succeeded = unsafe { GetUserNameExW(NameUserPrincipal, buffer.as_mut_ptr(), &mut len) };
    // BOOLEAN result: zero on failure
    if succeeded == Default::default() {
      // SAFETY: Reads the calling thread's last-error value only.
      debug!("GetUserNameExW failed (Error: {})", unsafe { GetLastError() });
      return None;
    }

    Some(from_wide(&buffer))
  }

  fn account_name(&self) -> Option<String> {
    let mut buffer = vec![0u16; UNLEN + 1];
    let mut len = buffer.len() as u32;

    // SAFETY: `buffer` is writable for `len` UTF-16 units and `len` points to
    // a live u32 for the duration of the call.
    if unsafe { GetUserNameW(buffer.as_mut_ptr(), &mut len) } == 0 {
      // SAFETY: Reads the calling thread's last-error value only.
      debug!("GetUserNameW failed (Error: {})", unsafe { GetLastError() });
      return None;
    }

    Some(from_wide(&buffer))
  }
}

/// Windows Credential Manager writer for generic credentials
pub struct WindowsCredentialStore;

impl CredentialStore for WindowsCredentialStore {
  fn write(&self, credential: &Credential) -> Result<(), CredentialStoreError> {
    let mut target_name = to_wide(&credential.target_name);
    let mut username = to_wide(credential.username.as_str());
    let mut blob = to_credential_blob(credential.secret.expose());

    let cred = CREDENTIALW {
      Flags: 0,
      Type: CRED_TYPE_GENERIC,
      TargetName: target_name.as_mut_ptr(),
      Comment: ptr::null_mut(),
      LastWritten: FILETIME {
        dwLowDateTime: 0,
        dwHighDateTime: 0,
      },
      // Size in bytes
      CredentialBlobSize: blob.len() as u32,
      CredentialBlob: if blob.is_empty() {
        ptr::null_mut()
      } else {
        blob.as_mut_ptr()
      },
      Persist: CRED_PERSIST_ENTERPRISE,
      AttributeCount: 0,
      Attributes: ptr::null_mut(),
      TargetAlias: ptr::null_mut(),
      UserName: username.as_mut_ptr(),
    };

    // SAFETY: Every pointer in `cred` refers to a buffer owned by this frame
    // that outlives the call; CredWriteW copies the data it keeps.
    if unsafe { CredWriteW(&cred, 0) } == 0 {
      // SAFETY: Reads the calling thread's last-error value only.
      let code = unsafe { GetLastError() };
      return Err(CredentialStoreError::Write {
        target: credential.target_name.clone(),
        code,
      });
    }

    debug!("Stored generic credential for {}", credential.target_name);
    Ok(())
  }
}

/// Drive mappings through the WNet API
pub struct WindowsNetworkDrives;

impl NetworkDrives for WindowsNetworkDrives {
  fn disconnect(&self, local_name: &str) -> Result<DisconnectOutcome, DriveMapWarning> {
    let name = to_wide(local_name);

    // SAFETY: `name` is a null-terminated UTF-16 string that outlives the call.
    let result = unsafe { WNetCancelConnection2W(name.as_ptr(), 0, 1) };
    match result {
      NO_ERROR => Ok(DisconnectOutcome::Disconnected),
      ERROR_NOT_CONNECTED => Ok(DisconnectOutcome::NotConnected),
      code => Err(DriveMapWarning {
        drive: local_name.to_string(),
        code,
      }),
    }
  }

  fn connect(&self, resource: &NetworkResource, credential: &Credential) -> Result<(), DriveMapError> {
    let mut local_name = to_wide(&resource.local_name);
    let mut remote_name = to_wide(&resource.remote_name);
    let password = to_wide_secret(credential.secret.expose());
    let username = to_wide(credential.username.as_str());

    let net_resource = NETRESOURCEW {
      dwScope: 0,
      dwType: RESOURCETYPE_DISK,
      dwDisplayType: 0,
      dwUsage: 0,
      lpLocalName: local_name.as_mut_ptr(),
      lpRemoteName: remote_name.as_mut_ptr(),
      lpComment: ptr::null_mut(),
      lpProvider: ptr::null_mut(),
    };
    let flags = if resource.remember { CONNECT_UPDATE_PROFILE } else { 0 };

    // SAFETY: `net_resource` and the password/username buffers are
    // null-terminated UTF-16 owned by this frame and outlive the call.
    let result = unsafe { WNetAddConnection2W(&net_resource, password.as_ptr(), username.as_ptr(), flags) };
    if result != NO_ERROR {
      return Err(DriveMapError::Connect {
        drive: resource.local_name.clone(),
        path: resource.remote_name.clone(),
        code: result,
      });
    }

    debug!("WNetAddConnection2W connected {}", resource.local_name);
    Ok(())
  }
}
