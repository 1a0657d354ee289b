use std::ffi::OsStr;
use std::iter::once;
use std::os::windows::ffi::OsStrExt;

use zeroize::Zeroizing;

/// Convert a Rust string into a null-terminated UTF-16 vector suitable for
/// Windows API calls.
pub(super) fn to_wide(value: &str) -> Vec<u16> {
  OsStr::new(value).encode_wide().chain(once(0)).collect()
}

/// Like [`to_wide`], for secrets. The buffer is wiped when dropped.
pub(super) fn to_wide_secret(value: &str) -> Zeroizing<Vec<u16>> {
  Zeroizing::new(to_wide(value))
}

/// Encode a secret as a little-endian UTF-16 credential blob without a
/// terminator.
pub(super) fn to_credential_blob(value: &str) -> Zeroizing<Vec<u8>> {
  Zeroizing::new(value.encode_utf16().flat_map(u16::to_le_bytes).collect())
}

/// Decode a UTF-16 buffer filled by a Windows API, stopping at the first
/// null.
pub(super) fn from_wide(buffer: &[u16]) -> String {
  let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
  String::from_utf16_lossy(&buffer[..len])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_to_wide_is_null_terminated() {
    assert_eq!(to_wide("Z:"), vec![u16::from(b'Z'), u16::from(b':'), 0]);
  }

  #[test]
  fn test_credential_blob_has_no_terminator() {
    assert_eq!(to_credential_blob("ab").as_slice(), &[b'a', 0, b'b', 0]);
    assert!(to_credential_blob("").is_empty());
  }

  #[test]
  fn test_from_wide_stops_at_null() {
    let mut buffer = to_wide("alice");
    buffer.extend([u16::from(b'x'); 4]);
    assert_eq!(from_wide(&buffer), "alice");
    assert_eq!(from_wide(&[u16::from(b'a')]), "a");
  }
}
