//! # Mapping Configuration
//!
//! Loads the `key=value` file naming the drive letter and the network share
//! to map.
//!
//! The format is deliberately loose: each line is split at its first `=`,
//! nothing is trimmed, unknown keys are ignored and the last occurrence of a
//! key wins. Lines without `=` are skipped.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::errors::ConfigError;

/// Default config file name, resolved relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config.txt";

/// Key holding the local drive letter (e.g. `Z:`)
pub const DRIVE_LETTER_KEY: &str = "drive_letter";

/// Key holding the remote share (e.g. `\\server\share`)
pub const NETWORK_PATH_KEY: &str = "network_path";

/// The drive letter and share to connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingConfig {
  pub drive_letter: String,
  pub network_path: String,
}

impl MappingConfig {
  /// Read and parse a config file
  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    debug!("Loading mapping config from {}", path.display());

    let bytes = fs::read(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    Self::parse(&decode(bytes))
  }

  /// Parse config file contents
  ///
  /// Fails when either key is absent or has an empty value after every line
  /// has been applied.
  pub fn parse(content: &str) -> Result<Self, ConfigError> {
    let mut drive_letter = String::new();
    let mut network_path = String::new();

    for line in content.lines() {
      let Some((key, value)) = line.split_once('=') else {
        continue;
      };

      match key {
        DRIVE_LETTER_KEY => drive_letter = value.to_string(),
        NETWORK_PATH_KEY => network_path = value.to_string(),
        _ => trace!("Ignoring unrecognized config key '{key}'"),
      }
    }

    if drive_letter.is_empty() {
      return Err(ConfigError::MissingField(DRIVE_LETTER_KEY));
    }
    if network_path.is_empty() {
      return Err(ConfigError::MissingField(NETWORK_PATH_KEY));
    }

    Ok(Self {
      drive_letter,
      network_path,
    })
  }
}

/// Decode file contents as UTF-8, or byte by byte as Latin-1 when they are
/// not valid UTF-8 (ANSI-encoded files written by older editors)
fn decode(bytes: Vec<u8>) -> String {
  match String::from_utf8(bytes) {
    Ok(text) => text,
    Err(e) => {
      debug!("Config is not valid UTF-8, widening bytes");
      e.into_bytes().into_iter().map(char::from).collect()
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;
  use test_case::test_case;

  use super::*;

  #[test_case("drive_letter=Z:\nnetwork_path=\\\\server\\share\n" ; "drive first")]
  #[test_case("network_path=\\\\server\\share\ndrive_letter=Z:\n" ; "path first")]
  #[test_case("drive_letter=Z:\r\nnetwork_path=\\\\server\\share\r\n" ; "crlf endings")]
  fn test_parse_well_formed(content: &str) {
    let config = MappingConfig::parse(content).unwrap();
    assert_eq!(config.drive_letter, "Z:");
    assert_eq!(config.network_path, r"\\server\share");
  }

  #[test_case("drive_letter=Z:" , "network_path" ; "missing path")]
  #[test_case("network_path=\\\\s\\p" , "drive_letter" ; "missing drive")]
  #[test_case("drive_letter=\nnetwork_path=\\\\s\\p" , "drive_letter" ; "empty drive")]
  #[test_case("drive_letter=Z:\nnetwork_path=" , "network_path" ; "empty path")]
  #[test_case("" , "drive_letter" ; "empty file")]
  #[test_case("drive_letter=Z:\nnetwork_path=\\\\s\\p\nnetwork_path=" , "network_path" ; "later empty value wins")]
  fn test_parse_rejects_missing_fields(content: &str, missing: &str) {
    match MappingConfig::parse(content) {
      Err(ConfigError::MissingField(key)) => assert_eq!(key, missing),
      other => panic!("expected missing {missing}, got {other:?}"),
    }
  }

  #[test]
  fn test_last_occurrence_wins() {
    let config = MappingConfig::parse("drive_letter=Z:\ndrive_letter=Y:\nnetwork_path=\\\\s\\p").unwrap();
    assert_eq!(config.drive_letter, "Y:");
    assert_eq!(config.network_path, r"\\s\p");
  }

  #[test]
  fn test_lines_without_separator_are_ignored() {
    let content = "# mapped drive\ndrive_letter=Z:\nnot a pair\n\nnetwork_path=\\\\s\\p\n";
    let config = MappingConfig::parse(content).unwrap();
    assert_eq!(config.drive_letter, "Z:");
    assert_eq!(config.network_path, r"\\s\p");
  }

  #[test]
  fn test_unknown_keys_are_ignored() {
    let content = "user=alice\ndrive_letter=Z:\nnetwork_path=\\\\s\\p\nDrive_Letter=Q:";
    let config = MappingConfig::parse(content).unwrap();
    assert_eq!(config.drive_letter, "Z:");
  }

  #[test]
  fn test_values_are_not_trimmed() {
    let config = MappingConfig::parse("drive_letter= Z: \nnetwork_path=\\\\s\\p=x").unwrap();
    assert_eq!(config.drive_letter, " Z: ");
    // Only the first '=' separates key from value
    assert_eq!(config.network_path, r"\\s\p=x");
  }

  #[test]
  fn test_key_with_surrounding_space_is_not_recognized() {
    let result = MappingConfig::parse("drive_letter =Z:\nnetwork_path=\\\\s\\p");
    assert!(matches!(result, Err(ConfigError::MissingField(DRIVE_LETTER_KEY))));
  }

  #[test]
  fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "drive_letter=Z:").unwrap();
    writeln!(file, r"network_path=\\server\share").unwrap();

    let config = MappingConfig::load(file.path()).unwrap();
    assert_eq!(
      config,
      MappingConfig {
        drive_letter: "Z:".to_string(),
        network_path: r"\\server\share".to_string(),
      }
    );
  }

  #[test]
  fn test_load_widens_non_utf8_bytes() {
    let mut file = NamedTempFile::new().unwrap();
    file
      .write_all(b"drive_letter=Z:\r\nnetwork_path=\\\\server\\M\xFCller\r\n")
      .unwrap();

    let config = MappingConfig::load(file.path()).unwrap();
    assert_eq!(config.drive_letter, "Z:");
    assert_eq!(config.network_path, "\\\\server\\M\u{FC}ller");
  }

  #[test]
  fn test_load_keeps_utf8_text() {
    let mut file = NamedTempFile::new().unwrap();
    file
      .write_all("drive_letter=Z:\nnetwork_path=\\\\server\\Müller\n".as_bytes())
      .unwrap();

    let config = MappingConfig::load(file.path()).unwrap();
    assert_eq!(config.network_path, r"\\server\Müller");
  }

  #[test]
  fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = MappingConfig::load(dir.path().join(DEFAULT_CONFIG_FILE));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
  }
}
