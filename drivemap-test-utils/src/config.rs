//! Mapping config files for testing
//!
//! Each guard owns a temporary working directory holding a config file, so
//! tests can run the binary from there without touching the real working
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Config file name the binary looks for by default
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// A temporary working directory containing a mapping config file
pub struct ConfigFileGuard {
  /// The temporary directory, removed on drop
  pub temp_dir: TempDir,
  /// Path of the config file inside `temp_dir`
  pub config_path: PathBuf,
}

impl ConfigFileGuard {
  /// Create a working directory with `config.txt` holding `content`
  pub fn new(content: &str) -> anyhow::Result<Self> {
    Self::with_name(CONFIG_FILE_NAME, content)
  }

  /// Create a working directory with a config file of a custom name
  pub fn with_name(file_name: &str, content: &str) -> anyhow::Result<Self> {
    let temp_dir = TempDir::new().map_err(|e| anyhow::anyhow!("Failed to create temporary directory: {e}"))?;
    let config_path = temp_dir.path().join(file_name);

    fs::write(&config_path, content).map_err(|e| anyhow::anyhow!("Failed to write config file: {e}"))?;

    Ok(Self { temp_dir, config_path })
  }

  /// Create a working directory holding a valid two-line config
  pub fn valid(drive_letter: &str, network_path: &str) -> anyhow::Result<Self> {
    Self::new(&mapping_config(drive_letter, network_path))
  }

  /// Create an empty working directory with no config file in it
  pub fn empty() -> anyhow::Result<Self> {
    let temp_dir = TempDir::new().map_err(|e| anyhow::anyhow!("Failed to create temporary directory: {e}"))?;
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    Ok(Self { temp_dir, config_path })
  }

  /// The working directory to run the binary from
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }
}

/// Render a config file for the given drive letter and share
pub fn mapping_config(drive_letter: &str, network_path: &str) -> String {
  format!("drive_letter={drive_letter}\nnetwork_path={network_path}\n")
}
