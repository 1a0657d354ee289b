//! # Prompts Module
//!
//! Hidden password entry on the controlling terminal, behind a port so the
//! workflow can run against a scripted reader.

use console::Style;
use dialoguer::Password;
use dialoguer::theme::ColorfulTheme;

use crate::creds::Secret;
use crate::errors::PromptError;

/// Returns the dialoguer theme used for drivemap prompts.
pub fn drivemap_theme() -> ColorfulTheme {
  ColorfulTheme {
    prompt_style: Style::new().cyan().bold(),
    ..ColorfulTheme::default()
  }
}

/// Port for collecting a secret without echoing it
#[cfg_attr(test, mockall::automock)]
pub trait SecretReader {
  /// Read one line with echo disabled. An empty line is a valid secret.
  fn read_secret(&self, prompt: &str) -> Result<Secret, PromptError>;
}

/// Reads the secret from the terminal with echo turned off
///
/// Echo is restored and the cursor moved to the next line once the user
/// presses enter.
#[derive(Debug, Default)]
pub struct TerminalSecretReader;

impl SecretReader for TerminalSecretReader {
  fn read_secret(&self, prompt: &str) -> Result<Secret, PromptError> {
    let value = Password::with_theme(&drivemap_theme())
      .with_prompt(prompt)
      .allow_empty_password(true)
      .interact()?;
    Ok(Secret::new(value))
  }
}
