//! # Output Formatting
//!
//! Status lines for the user. Success and info go to stdout, warnings and
//! errors to stderr.

use owo_colors::{OwoColorize, Stream, Style};
use {clap, emojis};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode as the process-wide color override
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      // Leave terminal detection to owo-colors
      ColorMode::Auto => {}
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Apply `style` when `stream` supports colors (or the override says so)
fn paint(text: &str, stream: Stream, style: Style) -> String {
  text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", paint(&check, Stream::Stdout, Style::new().green().bold()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", paint(&cross, Stream::Stderr, Style::new().red().bold()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  eprintln!("{} {}", paint(&warning, Stream::Stderr, Style::new().yellow().bold()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", paint(&info, Stream::Stdout, Style::new().blue().bold()), message);
}

/// Format a drive letter
pub fn format_drive(drive: &str) -> String {
  paint(drive, Stream::Stdout, Style::new().bright_cyan().bold())
}

/// Format a network share path
pub fn format_share(path: &str) -> String {
  paint(path, Stream::Stdout, Style::new().bright_green())
}

/// Format a user or account name
pub fn format_user(name: &str) -> String {
  paint(name, Stream::Stdout, Style::new().yellow())
}
