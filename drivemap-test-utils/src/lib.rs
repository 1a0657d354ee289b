//! Test utilities shared across the drivemap workspace
//!
//! Provides temporary working directories holding mapping config files
//! ([`ConfigFileGuard`]).
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;

// Re-export commonly used items
pub use config::{CONFIG_FILE_NAME, ConfigFileGuard, mapping_config};
