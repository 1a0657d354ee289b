//! # drivemap CLI Library
//!
//! Argument parsing and the OS adapters behind the core ports.

pub mod cli;
pub mod platform;
