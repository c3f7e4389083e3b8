//! CLI command handlers for TwoLight.
//!
//! This module provides the scriptable conversion entry point plus the
//! error and exit-code types the binary maps failures onto.

pub mod common;
pub mod convert;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use convert::{convert_theme, ConvertArgs, ConvertOptions, ConvertSummary};
