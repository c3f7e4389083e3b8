//! Error and exit-code types shared by CLI commands.

use std::fmt;

use crate::error::ConvertError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Conversion finished
    Success = 0,
    /// A file could not be read, parsed, or written
    IoError = 2,
    /// Palette block, theme shape, or option values are unusable
    ConfigError = 3,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Category of a CLI failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// File system or parse failure
    Io,
    /// Unusable configuration
    Config,
}

/// A CLI failure with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// Message printed to stderr
    pub message: String,
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Config,
            message: message.into(),
        }
    }

    /// Classifies an error chain: any [`ConvertError`] in it is a
    /// configuration error, anything else is I/O.
    pub fn from_anyhow(context: &str, err: &anyhow::Error) -> Self {
        let message = format!("{context}: {err:#}");
        if err.chain().any(|cause| cause.downcast_ref::<ConvertError>().is_some()) {
            Self::config(message)
        } else {
            Self::io(message)
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Io => ExitCode::IoError,
            CliErrorKind::Config => ExitCode::ConfigError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}
