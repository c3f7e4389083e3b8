//! Fatal conversion errors.
//!
//! Everything here aborts the run. Drift in the semantic patches and
//! malformed color values are not errors; they only show up in the counters.

use thiserror::Error;

/// Configuration and format errors raised while preparing a conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// The palette file has no `if &background ==# 'dark'` line.
    #[error("could not find `{marker}` block in palette file")]
    MissingPaletteBlock {
        /// The marker that was searched for
        marker: &'static str,
    },

    /// No bare `else` follows the dark-condition marker.
    #[error("could not find `else` for palette block (block starts on line {line})")]
    MissingElse {
        /// 1-based line of the dark-condition marker
        line: usize,
    },

    /// No bare `endif` follows the `else`.
    #[error("could not find closing `endif` for palette block (`else` on line {line})")]
    MissingEndif {
        /// 1-based line of the `else`
        line: usize,
    },

    /// The dark and light branches share no variable names.
    #[error("found no common palette variables between dark/light blocks ({dark} dark, {light} light)")]
    NoCommonVariables {
        /// Number of variables parsed from the dark branch
        dark: usize,
        /// Number of variables parsed from the light branch
        light: usize,
    },

    /// The theme plist root is not a dictionary.
    #[error("input theme plist is not a dictionary")]
    NotADictionary,

    /// The theme plist has no top-level `settings` array.
    #[error("theme plist missing top-level `settings` array")]
    MissingSettings,

    /// The nearest-match threshold is negative or not a number.
    #[error("nearest threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
}
