//! TwoLight Library
//!
//! Derives a light TextMate theme from a dark one: extracts a dark-to-light
//! palette from a Vim colorscheme, applies a few semantic scope patches, and
//! remaps every color field in the theme plist through the palette.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
