//! Parsing and serialization for the converter's input and output files.
//!
//! This module reads the Vim colorscheme that supplies the palette and
//! reads/writes tmTheme property lists.

pub mod theme_plist;
pub mod vim_palette;

// Re-export commonly used functions
pub use theme_plist::{load_theme, save_theme};
pub use vim_palette::{extract_palette, extract_palette_file};
