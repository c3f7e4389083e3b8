//! Data models for colors, palettes, and theme documents.
//!
//! Models are independent of parsing and of the conversion passes.

pub mod palette;
pub mod rgb;
pub mod theme;

// Re-export all model types
pub use palette::PaletteMap;
pub use rgb::RgbColor;
pub use theme::ThemeDocument;
