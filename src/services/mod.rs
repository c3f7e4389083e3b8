//! The conversion passes.
//!
//! Each pass mutates a [`ThemeDocument`](crate::models::ThemeDocument) in
//! place: semantic scope patches, color remapping, and identity update.
//! Color matching is exposed on its own for callers that only need lookups.

pub mod identity;
pub mod matcher;
pub mod patcher;
pub mod remap;

// Re-export commonly used types and functions
pub use identity::update_identity;
pub use matcher::{match_color, MatchMode};
pub use patcher::apply_semantic_patches;
pub use remap::{remap_theme_colors, RemapEvent, RemapOptions, RemapReport, RemapStats};
