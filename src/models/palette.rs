//! Dark-to-light palette mapping.
//!
//! A `PaletteMap` is built once from the palette file and never changes.
//! Keys are kept in a `BTreeMap` so nearest-neighbor search walks them in
//! ascending hex order, which makes tie-breaking deterministic.

use std::collections::BTreeMap;

use super::RgbColor;

/// Mapping from normalized dark hex colors to normalized light hex colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteMap {
    /// `#rrggbb` (dark) -> `#rrggbb` (light)
    dark_to_light: BTreeMap<String, String>,
    /// Parsed dark keys in ascending hex order, for nearest-match search.
    dark_colors: Vec<(RgbColor, String)>,
}

impl PaletteMap {
    /// Creates an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `dark -> light`, keeping an existing mapping for `dark`.
    ///
    /// Both colors are normalized first. Returns `false` when either side is
    /// not a valid hex color or `dark` was already mapped.
    pub fn insert_first(&mut self, dark: &str, light: &str) -> bool {
        let (Ok(dark), Ok(light)) = (RgbColor::from_hex(dark), RgbColor::from_hex(light)) else {
            return false;
        };
        let key = dark.to_hex();
        if self.dark_to_light.contains_key(&key) {
            return false;
        }

        // Keep the search list sorted the same way as the map keys.
        let pos = self
            .dark_colors
            .binary_search_by(|(_, hex)| hex.as_str().cmp(key.as_str()))
            .unwrap_or_else(|pos| pos);
        self.dark_colors.insert(pos, (dark, key.clone()));
        self.dark_to_light.insert(key, light.to_hex());
        true
    }

    /// Returns the light color mapped from a normalized dark color.
    #[must_use]
    pub fn get(&self, dark: &str) -> Option<&str> {
        self.dark_to_light.get(dark).map(String::as_str)
    }

    /// Iterates dark keys in ascending hex order with their parsed value.
    pub fn dark_colors(&self) -> impl Iterator<Item = (&RgbColor, &str)> {
        self.dark_colors.iter().map(|(rgb, hex)| (rgb, hex.as_str()))
    }

    /// Iterates `(dark, light)` pairs in ascending dark-hex order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.dark_to_light
            .iter()
            .map(|(dark, light)| (dark.as_str(), light.as_str()))
    }

    /// Number of distinct dark colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dark_to_light.len()
    }

    /// Returns true if the palette has no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dark_to_light.is_empty()
    }
}
