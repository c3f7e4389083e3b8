//! Exact and nearest-neighbor color matching against a palette.

use std::fmt;

use serde::Serialize;

use crate::models::{PaletteMap, RgbColor};

/// How a candidate color was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The color is a palette key.
    Exact,
    /// The closest palette key is within the threshold.
    Nearest,
    /// A valid color with no palette key close enough.
    Unchanged,
    /// Not a 6-digit hex color.
    Invalid,
}

impl MatchMode {
    /// Lowercase label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Nearest => "nearest",
            Self::Unchanged => "unchanged",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps one color value through the palette.
///
/// Returns the replacement value and how it was chosen:
/// - `Invalid`: `candidate` returned untouched
/// - `Exact`: the mapped light color
/// - `Nearest`: the light color of the closest dark key, when its RGB
///   distance is `<= threshold`; ties go to the lowest key in hex order
/// - `Unchanged`: the normalized (lowercase `#rrggbb`) candidate
///
/// The threshold is a plain Euclidean RGB distance, not a perceptual one.
///
/// # Examples
///
/// ```
/// use twolight::models::PaletteMap;
/// use twolight::services::matcher::{match_color, MatchMode};
///
/// let mut palette = PaletteMap::new();
/// palette.insert_first("#e06c75", "#ca1243");
///
/// assert_eq!(match_color("#E06C75", &palette, 0.0), ("#ca1243".to_string(), MatchMode::Exact));
/// assert_eq!(match_color("#e06c76", &palette, 1.0), ("#ca1243".to_string(), MatchMode::Nearest));
/// assert_eq!(match_color("#000000", &palette, 1.0), ("#000000".to_string(), MatchMode::Unchanged));
/// assert_eq!(match_color("red", &palette, 1.0), ("red".to_string(), MatchMode::Invalid));
/// ```
pub fn match_color(candidate: &str, palette: &PaletteMap, threshold: f64) -> (String, MatchMode) {
    let Ok(rgb) = RgbColor::from_hex(candidate) else {
        return (candidate.to_string(), MatchMode::Invalid);
    };
    let normalized = rgb.to_hex();

    if let Some(light) = palette.get(&normalized) {
        return (light.to_string(), MatchMode::Exact);
    }

    let mut best: Option<(u32, &RgbColor, &str)> = None;
    for (dark_rgb, dark_hex) in palette.dark_colors() {
        let d2 = rgb.distance_squared(dark_rgb);
        if !matches!(best, Some((best_d2, _, _)) if d2 >= best_d2) {
            best = Some((d2, dark_rgb, dark_hex));
        }
    }

    if let Some((_, dark_rgb, dark_hex)) = best {
        if rgb.distance(dark_rgb) <= threshold {
            if let Some(light) = palette.get(dark_hex) {
                return (light.to_string(), MatchMode::Nearest);
            }
        }
    }

    (normalized, MatchMode::Unchanged)
}
