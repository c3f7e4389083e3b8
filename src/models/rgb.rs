//! RGB color handling with hex parsing and distance math.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use anyhow::Result;
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Parses from hex strings (`#RRGGBB`) and always renders as lowercase `#rrggbb`,
/// which is the normalized form used as palette keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb".
    /// Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use twolight::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#E06C75").unwrap();
    /// assert_eq!(color, RgbColor::new(0xe0, 0x6c, 0x75));
    ///
    /// let color = RgbColor::from_hex("  282c34 ").unwrap();
    /// assert_eq!(color, RgbColor::new(0x28, 0x2c, 0x34));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not exactly six hex digits after the optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        // All six bytes are ASCII hex digits, so slicing and radix parsing cannot fail.
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use twolight::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(202, 18, 67).to_hex(), "#ca1243");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Squared Euclidean distance to `other` in RGB space.
    ///
    /// The maximum is `3 * 255^2 = 195_075`, so `u32` never overflows.
    #[must_use]
    pub fn distance_squared(&self, other: &Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db).unsigned_abs()
    }

    /// Euclidean distance to `other` in RGB space (0.0..=441.67).
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        f64::from(self.distance_squared(other)).sqrt()
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
