//! Application-wide constants.
//!
//! This module defines the application name, the defaults shared by the CLI
//! and the config file, and the fixed set of plist keys that carry colors.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "TwoLight";

/// Default `name` written into the generated theme.
pub const DEFAULT_THEME_NAME: &str = "TwoLight";

/// Default `semanticClass` written into the generated theme.
pub const DEFAULT_SEMANTIC_CLASS: &str = "theme.light.two_light";

/// Default nearest-match threshold, in RGB distance units (0..=441.67).
pub const DEFAULT_NEAREST_THRESHOLD: f64 = 50.0;

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TWOLIGHT_CONFIG_DIR";

/// Dictionary keys whose string values are treated as colors.
pub const COLOR_KEYS: [&str; 9] = [
    "foreground",
    "background",
    "caret",
    "invisibles",
    "lineHighlight",
    "selection",
    "selectionForeground",
    "selectionBackground",
    "divider",
];

/// Top-level key holding the theme's rule list.
pub const SETTINGS_KEY: &str = "settings";
