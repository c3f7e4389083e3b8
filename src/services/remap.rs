//! Structural color remapping over a theme document.
//!
//! The walker visits the plist tree in document order: dictionary entries in
//! their stored order, array elements by ascending index. String values under
//! one of [`COLOR_KEYS`] are run through the color matcher and replaced in
//! place; every other value is recursed into. Nothing is added or removed.
//!
//! When event tracking is on, every `nearest` and `unchanged` decision is
//! recorded with its path. Events under a top-level rule carry that rule's
//! `name`/`scope` so the log can be read without the plist open.

use plist::{Dictionary, Value};
use serde::Serialize;

use crate::constants::{COLOR_KEYS, SETTINGS_KEY};
use crate::models::{PaletteMap, ThemeDocument};
use crate::services::matcher::{match_color, MatchMode};

/// Aggregate counters for one remapping pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemapStats {
    /// Colors found in the palette
    pub exact: usize,
    /// Colors replaced by the closest palette entry
    pub nearest: usize,
    /// Valid colors with no palette entry within the threshold
    pub unchanged: usize,
    /// Color fields that did not hold a hex color
    pub invalid: usize,
}

impl RemapStats {
    /// Counts one outcome.
    pub fn record(&mut self, mode: MatchMode) {
        match mode {
            MatchMode::Exact => self.exact += 1,
            MatchMode::Nearest => self.nearest += 1,
            MatchMode::Unchanged => self.unchanged += 1,
            MatchMode::Invalid => self.invalid += 1,
        }
    }

    /// Number of color fields visited.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.exact + self.nearest + self.unchanged + self.invalid
    }
}

/// One non-exact remapping decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemapEvent {
    /// Path of the dictionary holding the color, e.g. `settings[12].settings(name=Comment scope=comment)`
    pub path: String,
    /// Color key within that dictionary, e.g. `foreground`
    pub key: String,
    /// Value before remapping
    pub old: String,
    /// Value after remapping
    pub new: String,
    /// `nearest` or `unchanged`
    pub mode: MatchMode,
}

/// `name`/`scope` of the top-level rule enclosing the current node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleMeta {
    /// The rule's `name`, if string-typed
    pub name: Option<String>,
    /// The rule's `scope`, if string-typed
    pub scope: Option<String>,
}

impl RuleMeta {
    /// Captures `name`/`scope` from a rule dictionary.
    #[must_use]
    pub fn from_rule(rule: &Dictionary) -> Self {
        let field = |key: &str| rule.get(key).and_then(Value::as_string).map(str::to_string);
        Self {
            name: field("name"),
            scope: field("scope"),
        }
    }

    fn annotation(&self) -> Option<String> {
        let parts: Vec<String> = [("name", &self.name), ("scope", &self.scope)]
            .into_iter()
            .filter_map(|(label, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{label}={v}"))
            })
            .collect();

        (!parts.is_empty()).then(|| format!("({})", parts.join(" ")))
    }
}

/// Options for one remapping pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemapOptions {
    /// Maximum RGB distance for a nearest match
    pub nearest_threshold: f64,
    /// Record a [`RemapEvent`] for every nearest/unchanged decision
    pub track_events: bool,
}

/// Result of a remapping pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RemapReport {
    /// Aggregate counters
    pub stats: RemapStats,
    /// Non-exact decisions in document order (empty unless tracking)
    pub events: Vec<RemapEvent>,
}

/// Remaps every color field in the theme through `palette`.
pub fn remap_theme_colors(
    theme: &mut ThemeDocument,
    palette: &PaletteMap,
    options: RemapOptions,
) -> RemapReport {
    let mut walker = Walker {
        palette,
        options,
        report: RemapReport::default(),
    };
    walker.walk_dict(theme.root_mut(), "", None);
    walker.report
}

/// Returns true if `key` holds a color.
#[must_use]
pub fn is_color_key(key: &str) -> bool {
    COLOR_KEYS.contains(&key)
}

/// Inserts the rule annotation after a leading `settings[N].settings`.
///
/// Paths outside a rule's settings group are returned as-is.
#[must_use]
pub fn format_path_with_meta(path: &str, meta: Option<&RuleMeta>) -> String {
    let Some(annotation) = meta.and_then(RuleMeta::annotation) else {
        return path.to_string();
    };
    match split_rule_settings_prefix(path) {
        Some((prefix, rest)) => format!("{prefix}{annotation}{rest}"),
        None => path.to_string(),
    }
}

/// Splits `settings[<digits>].settings<rest>` into its prefix and `<rest>`.
fn split_rule_settings_prefix(path: &str) -> Option<(&str, &str)> {
    let after_open = path.strip_prefix("settings[")?;
    let digits = after_open.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = after_open[digits..].strip_prefix("].settings")?;
    Some(path.split_at(path.len() - rest.len()))
}

struct Walker<'a> {
    palette: &'a PaletteMap,
    options: RemapOptions,
    report: RemapReport,
}

impl Walker<'_> {
    fn walk_value(&mut self, node: &mut Value, path: &str, meta: Option<&RuleMeta>) {
        match node {
            Value::Dictionary(dict) => self.walk_dict(dict, path, meta),
            Value::Array(items) => self.walk_array(items, path, meta),
            _ => {}
        }
    }

    fn walk_dict(&mut self, dict: &mut Dictionary, path: &str, meta: Option<&RuleMeta>) {
        for (key, value) in dict.iter_mut() {
            match value {
                Value::String(color) if is_color_key(key) => {
                    self.remap_field(color, key, path, meta);
                }
                _ => {
                    let child_path = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{path}.{key}")
                    };
                    self.walk_value(value, &child_path, meta);
                }
            }
        }
    }

    fn walk_array(&mut self, items: &mut [Value], path: &str, meta: Option<&RuleMeta>) {
        let is_rule_list = path == SETTINGS_KEY;
        for (idx, item) in items.iter_mut().enumerate() {
            let child_path = format!("{path}[{idx}]");
            let rule_meta = match item {
                Value::Dictionary(rule) if is_rule_list => Some(RuleMeta::from_rule(rule)),
                _ => None,
            };
            self.walk_value(item, &child_path, rule_meta.as_ref().or(meta));
        }
    }

    fn remap_field(&mut self, color: &mut String, key: &str, path: &str, meta: Option<&RuleMeta>) {
        let (new_value, mode) = match_color(color, self.palette, self.options.nearest_threshold);
        self.report.stats.record(mode);

        if self.options.track_events && matches!(mode, MatchMode::Nearest | MatchMode::Unchanged) {
            self.report.events.push(RemapEvent {
                path: format_path_with_meta(path, meta),
                key: key.to_string(),
                old: color.clone(),
                new: new_value.clone(),
                mode,
            });
        }

        *color = new_value;
    }
}
