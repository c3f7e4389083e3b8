//! Palette extraction from a Vim colorscheme.
//!
//! The colorscheme defines its palette twice inside one conditional:
//!
//! ```vim
//! if &background ==# 'dark'
//!   let s:mono_1 = ['#abb2bf', '145']
//!   let s:hue_5  = ['#e06c75', '204']
//! else
//!   let s:mono_1 = ['#383a42', '237']
//!   let s:hue_5  = ['#e45649', '166']
//! endif
//! ```
//!
//! Variables defined in both branches pair a dark hex with a light hex. The
//! scan is line-indexed in three phases (start marker, `else`, `endif`); the
//! second value on each definition line (the cterm number) is ignored.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::error::ConvertError;
use crate::models::PaletteMap;

/// Line that opens the dark branch of the palette conditional.
pub const DARK_CONDITION_MARKER: &str = "if &background ==# 'dark'";

const ELSE_PATTERN: &str = r"^\s*else\s*$";
const ENDIF_PATTERN: &str = r"^\s*endif\s*$";
const COLOR_DEF_PATTERN: &str = r#"^\s*let\s+s:(?P<var>[A-Za-z0-9_]+)\s*=\s*\[\s*'(?P<hex>#[0-9A-Fa-f]{6})'\s*,\s*'[^']*'\s*\]\s*(?:"[^"]*)?\s*$"#;

/// Reads a palette file and extracts its dark-to-light mapping.
pub fn extract_palette_file(path: &Path) -> Result<PaletteMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read palette file: {}", path.display()))?;

    extract_palette(&content)
        .with_context(|| format!("Failed to extract palette from {}", path.display()))
}

/// Extracts the dark-to-light mapping from palette file text.
pub fn extract_palette(content: &str) -> Result<PaletteMap> {
    let lines: Vec<&str> = content.lines().collect();
    let (if_idx, else_idx, endif_idx) = find_palette_block(&lines)?;

    let color_def = Regex::new(COLOR_DEF_PATTERN).context("Invalid color definition pattern")?;
    let dark_vars = parse_branch(&lines[if_idx + 1..else_idx], &color_def);
    let light_vars = parse_branch(&lines[else_idx + 1..endif_idx], &color_def);

    let dark_names: BTreeSet<&str> = dark_vars.keys().map(String::as_str).collect();
    let light_names: BTreeSet<&str> = light_vars.keys().map(String::as_str).collect();
    let common: Vec<&str> = dark_names.intersection(&light_names).copied().collect();

    if common.is_empty() {
        return Err(ConvertError::NoCommonVariables {
            dark: dark_vars.len(),
            light: light_vars.len(),
        }
        .into());
    }

    let mut palette = PaletteMap::new();
    for name in common {
        let dark = &dark_vars[name];
        let light = &light_vars[name];
        if !palette.insert_first(dark, light) {
            debug!(variable = name, dark = %dark, "dark color already mapped, keeping first");
        }
    }

    debug!(
        colors = palette.len(),
        dark_vars = dark_vars.len(),
        light_vars = light_vars.len(),
        "extracted palette"
    );
    Ok(palette)
}

/// Locates the `if`/`else`/`endif` lines of the palette conditional.
///
/// Returns zero-based line indices.
fn find_palette_block(lines: &[&str]) -> Result<(usize, usize, usize)> {
    let else_re = Regex::new(ELSE_PATTERN).context("Invalid else pattern")?;
    let endif_re = Regex::new(ENDIF_PATTERN).context("Invalid endif pattern")?;

    let if_idx = lines
        .iter()
        .position(|line| line.contains(DARK_CONDITION_MARKER))
        .ok_or(ConvertError::MissingPaletteBlock {
            marker: DARK_CONDITION_MARKER,
        })?;

    let else_idx = find_after(lines, if_idx, &else_re)
        .ok_or(ConvertError::MissingElse { line: if_idx + 1 })?;

    let endif_idx = find_after(lines, else_idx, &endif_re)
        .ok_or(ConvertError::MissingEndif { line: else_idx + 1 })?;

    Ok((if_idx, else_idx, endif_idx))
}

/// Index of the first line after `start` matching `pattern`.
fn find_after(lines: &[&str], start: usize, pattern: &Regex) -> Option<usize> {
    lines[start + 1..]
        .iter()
        .position(|line| pattern.is_match(line))
        .map(|offset| start + 1 + offset)
}

/// Parses one branch into `name -> #rrggbb`. Non-definition lines are skipped.
fn parse_branch(lines: &[&str], color_def: &Regex) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    for line in lines {
        if let Some(caps) = color_def.captures(line) {
            vars.insert(caps["var"].to_string(), caps["hex"].to_lowercase());
        }
    }
    vars
}
