//! Reading and writing tmTheme property lists.
//!
//! Input may be an XML or binary plist. Output is always XML, with dictionary
//! keys written in the order they were read.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ThemeDocument;

/// Loads a theme plist and checks its shape.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or unreadable
/// - Malformed property list
/// - Root that is not a dictionary, or no top-level `settings` array
pub fn load_theme(path: &Path) -> Result<ThemeDocument> {
    if !path.is_file() {
        anyhow::bail!("Theme file not found: {}", path.display());
    }

    let value = plist::Value::from_file(path)
        .with_context(|| format!("Failed to parse theme plist: {}", path.display()))?;

    ThemeDocument::from_value(value)
        .with_context(|| format!("Unexpected theme structure in {}", path.display()))
}

/// Serializes a theme to XML plist bytes.
pub fn theme_to_xml(theme: &ThemeDocument) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    plist::Value::Dictionary(theme.root().clone())
        .to_writer_xml(&mut buf)
        .context("Failed to serialize theme plist")?;
    Ok(buf)
}

/// Writes a theme as an XML plist, creating parent directories as needed.
///
/// This performs an atomic write using a temp file + rename pattern so an
/// existing output file is never left half-written.
pub fn save_theme(theme: &ThemeDocument, path: &Path) -> Result<()> {
    let xml = theme_to_xml(theme)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    atomic_write(path, &xml)
}

fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_name = path
        .file_name()
        .context("Output path has no file name")?
        .to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temp file: {}", temp_path.display()))?;

    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
