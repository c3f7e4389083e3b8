//! The convert command: TwoDark.tmTheme + one.vim -> TwoLight.tmTheme.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cli::common::{CliError, CliResult};
use crate::config::{validate_threshold, Config, ConvertConfig};
use crate::parser::{extract_palette_file, load_theme, save_theme};
use crate::services::patcher::SEMANTIC_PATCHES;
use crate::services::{
    apply_semantic_patches, remap_theme_colors, update_identity, RemapEvent, RemapOptions,
    RemapStats,
};

/// Convert a dark tmTheme to a light one using a Vim colorscheme palette
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Input TwoDark.tmTheme path
    #[arg(long = "in", value_name = "FILE")]
    pub input: PathBuf,

    /// Input one.vim path (palette source)
    #[arg(long, value_name = "FILE")]
    pub vim: PathBuf,

    /// Output TwoLight.tmTheme path
    #[arg(long = "out", value_name = "FILE")]
    pub output: PathBuf,

    /// Output theme name [default: TwoLight]
    #[arg(long)]
    pub name: Option<String>,

    /// Output semanticClass [default: theme.light.two_light]
    #[arg(long, value_name = "CLASS")]
    pub semantic_class: Option<String>,

    /// Nearest-match threshold in RGB distance [default: 50.0]
    #[arg(long, value_name = "DISTANCE")]
    pub nearest_threshold: Option<f64>,

    /// Log every nearest/unchanged color remap with its plist path + key + old -> new
    #[arg(long)]
    pub log_non_exact: bool,

    /// Config file with defaults for the options above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fully resolved conversion settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Dark theme to read
    pub input: PathBuf,
    /// Vim colorscheme with the palette conditional
    pub vim: PathBuf,
    /// Light theme to write
    pub output: PathBuf,
    /// `name`, `semanticClass`, threshold, and event logging
    pub settings: ConvertConfig,
}

/// Outcome of one conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertSummary {
    /// Semantic patches applied (0..=3)
    pub patch_edits: usize,
    /// Color remap counters
    pub colors: RemapStats,
    /// Nearest/unchanged decisions (only with `--log-non-exact`)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<RemapEvent>,
    /// Where the theme was written
    pub output: PathBuf,
    /// Fresh `uuid` of the written theme
    pub uuid: String,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let options = self.resolve()?;
        if !has_theme_extension(&options.input) {
            warn!(path = %options.input.display(), "input does not have a .tmTheme extension");
        }
        let log_non_exact = options.settings.log_non_exact;

        let summary = convert_theme(&options)
            .map_err(|e| CliError::from_anyhow("Conversion failed", &e))?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let written = if self.json {
            write_json_report(&mut out, &summary)
        } else {
            write_text_report(&mut out, &summary, log_non_exact)
        };

        match written.and_then(|()| out.flush()) {
            Ok(()) => Ok(()),
            // Consumer went away (e.g. piped to `head`): not an error.
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            Err(e) => Err(CliError::io(format!("Failed to write report: {e}"))),
        }
    }

    /// Merges flags over the config file over built-in defaults.
    pub fn resolve(&self) -> CliResult<ConvertOptions> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| CliError::config(format!("Failed to load config: {e:#}")))?;

        let settings = self.apply_overrides(config.convert);
        validate_threshold(settings.nearest_threshold)
            .map_err(|e| CliError::config(e.to_string()))?;

        Ok(ConvertOptions {
            input: self.input.clone(),
            vim: self.vim.clone(),
            output: self.output.clone(),
            settings,
        })
    }

    fn apply_overrides(&self, mut settings: ConvertConfig) -> ConvertConfig {
        if let Some(name) = &self.name {
            settings.name.clone_from(name);
        }
        if let Some(semantic_class) = &self.semantic_class {
            settings.semantic_class.clone_from(semantic_class);
        }
        if let Some(threshold) = self.nearest_threshold {
            settings.nearest_threshold = threshold;
        }
        settings.log_non_exact |= self.log_non_exact;
        settings
    }
}

/// Runs the full pipeline: palette, load, patch, remap, identity, write.
pub fn convert_theme(options: &ConvertOptions) -> Result<ConvertSummary> {
    let settings = &options.settings;

    let palette = extract_palette_file(&options.vim)?;
    info!(colors = palette.len(), path = %options.vim.display(), "loaded palette");

    let mut theme = load_theme(&options.input)?;

    let patch_edits = apply_semantic_patches(&mut theme)
        .with_context(|| format!("Failed to patch {}", options.input.display()))?;
    if patch_edits < SEMANTIC_PATCHES.len() {
        warn!(
            applied = patch_edits,
            expected = SEMANTIC_PATCHES.len(),
            "some semantic patches did not apply"
        );
    }

    let report = remap_theme_colors(
        &mut theme,
        &palette,
        RemapOptions {
            nearest_threshold: settings.nearest_threshold,
            track_events: settings.log_non_exact,
        },
    );
    debug!(stats = ?report.stats, "remapped colors");

    let uuid = update_identity(&mut theme, &settings.name, &settings.semantic_class);

    save_theme(&theme, &options.output)?;
    info!(path = %options.output.display(), "wrote theme");

    Ok(ConvertSummary {
        patch_edits,
        colors: report.stats,
        events: report.events,
        output: options.output.clone(),
        uuid: uuid.to_string(),
    })
}

/// Writes the plain-text summary.
pub fn write_text_report<W: Write>(
    out: &mut W,
    summary: &ConvertSummary,
    log_non_exact: bool,
) -> io::Result<()> {
    let colors = &summary.colors;
    writeln!(out, "patch_edits={}", summary.patch_edits)?;
    writeln!(
        out,
        "colors_exact={} colors_nearest={} colors_unchanged={} colors_invalid={}",
        colors.exact, colors.nearest, colors.unchanged, colors.invalid
    )?;

    if log_non_exact {
        writeln!(out, "--- non_exact_details (nearest/unchanged) ---")?;
        for event in &summary.events {
            writeln!(
                out,
                "{}\t{}\t{}\t{} -> {}",
                event.mode, event.path, event.key, event.old, event.new
            )?;
        }
    }

    Ok(())
}

/// Writes the summary as pretty-printed JSON.
pub fn write_json_report<W: Write>(out: &mut W, summary: &ConvertSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}

/// Returns true when `path` looks like a tmTheme file.
#[must_use]
pub fn has_theme_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tmTheme"))
}
