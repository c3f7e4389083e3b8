//! Shared test fixtures for conversion tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A trimmed-down `one.vim` with the palette conditional and surrounding noise.
pub const ONE_VIM: &str = r#"" Name:    one vim colorscheme
" Author:  Ramzi Akremi

highlight clear
if exists('syntax_on')
  syntax reset
endif

let g:colors_name = 'one'

if &background ==# 'dark'
  " Dark palette
  let s:mono_1 = ['#abb2bf', '145']
  let s:mono_3 = ['#5c6370', '59']
  let s:hue_2  = ['#61afef', '39']  " blue
  let s:hue_5  = ['#e06c75', '204'] " red 1
  let s:hue_6_2 = ['#e5c07b', '180']
  let s:syntax_bg = ['#282c34', '16']
  let s:syntax_accent = ['#528bff', '69']
  let s:special_grey = ['#3b4048', '238']
  let s:visual_grey = ['#3e4452', '59']
else
  " Light palette
  let s:mono_1 = ['#383a42', '237']
  let s:mono_3 = ['#a0a1a7', '145']
  let s:hue_2  = ['#4078f2', '33']
  let s:hue_5  = ['#e45649', '166']
  let s:hue_6_2 = ['#c18401', '136']
  let s:syntax_bg = ['#fafafa', '255']
  let s:syntax_accent = ['#526fff', '63']
  let s:special_grey = ['#d3d3d3', '251']
  let s:visual_grey = ['#d0d0d0', '251']
endif

let s:syntax_fg = s:mono_1
"#;

/// A TwoDark-shaped theme covering exact, nearest, unchanged, and invalid colors
/// plus the three semantic patch targets.
pub const TWO_DARK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>name</key>
	<string>TwoDark</string>
	<key>settings</key>
	<array>
		<dict>
			<key>settings</key>
			<dict>
				<key>background</key>
				<string>#282c34</string>
				<key>foreground</key>
				<string>#abb2bf</string>
				<key>caret</key>
				<string>#528bff</string>
				<key>invisibles</key>
				<string>#3b4048</string>
				<key>lineHighlight</key>
				<string>#383E4A</string>
				<key>selection</key>
				<string>#3e4451</string>
			</dict>
		</dict>
		<dict>
			<key>name</key>
			<string>Comment</string>
			<key>scope</key>
			<string>comment</string>
			<key>settings</key>
			<dict>
				<key>foreground</key>
				<string>#5c6370</string>
				<key>fontStyle</key>
				<string>italic</string>
			</dict>
		</dict>
		<dict>
			<key>name</key>
			<string>Classes</string>
			<key>scope</key>
			<string>support.class, entity.name.class, entity.name.type.class</string>
			<key>settings</key>
			<dict>
				<key>foreground</key>
				<string>#e5c07b</string>
			</dict>
		</dict>
		<dict>
			<key>name</key>
			<string>Headings</string>
			<key>scope</key>
			<string>markup.heading punctuation.definition.heading, entity.name.section</string>
			<key>settings</key>
			<dict>
				<key>foreground</key>
				<string>#61afef</string>
				<key>fontStyle</key>
				<string>bold</string>
			</dict>
		</dict>
		<dict>
			<key>name</key>
			<string>Json key</string>
			<key>scope</key>
			<string>source.json meta.structure.dictionary.json string.quoted.double.json</string>
			<key>settings</key>
			<dict>
				<key>foreground</key>
				<string>#e06c75</string>
			</dict>
		</dict>
		<dict>
			<key>name</key>
			<string>Bright</string>
			<key>scope</key>
			<string>markup.bold</string>
			<key>settings</key>
			<dict>
				<key>foreground</key>
				<string>#ffff00</string>
			</dict>
		</dict>
		<dict>
			<key>name</key>
			<string>Inherit</string>
			<key>scope</key>
			<string>meta.inherit</string>
			<key>settings</key>
			<dict>
				<key>background</key>
				<string>none</string>
			</dict>
		</dict>
	</array>
	<key>uuid</key>
	<string>4E0F6A49-3E5C-4A3E-9C2B-5F2F2B4E5A11</string>
	<key>colorSpaceName</key>
	<string>sRGB</string>
	<key>semanticClass</key>
	<string>theme.dark.two_dark</string>
</dict>
</plist>
"#;

/// Input and output paths inside a temp directory.
pub struct Workspace {
    /// Keeps the directory alive for the duration of the test
    pub dir: TempDir,
    /// Dark theme path
    pub input: PathBuf,
    /// Palette file path
    pub vim: PathBuf,
    /// Output theme path (not created)
    pub output: PathBuf,
}

impl Workspace {
    /// Writes the default fixtures.
    pub fn new() -> Self {
        Self::with(TWO_DARK, ONE_VIM)
    }

    /// Writes the given theme and palette text.
    pub fn with(theme: &str, vim: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let input = dir.path().join("TwoDark.tmTheme");
        let vim_path = dir.path().join("one.vim");
        fs::write(&input, theme).expect("Failed to write theme fixture");
        fs::write(&vim_path, vim).expect("Failed to write palette fixture");
        let output = dir.path().join("TwoLight.tmTheme");
        Self {
            dir,
            input,
            vim: vim_path,
            output,
        }
    }

    /// A config directory inside the workspace, so user config never leaks in.
    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Runs the binary with `--in/--vim/--out` plus `extra` args.
    pub fn run(&self, extra: &[&str]) -> Output {
        let mut cmd = Command::new(twolight_bin());
        cmd.env("TWOLIGHT_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .arg("--in")
            .arg(&self.input)
            .arg("--vim")
            .arg(&self.vim)
            .arg("--out")
            .arg(&self.output)
            .args(extra);
        cmd.output().expect("Failed to execute command")
    }

    /// Loads the written output theme.
    pub fn output_plist(&self) -> plist::Value {
        plist::Value::from_file(&self.output).expect("Output should be a valid plist")
    }
}

/// Path to the twolight binary
pub fn twolight_bin() -> &'static str {
    env!("CARGO_BIN_EXE_twolight")
}

/// Builds a minimal theme with the given rules (raw `<dict>` XML fragments).
pub fn theme_with_rules(rules: &[&str]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
	<key>name</key>
	<string>Fixture</string>
	<key>settings</key>
	<array>
{}
	</array>
</dict>
</plist>
"#,
        rules.join("\n")
    )
}

/// Follows a dotted/indexed path like `settings[0].settings.background`.
pub fn lookup<'a>(value: &'a plist::Value, path: &str) -> Option<&'a plist::Value> {
    let mut current = value;
    for segment in path.split('.') {
        let (key, indices) = match segment.find('[') {
            Some(pos) => (&segment[..pos], &segment[pos..]),
            None => (segment, ""),
        };
        if !key.is_empty() {
            current = current.as_dictionary()?.get(key)?;
        }
        for index in indices
            .split(']')
            .filter_map(|part| part.strip_prefix('['))
        {
            let index: usize = index.parse().ok()?;
            current = current.as_array()?.get(index)?;
        }
    }
    Some(current)
}

/// String at `path`, if present.
pub fn lookup_str<'a>(value: &'a plist::Value, path: &str) -> Option<&'a str> {
    lookup(value, path).and_then(plist::Value::as_string)
}

/// Reads a file as UTF-8.
pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}
