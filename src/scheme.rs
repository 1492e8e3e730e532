//! Color scheme discovery and key-value lookup.
//!
//! This module provides functions for:
//! - Finding the active KDE color scheme and its `.colors` file
//! - Parsing scheme files into a section/key lookup store
//! - Reading the system accent color in its hex and triplet forms

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use regex::Regex;

use crate::color::RGB;
use crate::logs::debug;

/// Read access to a color scheme by section and key.
///
/// Palette construction only ever needs `(section, key)` lookups, so the
/// scheme behind it can be a parsed file, a different config grammar, or
/// a plain map in tests.
pub trait ColorSource {
    /// Look up the raw value stored under `section` / `key`.
    ///
    /// # Returns
    ///
    /// - `Some(String)` with the stored value
    /// - `None` if the section or key does not exist
    fn get(&self, section: &str, key: &str) -> Option<String>;
}

/// A color scheme file parsed into sections of key-value pairs.
///
/// Scheme files use the KDE config grammar: bracketed section headers
/// followed by `key=value` lines. Blank lines and `#`/`;` comments are
/// skipped; keys outside any section are dropped.
#[derive(Debug, Default)]
pub struct SchemeFile {
    sections: HashMap<String, HashMap<String, String>>,
}

impl SchemeFile {
    /// Parse scheme text into a lookup store.
    ///
    /// Section and key matching is exact: KDE writes both with fixed
    /// casing, so no folding is applied. Later duplicate keys overwrite
    /// earlier ones.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current: Option<String> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
                current = Some(name.trim().to_string());
                continue;
            }
            if let (Some(section), Some((key, value))) = (&current, line.split_once('=')) {
                sections
                    .entry(section.clone())
                    .or_default()
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { sections }
    }

    /// Load and parse a scheme file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read color scheme file: {}", path.display()))?;
        Ok(Self::parse(&text))
    }
}

impl ColorSource for SchemeFile {
    fn get(&self, section: &str, key: &str) -> Option<String> {
        self.sections.get(section)?.get(key).cloned()
    }
}

/// Determine the name of the active KDE color scheme.
///
/// Asks `kreadconfig6` first; when the command is unavailable or comes
/// back empty, falls back to reading `~/.config/kdeglobals` directly.
///
/// # Returns
///
/// - `Some(String)` with the scheme name
/// - `None` if neither source knows the active scheme
#[must_use]
pub fn active_scheme_name() -> Option<String> {
    if let Some(name) = read_kdeglobals_key("General", "ColorScheme") {
        return Some(name);
    }

    debug("kreadconfig6 gave no scheme name, reading kdeglobals directly");
    let path = dirs::config_dir()?.join("kdeglobals");
    let text = fs::read_to_string(path).ok()?;
    SchemeFile::parse(&text).get("General", "ColorScheme")
}

/// Locate the `.colors` file for a named scheme.
///
/// Schemes live in `~/.local/share/color-schemes/`.
///
/// # Returns
///
/// - `Some(PathBuf)` if the scheme file exists
/// - `None` if it does not
#[must_use]
pub fn scheme_file_path(name: &str) -> Option<PathBuf> {
    let path = dirs::data_dir()?
        .join("color-schemes")
        .join(format!("{name}.colors"));
    path.exists().then_some(path)
}

/// Read the system accent color from kdeglobals.
///
/// KDE stores the accent either as a decimal `r,g,b` triplet or as a
/// `#rrggbb` hex string; both forms are accepted and returned as hex.
///
/// # Returns
///
/// - `Some(String)` with the accent in hex form
/// - `None` if no accent is configured or the value is unrecognized
#[must_use]
pub fn system_accent_color() -> Option<String> {
    parse_accent_value(&read_kdeglobals_key("General", "AccentColor")?)
}

/// Parse an accent value in either `r,g,b` or `#rrggbb` form.
///
/// The whole string must match one of the two forms; components of the
/// triplet must fit in 0-255.
fn parse_accent_value(value: &str) -> Option<String> {
    let triplet = Regex::new(r"^\d{1,3},\s*\d{1,3},\s*\d{1,3}$").ok()?;
    if triplet.is_match(value) {
        let mut parts = value.split(',');
        let r = parts.next()?.trim().parse().ok()?;
        let g = parts.next()?.trim().parse().ok()?;
        let b = parts.next()?.trim().parse().ok()?;
        return Some(RGB::new(r, g, b).to_hex());
    }

    let hex = Regex::new(r"^#[0-9A-Fa-f]{6}$").ok()?;
    hex.is_match(value).then(|| value.to_string())
}

/// Query a single kdeglobals key through `kreadconfig6`.
///
/// Empty output and a failed or missing command both count as absent.
fn read_kdeglobals_key(group: &str, key: &str) -> Option<String> {
    let output = Command::new("kreadconfig6")
        .args(["--file", "kdeglobals", "--group", group, "--key", key])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8(output.stdout).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
