//! Alternate theme cache written by pywal.
//!
//! When pywal has generated a terminal theme, its `colors.json` cache
//! takes precedence over scheme lookups for the accent and terminal-text
//! roles. A missing cache is simply ignored.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Parsed pywal cache (`~/.cache/wal/colors.json`).
///
/// Only the `special.foreground` value and the sixteen indexed colors
/// are consumed; unknown fields are ignored and either block may be
/// absent entirely.
#[derive(Debug, Default, Deserialize)]
pub struct WalCache {
    #[serde(default)]
    special: Special,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct Special {
    foreground: Option<String>,
}

impl WalCache {
    /// Load the cache from its default location.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(WalCache))` when the cache exists and parses
    /// - `Ok(None)` when there is no cache file
    ///
    /// # Errors
    ///
    /// Returns an error if the cache file exists but cannot be read or
    /// is not valid JSON.
    pub fn load() -> Result<Option<Self>> {
        let Some(path) = cache_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read wal cache: {}", path.display()))?;
        let cache = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse wal cache: {}", path.display()))?;
        Ok(Some(cache))
    }

    /// Terminal foreground color, if the cache provides one.
    #[must_use]
    pub fn foreground(&self) -> Option<&str> {
        self.special.foreground.as_deref()
    }

    /// Indexed terminal color (`color0` through `color15`).
    #[must_use]
    pub fn color(&self, index: u8) -> Option<&str> {
        self.colors.get(&format!("color{index}")).map(String::as_str)
    }
}

fn cache_path() -> Option<PathBuf> {
    Some(dirs::cache_dir()?.join("wal").join("colors.json"))
}
