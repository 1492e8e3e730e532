//! Template and output file handling.
//!
//! This module provides functions for:
//! - Expanding a leading `~` in user-supplied paths
//! - Reading the template file
//! - Writing the generated configuration with a backup of the old one

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, and any path when the home directory
/// cannot be determined, are returned untouched.
///
/// # Arguments
///
/// * `path` - User-supplied path, possibly `~`-prefixed
///
/// # Returns
///
/// The expanded path
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        if path == "~" {
            return home;
        }
        if let Some(rest) = path.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// Read the template file.
///
/// # Arguments
///
/// * `path` - Path to the template
///
/// # Returns
///
/// The template text
///
/// # Errors
///
/// Returns an error if the template does not exist or cannot be read; a
/// missing template aborts the run before anything is written.
pub fn read_template(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(anyhow!("Template file not found: {}", path.display()));
    }
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {}", path.display()))
}

/// Write the generated configuration, backing up any previous one.
///
/// The output directory is created when missing, and an existing output
/// file is copied to `<path>.bak` before being overwritten.
///
/// # Arguments
///
/// * `path` - Destination path
/// * `contents` - Text to write
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the backup copy
/// fails, or the file cannot be written.
pub fn write_with_backup(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    if path.exists() {
        let mut backup = path.as_os_str().to_os_string();
        backup.push(".bak");
        let backup = PathBuf::from(backup);
        fs::copy(path, &backup)
            .with_context(|| format!("Failed to back up previous output: {}", backup.display()))?;
    }

    fs::write(path, contents)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        // Plain paths pass through untouched
        assert_eq!(expand_tilde("/tmp/x"), PathBuf::from("/tmp/x"));
        assert_eq!(expand_tilde("relative/x"), PathBuf::from("relative/x"));
        // A tilde in the middle is not expansion syntax
        assert_eq!(expand_tilde("/tmp/~/x"), PathBuf::from("/tmp/~/x"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/x/y"), home.join("x/y"));
        }
    }

    #[test]
    fn test_read_template() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("starship.toml");
        fs::write(&path, "[palette.colors]\n")?;

        assert_eq!(read_template(&path)?, "[palette.colors]\n");

        let err = read_template(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Template file not found"));
        Ok(())
    }

    #[test]
    fn test_write_creates_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested/deeper/starship.toml");
        write_with_backup(&path, "fresh")?;
        assert_eq!(fs::read_to_string(&path)?, "fresh");
        Ok(())
    }

    #[test]
    fn test_write_backs_up_previous_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("starship.toml");

        // First write has nothing to back up
        write_with_backup(&path, "first")?;
        assert!(!dir.path().join("starship.toml.bak").exists());

        write_with_backup(&path, "second")?;
        assert_eq!(fs::read_to_string(&path)?, "second");
        assert_eq!(
            fs::read_to_string(dir.path().join("starship.toml.bak"))?,
            "first"
        );
        Ok(())
    }
}
