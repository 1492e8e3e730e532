//! Starship prompt palette generation from the active KDE color scheme.
//!
//! The library reads the desktop's color scheme and accent color,
//! derives a small palette of accessible foreground/background pairs
//! using WCAG contrast ratios, and substitutes those colors into the
//! `[palette.colors]` section of a prompt configuration template.

pub mod color;
pub mod logs;
pub mod output;
pub mod palette;
pub mod restart;
pub mod scheme;
pub mod template;
pub mod wal;

use anyhow::Result;

use scheme::ColorSource;
use wal::WalCache;

/// Render a prompt configuration from a template and the active scheme.
///
/// This function orchestrates the core transformation:
/// 1. Resolve the accent and scheme lookups into a palette
/// 2. Substitute the palette roles into the template's color section
///
/// Scheme discovery, file handling, and terminal restarts stay with the
/// caller; the core only turns text into text.
///
/// # Arguments
///
/// * `scheme` - Scheme lookup store
/// * `template` - Template text to rewrite
/// * `accent_override` - Accent given explicitly by the user
/// * `system_accent` - Accent configured in the desktop environment
/// * `wal` - Optional pywal cache, consulted first when present
///
/// # Returns
///
/// The rendered configuration text
///
/// # Errors
///
/// Returns an error if palette construction hits a malformed color in a
/// numeric context.
pub fn render(
    scheme: &impl ColorSource,
    template: &str,
    accent_override: Option<&str>,
    system_accent: Option<&str>,
    wal: Option<&WalCache>,
) -> Result<String> {
    let colors = palette::build(scheme, accent_override, system_accent, wal)?;
    logs::debug(&format!("palette={colors:?}"));

    Ok(template::substitute(template, &colors))
}
