//! Palette roles derived from the active color scheme.
//!
//! The palette maps fixed semantic role names to optional colors. Roles
//! come from three places: the scheme file (via fixed section/key
//! lookups), the optional wal cache, and best-contrast selection for the
//! text roles that sit on top of a background role.

use anyhow::Result;

use crate::color::{normalize, select_best_contrast};
use crate::scheme::ColorSource;
use crate::wal::WalCache;

/// Accent color used when neither the user nor the system provides one.
const DEFAULT_ACCENT: &str = "#ff0000";

/// Semantic colors substituted into the prompt template.
///
/// Every role is optional: a failed scheme lookup leaves its role unset,
/// and unset roles are skipped during template substitution instead of
/// being written out with a made-up default.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Highlight color, from the user, the wal cache, or the system.
    pub accent: Option<String>,
    /// Text color with the best contrast against `accent`.
    pub accent_text: Option<String>,
    /// Background of the working-directory segment.
    pub dir_bg: Option<String>,
    /// Foreground of the working-directory segment.
    pub dir_fg: Option<String>,
    /// Text color with the best contrast against `dir_bg`.
    pub dir_text: Option<String>,
    /// Background of the git segment.
    pub git_bg: Option<String>,
    /// Foreground of the git segment.
    pub git_fg: Option<String>,
    /// Background of the remaining segments.
    pub other_bg: Option<String>,
    /// Foreground of the remaining segments.
    pub other_fg: Option<String>,
    /// Text color with the best contrast against `other_bg`.
    pub other_text: Option<String>,
    /// Normal window foreground of the scheme.
    pub text: Option<String>,
    /// Active selection foreground of the scheme.
    pub text2: Option<String>,
}

impl Palette {
    /// All roles with their names, in substitution order.
    ///
    /// Note that the git segment carries no derived text role; it only
    /// has its background and foreground.
    #[must_use]
    pub fn roles(&self) -> [(&'static str, Option<&str>); 12] {
        [
            ("accent", self.accent.as_deref()),
            ("accent_text", self.accent_text.as_deref()),
            ("dir_bg", self.dir_bg.as_deref()),
            ("dir_fg", self.dir_fg.as_deref()),
            ("dir_text", self.dir_text.as_deref()),
            ("git_bg", self.git_bg.as_deref()),
            ("git_fg", self.git_fg.as_deref()),
            ("other_bg", self.other_bg.as_deref()),
            ("other_fg", self.other_fg.as_deref()),
            ("other_text", self.other_text.as_deref()),
            ("text", self.text.as_deref()),
            ("text2", self.text2.as_deref()),
        ]
    }
}

/// Build the palette from the scheme and its optional overrides.
///
/// The accent resolves in priority order: explicit override, wal cache
/// `color1`, system accent, then a literal red default. The terminal
/// text color prefers the wal cache foreground and falls back to the
/// scheme's normal window foreground. Failed scheme lookups leave their
/// role unset, and a derived text role is unset whenever its base role
/// is; neither aborts construction.
///
/// # Arguments
///
/// * `scheme` - Scheme lookup store
/// * `accent_override` - Accent given explicitly by the user
/// * `system_accent` - Accent configured in the desktop environment
/// * `wal` - Optional pywal cache, consulted first when present
///
/// # Errors
///
/// Returns an error only when an already-normalized color fails to parse
/// in a luminance computation, which would indicate a normalizer bug.
pub fn build(
    scheme: &impl ColorSource,
    accent_override: Option<&str>,
    system_accent: Option<&str>,
    wal: Option<&WalCache>,
) -> Result<Palette> {
    let accent = accent_override
        .or_else(|| wal.and_then(|cache| cache.color(1)))
        .or(system_accent)
        .unwrap_or(DEFAULT_ACCENT);
    let accent = normalize(accent);

    let lookup = |section: &str, key: &str| scheme.get(section, key).and_then(|v| normalize(&v));

    let text = lookup("Colors:Window", "ForegroundNormal");
    let text2 = lookup("Colors:Selection", "ForegroundActive");
    let term_text = wal
        .and_then(WalCache::foreground)
        .and_then(normalize)
        .or_else(|| text.clone());

    let accent_text = contrast_text(
        accent.as_deref(),
        &[text.as_deref(), text2.as_deref(), term_text.as_deref()],
    )?;

    let dir_bg = lookup("Colors:View", "DecorationHover");
    let other_bg = lookup("Colors:View", "DecorationFocus");
    let git_bg = lookup("Colors:Window", "BackgroundAlternate");
    let dir_fg = lookup("Colors:Selection", "DecorationFocus");
    let other_fg = lookup("Colors:View", "DecorationHover");
    let git_fg = lookup("Colors:Window", "ForegroundInactive");

    let dir_text = contrast_text(
        dir_bg.as_deref(),
        &[
            dir_fg.as_deref(),
            text.as_deref(),
            text2.as_deref(),
            term_text.as_deref(),
        ],
    )?;
    let other_text = contrast_text(
        other_bg.as_deref(),
        &[
            other_fg.as_deref(),
            text.as_deref(),
            text2.as_deref(),
            term_text.as_deref(),
        ],
    )?;

    Ok(Palette {
        accent,
        accent_text,
        dir_bg,
        dir_fg,
        dir_text,
        git_bg,
        git_fg,
        other_bg,
        other_fg,
        other_text,
        text,
        text2,
    })
}

/// Best-contrast text color for a base role, absent when the base is.
fn contrast_text(base: Option<&str>, candidates: &[Option<&str>]) -> Result<Option<String>> {
    base.map(|base| select_best_contrast(base, candidates))
        .transpose()
}
