//! Color parsing, luminance, and contrast utilities.
//!
//! This module provides functions for:
//! - Normalizing heterogeneous color strings to canonical `#rrggbb` form
//! - Converting between hex strings and RGB components
//! - Calculating relative luminance for accessibility
//! - Selecting the best-contrast color from a set of candidates

use anyhow::{Context, Result, anyhow};
use regex::Regex;

/// Canonical pure black, used as a contrast fallback.
pub const BLACK: &str = "#000000";

/// Canonical pure white, used as a contrast fallback.
pub const WHITE: &str = "#ffffff";

/// RGB color representation with red, green, and blue components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGB {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGB {
    /// Create a new RGB color from individual components.
    ///
    /// # Arguments
    ///
    /// * `r` - Red component (0-255)
    /// * `g` - Green component (0-255)
    /// * `b` - Blue component (0-255)
    ///
    /// # Returns
    ///
    /// A new RGB struct with the specified components.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format the color as a canonical lowercase `#rrggbb` string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kolorship::color::RGB;
    /// assert_eq!(RGB::new(255, 128, 0).to_hex(), "#ff8000");
    /// ```
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Normalize a color string to canonical `#rrggbb` form.
///
/// Accepts a string optionally prefixed with `#` and extracts a run of
/// exactly 6 hexadecimal digits anchored at the start of the (trimmed)
/// input. Trailing garbage after the 6 digits is ignored.
///
/// This is the loose entry point for colors of unknown provenance: it
/// never errors, it only declines. Colors that must already be valid go
/// through [`parse_hex`] instead, which reports malformed input.
///
/// # Arguments
///
/// * `input` - The color string to normalize
///
/// # Returns
///
/// - `Some(String)` with the lowercase `#rrggbb` form
/// - `None` if the input does not start with 6 hex digits
///
/// # Examples
///
/// ```
/// # use kolorship::color::normalize;
/// assert_eq!(normalize("#ABCDEF").as_deref(), Some("#abcdef"));
/// assert_eq!(normalize("abcdef").as_deref(), Some("#abcdef"));
/// assert_eq!(normalize("zz0000"), None);
/// ```
#[must_use]
pub fn normalize(input: &str) -> Option<String> {
    let s = input.trim();
    let re = Regex::new(r"^#?([0-9A-Fa-f]{6})").ok()?;
    let caps = re.captures(s)?;
    Some(format!("#{}", caps[1].to_lowercase()))
}

/// Parse a strict `#rrggbb` (or `rrggbb`) hex color into RGB components.
///
/// Unlike [`normalize`], the entire remaining string after stripping one
/// leading `#` must be exactly 6 hexadecimal digits. This variant is used
/// in numeric contexts (luminance calculation) where a silent fallback
/// would hide a real bug.
///
/// # Arguments
///
/// * `color` - The hex color string to parse
///
/// # Returns
///
/// - `Ok(RGB)` with each component in range 0-255
/// - `Err` if the string is not exactly 6 hex digits
///
/// # Errors
///
/// This function returns an error in the following cases:
/// - The string (after the optional `#`) is not exactly 6 characters long
/// - A component is not valid hexadecimal
pub fn parse_hex(color: &str) -> Result<RGB> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(anyhow!("Invalid hex color value: {color}"));
    }

    let r = u8::from_str_radix(&digits[0..2], 16)
        .with_context(|| format!("Failed to parse red hex component: {}", &digits[0..2]))?;
    let g = u8::from_str_radix(&digits[2..4], 16)
        .with_context(|| format!("Failed to parse green hex component: {}", &digits[2..4]))?;
    let b = u8::from_str_radix(&digits[4..6], 16)
        .with_context(|| format!("Failed to parse blue hex component: {}", &digits[4..6]))?;
    Ok(RGB::new(r, g, b))
}

/// Convert a single sRGB channel value to its linear-light equivalent.
///
/// This is the standard sRGB transfer function: the channel is scaled to
/// 0.0-1.0, then small values are divided by 12.92 and larger values go
/// through the 2.4-exponent curve.
///
/// # Arguments
///
/// * `channel` - sRGB channel value (0-255)
///
/// # Returns
///
/// Linear-light channel value between 0.0 and 1.0
#[must_use]
pub fn srgb_channel_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance of an RGB color using the sRGB formula.
///
/// This implements the standard relative luminance calculation as defined
/// by the W3C Web Content Accessibility Guidelines (WCAG). The formula
/// accounts for the non-linear nature of human vision by first converting
/// sRGB values to linear RGB, then applying luminance coefficients.
///
/// # Arguments
///
/// * `rgb` - RGB struct with values 0-255
///
/// # Returns
///
/// Relative luminance value between 0.0 (black) and 1.0 (white)
///
/// # Formula
///
/// L = 0.2126 × R + 0.7152 × G + 0.0722 × B
///
/// Where R, G, B are the linearized RGB values.
#[must_use]
pub fn luminance(rgb: RGB) -> f64 {
    0.2126 * srgb_channel_to_linear(rgb.r)
        + 0.7152 * srgb_channel_to_linear(rgb.g)
        + 0.0722 * srgb_channel_to_linear(rgb.b)
}

/// Calculate the WCAG contrast ratio between two relative luminances.
///
/// The ratio is always at least 1.0 and is symmetric in its arguments:
/// the lighter luminance always ends up in the numerator.
///
/// # Arguments
///
/// * `lum1` - Relative luminance of the first color
/// * `lum2` - Relative luminance of the second color
///
/// # Returns
///
/// Contrast ratio between 1.0 (identical) and 21.0 (black on white)
#[must_use]
pub fn contrast_ratio(lum1: f64, lum2: f64) -> f64 {
    let lighter = lum1.max(lum2);
    let darker = lum1.min(lum2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Select the candidate color with the highest contrast against a base.
///
/// Absent candidates are skipped. Ties are broken in favor of the first
/// candidate encountered, so input order is significant. If no usable
/// candidate remains, the function falls back to pure black or pure
/// white, whichever contrasts at least as much against the base (ties go
/// to black), so it always produces a well-defined color.
///
/// # Arguments
///
/// * `base` - Hex color the result must contrast against
/// * `candidates` - Candidate hex colors, possibly absent
///
/// # Returns
///
/// The winning candidate, or `#000000`/`#ffffff` when none qualify
///
/// # Errors
///
/// Returns an error if the base or any present candidate is not a valid
/// hex color. Callers are expected to run colors through [`normalize`]
/// first; a malformed color reaching this point is a logic error.
pub fn select_best_contrast(base: &str, candidates: &[Option<&str>]) -> Result<String> {
    let base_lum = luminance(parse_hex(base)?);

    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates.iter().copied().flatten() {
        let lum = luminance(parse_hex(candidate)?);
        let ratio = contrast_ratio(base_lum, lum);
        if best.is_none_or(|(_, best_ratio)| ratio > best_ratio) {
            best = Some((candidate, ratio));
        }
    }

    if let Some((color, _)) = best {
        return Ok(color.to_string());
    }

    // No valid candidates, choose between black and white
    let black_ratio = contrast_ratio(base_lum, luminance(RGB::new(0, 0, 0)));
    let white_ratio = contrast_ratio(base_lum, luminance(RGB::new(255, 255, 255)));
    if black_ratio >= white_ratio {
        Ok(BLACK.to_string())
    } else {
        Ok(WHITE.to_string())
    }
}

/// Find the darkest and brightest colors in a list by relative luminance.
///
/// Each entry is run through [`normalize`] first; absent and invalid
/// entries are dropped. The first occurrence wins when two entries share
/// a luminance. An empty or entirely invalid list yields the fixed pair
/// (`#000000`, `#ffffff`).
///
/// # Arguments
///
/// * `colors` - Candidate colors, possibly absent
///
/// # Returns
///
/// A `(darkest, brightest)` pair of canonical hex colors
#[must_use]
pub fn darkest_and_brightest(colors: &[Option<&str>]) -> (String, String) {
    let mut darkest: Option<(String, f64)> = None;
    let mut brightest: Option<(String, f64)> = None;

    for color in colors.iter().copied().flatten() {
        let Some(color) = normalize(color) else {
            continue;
        };
        // Normalized colors always parse
        let Ok(rgb) = parse_hex(&color) else {
            continue;
        };
        let lum = luminance(rgb);
        if darkest.as_ref().is_none_or(|(_, min)| lum < *min) {
            darkest = Some((color.clone(), lum));
        }
        if brightest.as_ref().is_none_or(|(_, max)| lum > *max) {
            brightest = Some((color, lum));
        }
    }

    match (darkest, brightest) {
        (Some((darkest, _)), Some((brightest, _))) => (darkest, brightest),
        _ => (BLACK.to_string(), WHITE.to_string()),
    }
}
