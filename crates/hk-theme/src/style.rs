//! Style selections — the non-palette half of a theme.

use hk_color::Color;
use serde::{Deserialize, Serialize};

/// Font stacks offered by the font selector, first entry is the default.
pub const FONT_STACKS: &[&str] = &[
    "'Inter', sans-serif",
    "'Roboto', sans-serif",
    "'Poppins', sans-serif",
    "'Montserrat', sans-serif",
    "'Playfair Display', serif",
    "'Merriweather', serif",
    "'Fira Code', monospace",
    "system-ui, sans-serif",
];

/// A snapshot of every style control.
///
/// Sizes are whole CSS pixels. Deserializing fills absent fields from
/// [`StyleConfig::default`], so config files only name what they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_family: String,
    pub font_weight: u16,
    pub font_size: u16,
    pub spacing: u16,
    pub border_radius: u16,
    pub text_color: Color,
    pub background_color: Color,
    pub gradient: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: FONT_STACKS[0].to_string(),
            font_weight: 400,
            font_size: 16,
            spacing: 16,
            border_radius: 8,
            text_color: Color::parse_or_gray("#333333"),
            background_color: Color::WHITE,
            gradient: false,
        }
    }
}

impl StyleConfig {
    /// Font size as CSS text, e.g. `16px`.
    #[must_use]
    pub fn font_size_px(&self) -> String {
        px(self.font_size)
    }

    /// Spacing as CSS text.
    #[must_use]
    pub fn spacing_px(&self) -> String {
        px(self.spacing)
    }

    /// Border radius as CSS text.
    #[must_use]
    pub fn radius_px(&self) -> String {
        px(self.border_radius)
    }

    /// The first family of the font stack with every quote removed:
    /// `'Fira Code', monospace` → `Fira Code`.
    ///
    /// Inner quotes go too, so the name is safe inside a quoted literal.
    #[must_use]
    pub fn primary_font(&self) -> String {
        self.font_family
            .split(',')
            .next()
            .unwrap_or_default()
            .replace(['\'', '"'], "")
            .trim()
            .to_string()
    }
}

/// Format a pixel length.
#[must_use]
pub fn px(value: u16) -> String {
    format!("{value}px")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
