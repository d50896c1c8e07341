// SPDX-License-Identifier: MIT
//
// The `Color` sum type — one variant per spelling.
//
// Conversions always go through 8-bit sRGB, which is the space every
// consumer (contrast, shades, code emission) ultimately needs.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::hex::HexCode;
use crate::hsl::Hsl;
use crate::parse::{ParseColorError, parse_color};
use crate::rgb::Rgb;

/// A color value in the spelling it was produced or written in.
///
/// # Examples
///
/// ```
/// use hk_color::{Color, Hsl, Rgb};
///
/// let short = Color::parse("#abc").unwrap();
/// assert_eq!(short.to_rgb(), Rgb::new(0xaa, 0xbb, 0xcc));
/// assert_eq!(short.to_string(), "#abc");
///
/// let red = Color::from(Hsl::new(0.0, 100.0, 50.0));
/// assert_eq!(red.to_hex_string(), "#ff0000");
///
/// // Unknown text degrades to neutral gray instead of failing.
/// assert_eq!(Color::parse_or_gray("tomato").to_rgb(), Rgb::GRAY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// A `#rgb` / `#rrggbb` literal.
    Hex(HexCode),
    /// An `rgb(r, g, b)` triple.
    Rgb(Rgb),
    /// An `hsl(h, s%, l%)` triple.
    Hsl(Hsl),
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Self = Self::Hex(HexCode::from_rgb(Rgb::BLACK));

    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self::Hex(HexCode::from_rgb(Rgb::WHITE));

    /// Neutral gray, the fallback for text that is not a color.
    pub const GRAY: Self = Self::Rgb(Rgb::GRAY);

    /// Parse hex, `rgb()` or `hsl()` text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseColorError`] when the text matches no spelling or a
    /// component is out of range.
    pub fn parse(text: &str) -> Result<Self, ParseColorError> {
        parse_color(text)
    }

    /// Parse color text, degrading to [`Color::GRAY`] when it cannot be
    /// understood.
    #[must_use]
    pub fn parse_or_gray(text: &str) -> Self {
        parse_color(text).unwrap_or_else(|err| {
            tracing::debug!(%err, "falling back to neutral gray");
            Self::GRAY
        })
    }

    /// The 8-bit sRGB channels of this color.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Hex(hex) => hex.rgb(),
            Self::Rgb(rgb) => rgb,
            Self::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    /// This color in HSL form. Exact for `Hsl`, derived from the channels
    /// otherwise.
    #[must_use]
    pub fn to_hsl(self) -> Hsl {
        match self {
            Self::Hsl(hsl) => hsl,
            other => other.to_rgb().to_hsl(),
        }
    }

    /// A hex literal for this color. Hex values keep their original
    /// spelling (short form included); other variants encode as `#rrggbb`.
    #[must_use]
    pub fn to_hex_string(self) -> String {
        match self {
            Self::Hex(hex) => hex.to_string(),
            other => other.to_rgb().to_hex(),
        }
    }

    /// The 6-digit `#rrggbb` literal, whatever the variant.
    #[must_use]
    pub fn to_hex6(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hex(hex) => fmt::Display::fmt(hex, f),
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Self::Hsl(hsl) => fmt::Display::fmt(hsl, f),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

impl From<HexCode> for Color {
    fn from(hex: HexCode) -> Self {
        Self::Hex(hex)
    }
}

// Colors travel as hex text in JSON, which is what exports and saved
// favorites contain.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_color(&text).map_err(de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_keeps_spelling() {
        assert_eq!(Color::parse("#ABC").unwrap().to_string(), "#abc");
        assert_eq!(Color::parse("rgb(1,2,3)").unwrap().to_string(), "rgb(1, 2, 3)");
        assert_eq!(
            Color::parse("hsl(200, 80%, 50%)").unwrap().to_string(),
            "hsl(200, 80%, 50%)"
        );
    }

    #[test]
    fn hex_string_for_every_variant() {
        assert_eq!(Color::from(Rgb::new(255, 0, 0)).to_hex_string(), "#ff0000");
        assert_eq!(Color::from(Hsl::new(120.0, 100.0, 50.0)).to_hex_string(), "#00ff00");
        assert_eq!(Color::parse("#0F0").unwrap().to_hex_string(), "#0f0");
        assert_eq!(Color::parse("#0F0").unwrap().to_hex6(), "#00ff00");
    }

    #[test]
    fn rgb_of_every_variant_agrees() {
        let hex = Color::parse("#ff0000").unwrap();
        let rgb = Color::parse("rgb(255, 0, 0)").unwrap();
        let hsl = Color::parse("hsl(0, 100%, 50%)").unwrap();
        assert_eq!(hex.to_rgb(), rgb.to_rgb());
        assert_eq!(rgb.to_rgb(), hsl.to_rgb());
    }

    #[test]
    fn parse_or_gray_falls_back() {
        assert_eq!(Color::parse_or_gray("not a color"), Color::GRAY);
        assert_eq!(Color::parse_or_gray("rgb(999, 0, 0)"), Color::GRAY);
        assert_eq!(Color::parse_or_gray("#fff").to_rgb(), Rgb::WHITE);
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Color = "#123456".parse().unwrap();
        assert_eq!(parsed, Color::parse("#123456").unwrap());
    }

    #[test]
    fn hsl_variant_is_exact() {
        let hsl = Hsl::new(200.0, 80.0, 50.0);
        assert_eq!(Color::from(hsl).to_hsl(), hsl);
    }

    // ── serde ───────────────────────────────────────────────────────

    #[test]
    fn serializes_as_hex_text() {
        let colors = [
            Color::parse("#abc").unwrap(),
            Color::from(Rgb::new(0, 128, 255)),
            Color::from(Hsl::new(0.0, 100.0, 50.0)),
        ];
        let json = serde_json::to_string(&colors).unwrap();
        assert_eq!(json, r##"["#abc","#0080ff","#ff0000"]"##);
    }

    #[test]
    fn deserializes_any_spelling() {
        let colors: Vec<Color> =
            serde_json::from_str(r##"["#abc", "rgb(1, 2, 3)", "hsl(120, 100%, 50%)"]"##).unwrap();
        assert_eq!(colors[0].to_rgb(), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(colors[1].to_rgb(), Rgb::new(1, 2, 3));
        assert_eq!(colors[2].to_hex6(), "#00ff00");
    }

    #[test]
    fn deserialize_rejects_garbage() {
        assert!(serde_json::from_str::<Color>(r#""banana""#).is_err());
    }
}
