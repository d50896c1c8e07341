// SPDX-License-Identifier: MIT
//
// Color text parsing.
//
// Accepted spellings:
//
//   #rgb / #rrggbb          → Color::Hex
//   rgb(r, g, b)            → Color::Rgb   (channels 0–255)
//   hsl(h, s%, l%)          → Color::Hsl   (percent signs optional)
//
// Each spelling has its own anchored pattern; the first one that matches
// decides the variant. Whitespace around the text and inside the
// parentheses is ignored, and function names are case-insensitive.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::color::Color;
use crate::hex::HexCode;
use crate::hsl::Hsl;
use crate::rgb::Rgb;

static RGB_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*\)$")
        .expect("rgb() pattern is valid")
});

static HSL_FN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsl\(\s*(-?[0-9]+(?:\.[0-9]+)?)\s*,\s*([0-9]+(?:\.[0-9]+)?)%?\s*,\s*([0-9]+(?:\.[0-9]+)?)%?\s*\)$",
    )
    .expect("hsl() pattern is valid")
});

/// Why a piece of color text could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("rgb channel out of range (0-255): {0}")]
    ChannelOutOfRange(u16),

    #[error("hsl component out of range: {0:?}")]
    InvalidHsl(String),

    #[error("unrecognized color: {0:?}")]
    Unrecognized(String),
}

/// Parse any supported color spelling.
///
/// # Errors
///
/// Returns a [`ParseColorError`] describing the first problem found.
pub fn parse_color(text: &str) -> Result<Color, ParseColorError> {
    let text = text.trim();

    if text.starts_with('#') {
        return HexCode::parse(text).map(Color::Hex);
    }
    if let Some(rgb) = parse_rgb(text)? {
        return Ok(Color::Rgb(rgb));
    }
    if let Some(hsl) = parse_hsl(text)? {
        return Ok(Color::Hsl(hsl));
    }

    Err(ParseColorError::Unrecognized(text.to_string()))
}

/// Parse `rgb(r, g, b)` text. Returns `Ok(None)` when the text is not an
/// `rgb()` call at all.
///
/// # Errors
///
/// Returns [`ParseColorError::ChannelOutOfRange`] for a channel above 255.
pub fn parse_rgb(text: &str) -> Result<Option<Rgb>, ParseColorError> {
    let Some(caps) = RGB_FN.captures(text.trim()) else {
        return Ok(None);
    };

    let mut channels = [0u8; 3];
    for (slot, i) in channels.iter_mut().zip(1..=3) {
        // At most three ASCII digits.
        let value: u16 = caps[i].parse().unwrap_or(u16::MAX);
        *slot = u8::try_from(value).map_err(|_| ParseColorError::ChannelOutOfRange(value))?;
    }

    Ok(Some(Rgb::from(channels)))
}

/// Parse `hsl(h, s%, l%)` text. Returns `Ok(None)` when the text is not an
/// `hsl()` call at all.
///
/// # Errors
///
/// Returns [`ParseColorError::InvalidHsl`] when saturation or lightness
/// exceed 100%.
pub fn parse_hsl(text: &str) -> Result<Option<Hsl>, ParseColorError> {
    let text = text.trim();
    let Some(caps) = HSL_FN.captures(text) else {
        return Ok(None);
    };

    let invalid = || ParseColorError::InvalidHsl(text.to_string());
    let h: f32 = caps[1].parse().map_err(|_| invalid())?;
    let s: f32 = caps[2].parse().map_err(|_| invalid())?;
    let l: f32 = caps[3].parse().map_err(|_| invalid())?;

    if s > 100.0 || l > 100.0 {
        return Err(invalid());
    }

    Ok(Some(Hsl::new(h, s, l)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
