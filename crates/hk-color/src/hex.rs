// SPDX-License-Identifier: MIT
//
// Hex color literals.
//
// A `HexCode` remembers whether it was written in the 3-digit short form,
// so `#abc` re-encodes as `#abc` and `#aabbcc` as `#aabbcc`. The expanded
// 6-digit form is always available through `HexCode::expanded`.

use std::fmt;

use crate::parse::ParseColorError;
use crate::rgb::Rgb;

/// A parsed `#rgb` or `#rrggbb` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexCode {
    rgb: Rgb,
    short: bool,
}

impl HexCode {
    /// A 6-digit literal for the given channels.
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self { rgb, short: false }
    }

    /// Parse `#rgb` or `#rrggbb` (case-insensitive). The leading `#` is
    /// required.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError::InvalidHex`] when the text is not a 3- or
    /// 6-digit hex literal.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let invalid = || ParseColorError::InvalidHex(s.to_string());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        let bytes = digits.as_bytes();

        match bytes.len() {
            3 => {
                let r = parse_hex_digit(bytes[0]).ok_or_else(invalid)?;
                let g = parse_hex_digit(bytes[1]).ok_or_else(invalid)?;
                let b = parse_hex_digit(bytes[2]).ok_or_else(invalid)?;
                Ok(Self {
                    rgb: Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b),
                    short: true,
                })
            }
            6 => {
                let r = parse_hex_byte(&bytes[0..2]).ok_or_else(invalid)?;
                let g = parse_hex_byte(&bytes[2..4]).ok_or_else(invalid)?;
                let b = parse_hex_byte(&bytes[4..6]).ok_or_else(invalid)?;
                Ok(Self::from_rgb(Rgb::new(r, g, b)))
            }
            _ => Err(invalid()),
        }
    }

    /// The channels this literal denotes.
    #[inline]
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.rgb
    }

    /// Whether this literal was written in the 3-digit form.
    #[inline]
    #[must_use]
    pub const fn is_short(self) -> bool {
        self.short
    }

    /// The 6-digit `#rrggbb` form, whatever the original spelling.
    #[must_use]
    pub fn expanded(self) -> String {
        self.rgb.to_hex()
    }
}

impl fmt::Display for HexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.short {
            let Rgb { r, g, b } = self.rgb;
            write!(f, "#{:x}{:x}{:x}", r >> 4, g >> 4, b >> 4)
        } else {
            f.write_str(&self.rgb.to_hex())
        }
    }
}

impl From<Rgb> for HexCode {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
