// SPDX-License-Identifier: MIT
//
// 8-bit sRGB triples.
//
// Single-character variable names (r, g, b, h, s, l, d) are the standard
// mathematical convention in color science.
#![allow(clippy::many_single_char_names)]

use std::fmt;

use crate::hsl::Hsl;

/// An sRGB color with 8-bit channels.
///
/// The channel type enforces the 0–255 range, so every `Rgb` is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Neutral mid-gray, used wherever a color could not be understood.
    pub const GRAY: Self = Self::new(128, 128, 128);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as an array, in R, G, B order.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Apply `f` to every channel.
    #[must_use]
    pub fn map(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Encode as a lower-case `#rrggbb` literal.
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b } = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Convert to HSL using the max/min formulation.
    ///
    /// The result is not rounded: converting back with [`Hsl::to_rgb`]
    /// reproduces every channel exactly or within ±1.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d == 0.0 {
            return Hsl::new(0.0, 0.0, (l * 100.0) as f32);
        }

        let s = d / (1.0 - 2.0f64.mul_add(l, -1.0).abs());
        let h = if (max - r).abs() < f64::EPSILON {
            60.0 * ((g - b) / d).rem_euclid(6.0)
        } else if (max - g).abs() < f64::EPSILON {
            60.0 * ((b - r) / d + 2.0)
        } else {
            60.0 * ((r - g) / d + 4.0)
        };

        Hsl::new(h as f32, (s * 100.0) as f32, (l * 100.0) as f32)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
