// SPDX-License-Identifier: MIT
//
// HSL triples and the HSL → RGB / hex conversion.
//
// The conversion is the chroma-based closed form used by CSS:
//
//   a    = s · min(l, 1 − l)
//   k(n) = (n + h / 30) mod 12
//   f(n) = l − a · max(min(k − 3, 9 − k, 1), −1)
//   rgb  = (f(0), f(8), f(4))
//
// with s and l as fractions. Each channel is rounded to the nearest integer
// and clamped to 0–255 before encoding.
#![allow(clippy::many_single_char_names)]

use std::fmt;

use crate::rgb::Rgb;

/// A color in hue / saturation / lightness form.
///
/// Hue is kept in degrees within [0, 360); saturation and lightness are
/// percentages within [0, 100]. [`Hsl::new`] normalizes its inputs, so a
/// constructed value always satisfies these ranges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    h: f32,
    s: f32,
    l: f32,
}

impl Hsl {
    /// Create an HSL color. Hue wraps modulo 360 (negative hues included);
    /// saturation and lightness are clamped to [0, 100].
    #[must_use]
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_percent(s),
            l: clamp_percent(l),
        }
    }

    /// Hue in degrees, [0, 360).
    #[inline]
    #[must_use]
    pub const fn hue(self) -> f32 {
        self.h
    }

    /// Saturation percentage, [0, 100].
    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f32 {
        self.s
    }

    /// Lightness percentage, [0, 100].
    #[inline]
    #[must_use]
    pub const fn lightness(self) -> f32 {
        self.l
    }

    /// Return a copy rotated by `degrees` around the hue wheel.
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Return a copy with the given lightness.
    #[must_use]
    pub fn with_lightness(self, l: f32) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Return a copy with saturation reduced by `amount` percentage points.
    #[must_use]
    pub fn desaturate(self, amount: f32) -> Self {
        Self::new(self.h, self.s - amount, self.l)
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(f64::from(self.h), f64::from(self.s), f64::from(self.l))
    }

    /// Convert to a lower-case `#rrggbb` literal.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

/// Convert HSL to a `#rrggbb` hex literal.
///
/// `h` is any real number of degrees (wrapped modulo 360); `s` and `l` are
/// percentages, clamped to [0, 100]. Always returns a valid literal.
///
/// ```
/// use hk_color::hsl_to_hex;
///
/// assert_eq!(hsl_to_hex(0.0, 100.0, 50.0), "#ff0000");
/// assert_eq!(hsl_to_hex(120.0, 100.0, 50.0), "#00ff00");
/// assert_eq!(hsl_to_hex(240.0, 100.0, 50.0), "#0000ff");
/// ```
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// Convert HSL (degrees, percent, percent) to 8-bit sRGB.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;
    let a = s * l.min(1.0 - l);

    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let t = (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        to_channel(l - a * t)
    };

    Rgb::new(f(0.0), f(8.0), f(4.0))
}

/// Round a fraction in [0, 1] to an 8-bit channel, clamping overshoot.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn normalize_hue(h: f32) -> f32 {
    if !h.is_finite() {
        return 0.0;
    }
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

fn clamp_percent(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
