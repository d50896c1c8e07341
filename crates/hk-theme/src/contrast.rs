//! WCAG contrast ratio and pass/fail grading.
//!
//! Readability is measured in sRGB relative luminance (the WCAG 2.x
//! definition) and graded against the AA threshold for normal text:
//!
//! - ratio >= 4.5:1 → [`Grade::Pass`]
//! - otherwise      → [`Grade::Fail`]
//!
//! Everything here is a pure function of two colors. Turning the grade into
//! a status indicator is the preview layer's job.

use std::fmt;

use hk_color::Color;
use serde::Serialize;

/// Minimum contrast ratio for normal text at WCAG level AA.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// The largest possible contrast ratio (white on black).
pub const MAX_RATIO: f64 = 21.0;

/// Linearization threshold for an sRGB channel fraction.
const LINEAR_THRESHOLD: f64 = 0.039_28;

/// Convert one 8-bit sRGB channel to linear light.
#[inline]
#[must_use]
pub fn channel_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of a color per WCAG 2.x.
///
/// Uses the sRGB linearization + weighted sum formula:
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
///
/// Returns a value in [0.0, 1.0] where 0 is black and 1 is white.
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let [r, g, b] = color.to_rgb().channels().map(channel_to_linear);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// Compute the WCAG contrast ratio between two colors.
///
/// Returns a value in [1.0, 21.0]. The formula is:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ((lighter + 0.05) / (darker + 0.05)).clamp(1.0, MAX_RATIO)
}

/// Round a ratio to two decimals, the precision shown to users.
#[must_use]
pub fn round_ratio(ratio: f64) -> f64 {
    (ratio * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// Pass/fail verdict against [`AA_NORMAL_TEXT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Pass,
    Fail,
}

impl Grade {
    /// Grade a ratio. Exactly 4.5 passes.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AA_NORMAL_TEXT {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Status text shown next to the ratio.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass (AA)",
            Self::Fail => "Fail (Too Low)",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// ContrastResult
// ---------------------------------------------------------------------------

/// A contrast ratio together with its grade. Recomputed on every change,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    /// Unrounded ratio in [1, 21].
    pub ratio: f64,
    pub grade: Grade,
}

impl ContrastResult {
    /// The ratio with two decimals, e.g. `"21.00"`.
    #[must_use]
    pub fn display_ratio(&self) -> String {
        format!("{:.2}", round_ratio(self.ratio))
    }
}

/// Evaluate `text` drawn on `background`.
///
/// The grade is taken from the ratio as displayed, so a ratio that shows as
/// `4.50` always passes.
#[must_use]
pub fn evaluate(text: Color, background: Color) -> ContrastResult {
    let ratio = contrast_ratio(text, background);
    ContrastResult {
        ratio,
        grade: Grade::from_ratio(round_ratio(ratio)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
