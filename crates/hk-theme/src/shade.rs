//! Light/dark shades and quick foreground picks.
//!
//! Shades move every channel by a fixed offset and saturate at the ends of
//! the 0–255 range. The foreground pick uses the YIQ brightness estimate,
//! which is cheaper than the WCAG ratio and good enough for choosing black
//! or white text on a button or badge.

use hk_color::{Color, Rgb};
use serde::Serialize;

/// Channel offset applied by [`shades`].
pub const SHADE_OFFSET: u8 = 40;

/// Brightness above which black text is used.
pub const BRIGHTNESS_THRESHOLD: f64 = 125.0;

/// A lightened and a darkened variant of one base color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shades {
    pub light: Color,
    pub dark: Color,
}

/// Lighten and darken `color` by [`SHADE_OFFSET`] per channel.
///
/// Channels are clamped, so a channel at 255 stays at 255 in `light` and a
/// channel at 0 stays at 0 in `dark`. Both shades are `rgb()` colors.
#[must_use]
pub fn shades(color: Color) -> Shades {
    let rgb = color.to_rgb();
    Shades {
        light: Color::Rgb(rgb.map(|c| c.saturating_add(SHADE_OFFSET))),
        dark: Color::Rgb(rgb.map(|c| c.saturating_sub(SHADE_OFFSET))),
    }
}

/// Perceived brightness on the 0–255 scale:
/// `0.299 R + 0.587 G + 0.114 B`.
#[must_use]
pub fn brightness(color: Color) -> f64 {
    let Rgb { r, g, b } = color.to_rgb();
    0.299f64.mul_add(
        f64::from(r),
        0.587f64.mul_add(f64::from(g), 0.114 * f64::from(b)),
    )
}

/// Black or white text, whichever reads better on a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Foreground {
    Black,
    White,
}

impl Foreground {
    /// Short CSS hex literal: `#000` or `#fff`.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Black => "#000",
            Self::White => "#fff",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::White => Color::WHITE,
        }
    }
}

/// Pick black text when `background` is brighter than
/// [`BRIGHTNESS_THRESHOLD`], white text otherwise.
#[must_use]
pub fn readable_foreground(background: Color) -> Foreground {
    if brightness(background) > BRIGHTNESS_THRESHOLD {
        Foreground::Black
    } else {
        Foreground::White
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::from(Rgb::new(r, g, b))
    }

    // ── shades ──────────────────────────────────────────────────────

    #[test]
    fn shades_offset_by_40() {
        let s = shades(rgb(100, 150, 200));
        assert_eq!(s.light, rgb(140, 190, 240));
        assert_eq!(s.dark, rgb(60, 110, 160));
    }

    #[test]
    fn shades_clamp_at_the_ends() {
        let s = shades(rgb(255, 230, 0));
        assert_eq!(s.light, rgb(255, 255, 40));
        assert_eq!(s.dark, rgb(215, 190, 0));

        let s = shades(rgb(20, 0, 250));
        assert_eq!(s.light, rgb(60, 40, 255));
        assert_eq!(s.dark, rgb(0, 0, 210));
    }

    #[test]
    fn shades_print_as_rgb_text() {
        let s = shades(Color::parse("#808080").unwrap());
        assert_eq!(s.light.to_string(), "rgb(168, 168, 168)");
        assert_eq!(s.dark.to_string(), "rgb(88, 88, 88)");
    }

    #[test]
    fn shades_of_unparsable_text_use_gray() {
        let s = shades(Color::parse_or_gray("???"));
        assert_eq!(s.light, rgb(168, 168, 168));
    }

    // ── readable_foreground ─────────────────────────────────────────

    #[test]
    fn white_background_gets_black_text() {
        assert_eq!(readable_foreground(Color::WHITE), Foreground::Black);
        assert_eq!(readable_foreground(Color::parse("#ffffff").unwrap()).css(), "#000");
    }

    #[test]
    fn black_background_gets_white_text() {
        assert_eq!(readable_foreground(Color::BLACK), Foreground::White);
        assert_eq!(readable_foreground(Color::parse("#000000").unwrap()).css(), "#fff");
    }

    #[test]
    fn threshold_splits_mid_grays() {
        assert_eq!(readable_foreground(rgb(124, 124, 124)), Foreground::White);
        assert_eq!(readable_foreground(rgb(126, 126, 126)), Foreground::Black);
    }

    #[test]
    fn green_is_brighter_than_blue() {
        assert_eq!(readable_foreground(rgb(0, 255, 0)), Foreground::Black);
        assert_eq!(readable_foreground(rgb(0, 0, 255)), Foreground::White);
    }

    #[test]
    fn brightness_extremes() {
        assert!((brightness(Color::WHITE) - 255.0).abs() < 1e-9);
        assert!(brightness(Color::BLACK).abs() < 1e-9);
    }
}
