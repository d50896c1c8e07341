//! Property-based invariant tests for the color model.
//!
//! 1. Hex literals re-encode to their original text (case-insensitive),
//!    for both the 3- and the 6-digit form.
//! 2. `hsl_to_hex` always yields a syntactically valid `#rrggbb` literal.
//! 3. RGB → HSL → RGB is lossless within ±1 per channel.
//! 4. `rgb()` text round-trips through parse and display.

use hk_color::{Color, Rgb, hsl_to_hex};
use proptest::prelude::*;

fn is_hex6(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

proptest! {
    #[test]
    fn hex6_roundtrip(digits in "[0-9a-fA-F]{6}") {
        let text = format!("#{digits}");
        let color = Color::parse(&text).unwrap();
        let rgb = color.to_rgb();
        prop_assert_eq!(Color::from(rgb).to_hex_string(), text.to_lowercase());
        prop_assert_eq!(color.to_hex_string(), text.to_lowercase());
    }

    #[test]
    fn hex3_roundtrip(digits in "[0-9a-fA-F]{3}") {
        let text = format!("#{digits}");
        let color = Color::parse(&text).unwrap();
        prop_assert_eq!(color.to_hex_string(), text.to_lowercase());

        // The expanded form doubles every digit.
        let expanded: String = digits.to_lowercase().chars().flat_map(|c| [c, c]).collect();
        prop_assert_eq!(color.to_hex6(), format!("#{expanded}"));
    }

    #[test]
    fn hsl_to_hex_is_always_valid(
        h in -720.0f64..720.0,
        s in 0.0f64..=100.0,
        l in 0.0f64..=100.0,
    ) {
        let hex = hsl_to_hex(h, s, l);
        prop_assert!(is_hex6(&hex), "bad literal {}", hex);
    }

    #[test]
    fn rgb_hsl_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb::new(r, g, b);
        let back = rgb.to_hsl().to_rgb();
        for (a, b) in rgb.channels().into_iter().zip(back.channels()) {
            prop_assert!(a.abs_diff(b) <= 1, "{} came back as {}", rgb, back);
        }
    }

    #[test]
    fn rgb_text_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let text = format!("rgb({r}, {g}, {b})");
        let color = Color::parse(&text).unwrap();
        prop_assert_eq!(color.to_rgb(), Rgb::new(r, g, b));
        prop_assert_eq!(color.to_string(), text);
    }
}
