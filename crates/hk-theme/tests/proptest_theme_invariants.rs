//! Property-based invariant tests for palettes, contrast, shades and
//! emitted theme code.
//!
//! 1. Contrast ratio is symmetric and bounded to [1, 21].
//! 2. Every generated palette holds four in-range colors.
//! 3. Shades never leave 0–255 and clamp instead of wrapping.
//! 4. Emitted code names every palette color and style value.
//! 5. The complementary rule puts the complement 180° away at the same
//!    saturation and lightness.

use hk_color::{Color, Rgb};
use hk_theme::contrast::{self, Grade, MAX_RATIO};
use hk_theme::emit::{self, ExportFormat};
use hk_theme::palette::{self, PALETTE_LEN};
use hk_theme::shade::{self, SHADE_OFFSET};
use hk_theme::{Base, Harmony, StyleConfig};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn any_rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

fn any_harmony() -> impl Strategy<Value = Harmony> {
    prop::sample::select(Harmony::all().to_vec())
}

fn any_format() -> impl Strategy<Value = ExportFormat> {
    prop::sample::select(ExportFormat::all().to_vec())
}

proptest! {
    // ── Contrast ────────────────────────────────────────────────────

    #[test]
    fn contrast_symmetric_and_bounded(a in any_rgb(), b in any_rgb()) {
        let (a, b) = (Color::from(a), Color::from(b));
        let ab = contrast::contrast_ratio(a, b);
        let ba = contrast::contrast_ratio(b, a);
        prop_assert_eq!(ab, ba);
        prop_assert!((1.0..=MAX_RATIO).contains(&ab), "ratio {} out of range", ab);
    }

    #[test]
    fn contrast_of_a_color_with_itself_is_one(c in any_rgb()) {
        let c = Color::from(c);
        prop_assert_eq!(contrast::evaluate(c, c).display_ratio(), "1.00");
        prop_assert_eq!(contrast::evaluate(c, c).grade, Grade::Fail);
    }

    #[test]
    fn luminance_in_unit_range(c in any_rgb()) {
        let lum = contrast::relative_luminance(Color::from(c));
        prop_assert!((-1e-12..=1.0 + 1e-12).contains(&lum), "luminance {}", lum);
    }

    // ── Palettes ────────────────────────────────────────────────────

    #[test]
    fn generated_palettes_are_valid(harmony in any_harmony(), seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let batch = palette::generate_batch(harmony, 3, &mut rng);
        prop_assert_eq!(batch.len(), 3);
        for palette in &batch {
            prop_assert_eq!(palette.colors().len(), PALETTE_LEN);
            for color in palette {
                let hsl = color.to_hsl();
                prop_assert!((0.0..360.0).contains(&hsl.hue()));
                prop_assert!((0.0..=100.0).contains(&hsl.saturation()));
                prop_assert!((0.0..=100.0).contains(&hsl.lightness()));
            }
        }
    }

    #[test]
    fn complementary_keeps_saturation_and_lightness(
        hue in 0u16..360,
        saturation in 60u8..100,
        lightness in 40u8..70,
        seed in any::<u64>(),
    ) {
        let base = Base::new(f32::from(hue), f32::from(saturation), f32::from(lightness));
        let mut rng = SmallRng::seed_from_u64(seed);
        let palette = palette::from_base(Harmony::Complementary, base, &mut rng);

        let first = palette.primary().to_hsl();
        let second = palette.secondary().to_hsl();
        prop_assert_eq!(second.hue(), f32::from((hue + 180) % 360));
        prop_assert_eq!(second.saturation(), first.saturation());
        prop_assert_eq!(second.lightness(), first.lightness());
    }

    // ── Shades ──────────────────────────────────────────────────────

    #[test]
    fn shades_clamp_per_channel(c in any_rgb()) {
        let s = shade::shades(Color::from(c));
        let light = s.light.to_rgb().channels();
        let dark = s.dark.to_rgb().channels();
        for ((base, l), d) in c.channels().into_iter().zip(light).zip(dark) {
            prop_assert_eq!(l, base.saturating_add(SHADE_OFFSET));
            prop_assert_eq!(d, base.saturating_sub(SHADE_OFFSET));
            prop_assert!(l >= base && d <= base);
        }
    }

    // ── Emission ────────────────────────────────────────────────────

    #[test]
    fn emission_contains_every_value(
        format in any_format(),
        seed in any::<u64>(),
        weight in 100u16..=900,
        size in 8u16..=72,
        spacing in 0u16..=64,
        radius in 0u16..=32,
        text in any_rgb(),
        background in any_rgb(),
        gradient in any::<bool>(),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let palette = palette::generate(Harmony::Analogous, &mut rng);
        let style = StyleConfig {
            font_weight: weight,
            font_size: size,
            spacing,
            border_radius: radius,
            text_color: Color::from(text),
            background_color: Color::from(background),
            gradient,
            ..StyleConfig::default()
        };

        let out = emit::render(format, palette.as_ref(), &style);
        for hex in palette.to_hex_strings() {
            prop_assert!(out.contains(&hex), "{:?} missing {}", format, hex);
        }
        for value in [
            weight.to_string(),
            format!("{size}px"),
            format!("{spacing}px"),
            format!("{radius}px"),
            style.text_color.to_hex_string(),
            style.background_color.to_hex_string(),
            style.primary_font(),
        ] {
            prop_assert!(out.contains(&value), "{:?} missing {}", format, value);
        }
        prop_assert_eq!(out.contains("linear-gradient"), gradient);
    }
}
