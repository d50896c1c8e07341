//! Harmony rules — pure hue/lightness math.
//!
//! Each rule takes a [`Base`] (hue, saturation, lightness) and produces four
//! HSL swatches. The first swatch is always the base hue.

use hk_color::Hsl;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A named rule for picking related colors around a base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    /// Neighbouring hues, 30 degrees apart.
    #[default]
    Analogous,
    /// One hue at four lightness steps.
    Monochromatic,
    /// Three hues 120 degrees apart plus a light tint of the base.
    Triadic,
    /// Base and its opposite, each with a muted tint.
    Complementary,
    /// Four unrelated hues.
    Random,
}

impl Harmony {
    /// Lowercase name, as used in the harmony selector and config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Analogous => "analogous",
            Self::Monochromatic => "monochromatic",
            Self::Triadic => "triadic",
            Self::Complementary => "complementary",
            Self::Random => "random",
        }
    }

    /// Parse a harmony from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    /// All harmony rules, in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Analogous,
            Self::Monochromatic,
            Self::Triadic,
            Self::Complementary,
            Self::Random,
        ]
    }

    /// Apply this rule to `base`.
    ///
    /// Deterministic for every rule except [`Harmony::Random`], which draws
    /// its four hues from `rng`.
    #[must_use]
    pub fn swatches<R: Rng>(self, base: Base, rng: &mut R) -> [Hsl; 4] {
        let Base {
            hue: h,
            saturation: s,
            lightness: l,
        } = base;

        match self {
            Self::Analogous => [0.0, 30.0, 60.0, 90.0].map(|offset| Hsl::new(h + offset, s, l)),
            Self::Monochromatic => [90.0, 70.0, 50.0, 30.0].map(|light| Hsl::new(h, s, light)),
            Self::Triadic => [
                Hsl::new(h, s, l),
                Hsl::new(h + 120.0, s, l),
                Hsl::new(h + 240.0, s, l),
                Hsl::new(h, s, 90.0),
            ],
            Self::Complementary => {
                let base = Hsl::new(h, s, l);
                let complement = base.shift_hue(180.0);
                [
                    base,
                    complement,
                    base.desaturate(20.0).with_lightness(90.0),
                    complement.desaturate(20.0).with_lightness(20.0),
                ]
            }
            Self::Random => {
                std::array::from_fn(|_| Hsl::new(rng.random_range(0.0..360.0), 70.0, 50.0))
            }
        }
    }
}

/// The randomly drawn starting point of a palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Base {
    /// Hue in degrees.
    pub hue: f32,
    /// Saturation percentage.
    pub saturation: f32,
    /// Lightness percentage.
    pub lightness: f32,
}

impl Base {
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Draw a base: integer hue in [0, 360), a vibrant saturation in
    /// [60, 100) and a mid-range lightness in [40, 70).
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            hue: f32::from(rng.random_range(0u16..360)),
            saturation: f32::from(rng.random_range(60u8..100)),
            lightness: f32::from(rng.random_range(40u8..70)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn hues(swatches: &[Hsl; 4]) -> [f32; 4] {
        swatches.map(Hsl::hue)
    }

    fn lightnesses(swatches: &[Hsl; 4]) -> [f32; 4] {
        swatches.map(Hsl::lightness)
    }

    const BASE: Base = Base::new(200.0, 80.0, 50.0);

    // ── Names ───────────────────────────────────────────────────────

    #[test]
    fn names_roundtrip() {
        for harmony in Harmony::all() {
            assert_eq!(Harmony::from_name(harmony.name()), Some(*harmony));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Harmony::from_name("Triadic"), Some(Harmony::Triadic));
        assert_eq!(Harmony::from_name(" COMPLEMENTARY "), Some(Harmony::Complementary));
        assert_eq!(Harmony::from_name("tetradic"), None);
    }

    // ── Rules ───────────────────────────────────────────────────────

    #[test]
    fn analogous_steps_by_30() {
        let s = Harmony::Analogous.swatches(BASE, &mut rng());
        assert_eq!(hues(&s), [200.0, 230.0, 260.0, 290.0]);
        assert!(s.iter().all(|c| c.saturation() == 80.0 && c.lightness() == 50.0));
    }

    #[test]
    fn analogous_wraps() {
        let s = Harmony::Analogous.swatches(Base::new(300.0, 80.0, 50.0), &mut rng());
        assert_eq!(hues(&s), [300.0, 330.0, 0.0, 30.0]);
    }

    #[test]
    fn monochromatic_lightness_ladder() {
        let s = Harmony::Monochromatic.swatches(BASE, &mut rng());
        assert_eq!(hues(&s), [200.0; 4]);
        assert_eq!(lightnesses(&s), [90.0, 70.0, 50.0, 30.0]);
    }

    #[test]
    fn triadic_plus_light_tint() {
        let s = Harmony::Triadic.swatches(BASE, &mut rng());
        assert_eq!(hues(&s), [200.0, 320.0, 80.0, 200.0]);
        assert_eq!(lightnesses(&s), [50.0, 50.0, 50.0, 90.0]);
    }

    #[test]
    fn complementary_layout() {
        let s = Harmony::Complementary.swatches(BASE, &mut rng());
        assert_eq!(hues(&s), [200.0, 20.0, 200.0, 20.0]);
        assert_eq!(lightnesses(&s), [50.0, 50.0, 90.0, 20.0]);
        assert_eq!(s.map(Hsl::saturation), [80.0, 80.0, 60.0, 60.0]);
    }

    #[test]
    fn random_uses_fixed_saturation_and_lightness() {
        let s = Harmony::Random.swatches(BASE, &mut rng());
        for c in s {
            assert_eq!(c.saturation(), 70.0);
            assert_eq!(c.lightness(), 50.0);
            assert!((0.0..360.0).contains(&c.hue()));
        }
    }

    #[test]
    fn random_is_deterministic_per_seed() {
        let a = Harmony::Random.swatches(BASE, &mut rng());
        let b = Harmony::Random.swatches(BASE, &mut rng());
        assert_eq!(a, b);
    }

    // ── Base ────────────────────────────────────────────────────────

    #[test]
    fn random_base_ranges() {
        let mut rng = rng();
        for _ in 0..500 {
            let base = Base::random(&mut rng);
            assert!((0.0..360.0).contains(&base.hue));
            assert_eq!(base.hue.fract(), 0.0, "hue should be whole degrees");
            assert!((60.0..100.0).contains(&base.saturation));
            assert!((40.0..70.0).contains(&base.lightness));
        }
    }
}
