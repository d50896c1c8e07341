//! Named hand-picked palettes — known-good starting points.
//!
//! A gallery can show these ahead of freshly generated palettes so the user
//! gets a mix of safe choices and exploration.

use rand::Rng;

use crate::harmony::Harmony;
use crate::palette::{self, PALETTE_LEN, Palette};

/// Names and hex literals of every curated palette, in gallery order.
const CURATED: &[(&str, [&str; PALETTE_LEN])] = &[
    ("ocean", ["#0b3954", "#087e8b", "#bfd7ea", "#ff5a5f"]),
    ("sunset", ["#ff6b35", "#f7c59f", "#efefd0", "#004e89"]),
    ("forest", ["#2d6a4f", "#40916c", "#95d5b2", "#1b4332"]),
    ("lavender", ["#6d597a", "#b56576", "#e2d4f0", "#355070"]),
    ("citrus", ["#f9c74f", "#90be6d", "#f94144", "#577590"]),
    ("slate", ["#22223b", "#4a4e69", "#9a8c98", "#f2e9e4"]),
];

/// Look up a curated palette by name.
///
/// Returns `None` if the name is not recognized.
#[must_use]
pub fn curated(name: &str) -> Option<Palette> {
    CURATED
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, hexes)| Palette::parse_or_gray(*hexes))
}

/// List all curated palette names.
#[must_use]
pub fn curated_names() -> Vec<&'static str> {
    CURATED.iter().map(|(name, _)| *name).collect()
}

/// Every curated palette, in gallery order.
#[must_use]
pub fn curated_palettes() -> Vec<Palette> {
    CURATED
        .iter()
        .map(|(_, hexes)| Palette::parse_or_gray(*hexes))
        .collect()
}

/// The curated palettes followed by `random_count` generated ones.
#[must_use]
pub fn mixed_gallery<R: Rng>(harmony: Harmony, random_count: usize, rng: &mut R) -> Vec<Palette> {
    let mut gallery = curated_palettes();
    gallery.extend(palette::generate_batch(harmony, random_count, rng));
    gallery
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hk_color::{Color, HexCode};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn all_curated_resolve() {
        for name in curated_names() {
            assert!(curated(name).is_some(), "Curated '{name}' failed to resolve");
        }
    }

    #[test]
    fn unknown_returns_none() {
        assert!(curated("nonexistent").is_none());
    }

    #[test]
    fn curated_hex_is_valid() {
        // parse_or_gray would hide a typo, so check the literals directly.
        for (name, hexes) in CURATED {
            for hex in hexes {
                assert!(HexCode::parse(hex).is_ok(), "{name}: bad literal {hex}");
            }
        }
    }

    #[test]
    fn curated_keeps_spelling() {
        let ocean = curated("ocean").unwrap();
        assert_eq!(ocean.to_hex_strings(), ["#0b3954", "#087e8b", "#bfd7ea", "#ff5a5f"]);
    }

    #[test]
    fn names_are_unique() {
        let names = curated_names();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn mixed_gallery_puts_curated_first() {
        let mut rng = SmallRng::seed_from_u64(5);
        let gallery = mixed_gallery(Harmony::Triadic, 3, &mut rng);
        let curated = curated_palettes();
        assert_eq!(gallery.len(), curated.len() + 3);
        assert_eq!(&gallery[..curated.len()], curated.as_slice());
        assert!(gallery[curated.len()..].iter().all(|p| matches!(p.primary(), Color::Hsl(_))));
    }

    #[test]
    fn mixed_gallery_without_random_is_curated() {
        let mut rng = SmallRng::seed_from_u64(5);
        assert_eq!(mixed_gallery(Harmony::Random, 0, &mut rng), curated_palettes());
    }
}
