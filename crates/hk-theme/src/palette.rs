//! Palettes — exactly four colors with fixed roles.
//!
//! A [`Palette`] is produced by [`generate`] (one harmony rule applied to a
//! random base), by [`generate_batch`] for a gallery, or loaded from curated
//! or saved data. It is a plain value: selecting another palette replaces it.

use std::ops::Index;

use hk_color::Color;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::harmony::{Base, Harmony};

/// Number of colors in every palette.
pub const PALETTE_LEN: usize = 4;

/// Gallery size used when the caller does not configure one.
pub const DEFAULT_BATCH: usize = 8;

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// The role of each palette position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Primary,
    Secondary,
    Accent,
    /// Extra / neutral swatch.
    Extra,
}

impl Slot {
    /// Slots in palette order.
    pub const ALL: [Self; PALETTE_LEN] = [Self::Primary, Self::Secondary, Self::Accent, Self::Extra];

    /// Position of this slot in a palette.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// An ordered set of exactly four colors.
///
/// Serialized as a JSON array of four color strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette([Color; PALETTE_LEN]);

impl Palette {
    #[must_use]
    pub const fn new(colors: [Color; PALETTE_LEN]) -> Self {
        Self(colors)
    }

    /// Build a palette from color text, degrading unreadable entries to
    /// neutral gray.
    #[must_use]
    pub fn parse_or_gray(texts: [&str; PALETTE_LEN]) -> Self {
        Self(texts.map(Color::parse_or_gray))
    }

    /// The four colors in slot order.
    #[must_use]
    pub const fn colors(&self) -> &[Color; PALETTE_LEN] {
        &self.0
    }

    /// The color in `slot`.
    #[must_use]
    pub const fn get(&self, slot: Slot) -> Color {
        self.0[slot.index()]
    }

    #[must_use]
    pub const fn primary(&self) -> Color {
        self.get(Slot::Primary)
    }

    #[must_use]
    pub const fn secondary(&self) -> Color {
        self.get(Slot::Secondary)
    }

    #[must_use]
    pub const fn accent(&self) -> Color {
        self.get(Slot::Accent)
    }

    #[must_use]
    pub const fn extra(&self) -> Color {
        self.get(Slot::Extra)
    }

    /// Hex literals of all four colors, in slot order.
    #[must_use]
    pub fn to_hex_strings(&self) -> [String; PALETTE_LEN] {
        self.0.map(Color::to_hex_string)
    }
}

impl Index<usize> for Palette {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

impl Index<Slot> for Palette {
    type Output = Color;

    fn index(&self, slot: Slot) -> &Color {
        &self.0[slot.index()]
    }
}

impl AsRef<[Color]> for Palette {
    fn as_ref(&self) -> &[Color] {
        &self.0
    }
}

impl From<[Color; PALETTE_LEN]> for Palette {
    fn from(colors: [Color; PALETTE_LEN]) -> Self {
        Self(colors)
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

impl Harmony {
    /// Apply this rule to `base` and keep the swatches as exact HSL colors.
    #[must_use]
    pub fn palette<R: Rng>(self, base: Base, rng: &mut R) -> Palette {
        Palette(self.swatches(base, rng).map(Color::Hsl))
    }
}

/// Apply `harmony` to a known base. Used directly when the base hue must be
/// fixed; [`generate`] draws the base first.
#[must_use]
pub fn from_base<R: Rng>(harmony: Harmony, base: Base, rng: &mut R) -> Palette {
    harmony.palette(base, rng)
}

/// Generate one palette: draw a random [`Base`], then apply `harmony`.
#[must_use]
pub fn generate<R: Rng>(harmony: Harmony, rng: &mut R) -> Palette {
    let base = Base::random(rng);
    tracing::trace!(harmony = harmony.name(), ?base, "generating palette");
    from_base(harmony, base, rng)
}

/// Generate `count` independent palettes for a gallery.
#[must_use]
pub fn generate_batch<R: Rng>(harmony: Harmony, count: usize, rng: &mut R) -> Vec<Palette> {
    tracing::debug!(harmony = harmony.name(), count, "generating palette batch");
    (0..count).map(|_| generate(harmony, rng)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
