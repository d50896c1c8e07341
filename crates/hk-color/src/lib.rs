// SPDX-License-Identifier: MIT
//
// hk-color — the color model for huekit.
//
// A color arrives in one of three spellings: a hex literal (`#abc`,
// `#aabbcc`), an `rgb(r, g, b)` triple or an `hsl(h, s%, l%)` triple. Each
// spelling is its own variant of `Color`, with its own parser and its own
// formatter, so nothing downstream has to sniff string prefixes.
//
// Conversions:
//
//   HSL ──(chroma formula)──▶ RGB ──▶ hex
//    ▲                         │
//    └─────(max/min formula)───┘
//
// Every conversion is total. Channels are rounded to the nearest integer and
// clamped to 0–255, so a round trip is lossless within ±1 unit.

pub mod color;
pub mod hex;
pub mod hsl;
pub mod parse;
pub mod rgb;

pub use color::Color;
pub use hex::HexCode;
pub use hsl::{Hsl, hsl_to_hex};
pub use parse::ParseColorError;
pub use rgb::Rgb;
