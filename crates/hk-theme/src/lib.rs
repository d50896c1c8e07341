//! # hk-theme — palette and theme-code engine
//!
//! Generates four-color palettes from harmony rules, grades text/background
//! readability with the WCAG contrast ratio, derives light/dark shades, and
//! renders the result as copyable theme code.
//!
//! # Architecture
//!
//! ```text
//! Harmony + Base (random hue / saturation / lightness)
//!     │
//!     ▼
//! harmony.rs:  four HSL swatches per rule (pure math)
//!     │
//!     ▼
//! palette.rs:  Palette = [Color; 4], single and batch generation
//!     │          (curated.rs adds hand-picked palettes to the mix)
//!     ▼
//! contrast.rs: WCAG relative luminance, contrast ratio, pass/fail grade
//! shade.rs:    ±40 channel shades, black/white foreground pick
//!     │
//!     ▼
//! emit.rs:     CSS / SCSS / Tailwind text from Palette + StyleConfig
//! ```
//!
//! Every function here is total: bad input degrades (gray fallback,
//! placeholder colors) instead of failing.

pub mod contrast;
pub mod curated;
pub mod emit;
pub mod harmony;
pub mod palette;
pub mod shade;
pub mod style;

pub use contrast::{ContrastResult, Grade};
pub use emit::ExportFormat;
pub use harmony::{Base, Harmony};
pub use palette::{Palette, Slot};
pub use shade::{Foreground, Shades};
pub use style::StyleConfig;
