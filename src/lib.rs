// SPDX-License-Identifier: MIT
//
// huekit — a color palette and theme preview generator.
//
// This crate is the application layer on top of the two engine crates:
//
//   hk-color → Color / Rgb / Hsl / HexCode, parsing and conversion
//   hk-theme → harmony palettes, contrast, shades, theme code emission
//
// It holds the single application state and the reducer that advances it,
// the adapter that turns raw UI events into actions, the preview model a
// UI copies onto its widgets, favorites persistence, JSON export and
// startup settings. Each user action flows through:
//
//   UiEvent → event::translate → Action → Controller::dispatch
//           → state::reduce → FavoritesStore (if favorites changed)
//           → subscribers → PreviewModel → PreviewSink
//
// Logging goes through `tracing`. Installing a subscriber is left to the
// host application.

pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod favorites;
pub mod preview;
pub mod state;

pub use hk_color::{self, Color};
pub use hk_theme::{self, ExportFormat, Harmony, Palette, StyleConfig};

pub use config::Settings;
pub use error::{Error, Result};
pub use event::{UiEvent, translate};
pub use export::{Download, ThemeExport};
pub use favorites::{FavoriteList, FavoritesStore, FileStore, MemoryStore};
pub use preview::{PreviewModel, PreviewSink};
pub use state::{Action, AppState, Controller, StyleField, reduce};
