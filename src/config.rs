// SPDX-License-Identifier: MIT
//
// Settings — startup configuration read from TOML.
//
// Every field is optional. A missing file is not an error: the host simply
// runs with the defaults.
//
//   # huekit.toml
//   gallery_size = 12
//   default_harmony = "triadic"
//   default_format = "scss"
//   curated_mix = true
//
//   [style]
//   font_family = "'Fira Code', monospace"
//   border_radius = 4

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use hk_theme::palette::DEFAULT_BATCH;
use hk_theme::{ExportFormat, Harmony, StyleConfig};

use crate::error::Result;

/// Key under which favorites are persisted.
pub const STORAGE_KEY: &str = "palette-favorites";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of generated palettes per gallery.
    pub gallery_size: usize,
    /// Favorites file stem, see [`FileStore::from_settings`](crate::FileStore::from_settings).
    pub storage_key: String,
    pub default_harmony: Harmony,
    pub default_format: ExportFormat,
    /// Select the first gallery palette on start.
    pub auto_select_first: bool,
    /// Show the curated palettes ahead of the generated ones.
    pub curated_mix: bool,
    pub style: StyleConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gallery_size: DEFAULT_BATCH,
            storage_key: STORAGE_KEY.to_string(),
            default_harmony: Harmony::default(),
            default_format: ExportFormat::default(),
            auto_select_first: true,
            curated_mix: false,
            style: StyleConfig::default(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`](crate::Error::Toml) for malformed TOML or
    /// values of the wrong type (including unparsable colors).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load settings from `path`, or the defaults when the file does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the file exists but
    /// cannot be read, or a parse error from [`Settings::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => {
                let settings = Self::from_toml_str(&text)?;
                info!(path = %path.display(), "loaded settings");
                Ok(settings)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
