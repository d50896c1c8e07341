// SPDX-License-Identifier: MIT
//
// Favorites — saved palettes and where they live.
//
// The list is stored as one JSON document, an array of four-element arrays
// of color strings, under a fixed key. Every change rewrites the whole list.
// Reading is forgiving: absent or corrupt data yields an empty list and a
// warning, never an error.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use hk_theme::Palette;

use crate::config::{STORAGE_KEY, Settings};
use crate::error::Result;

// ---------------------------------------------------------------------------
// FavoriteList
// ---------------------------------------------------------------------------

/// An ordered list of saved palettes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteList(Vec<Palette>);

impl FavoriteList {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a palette to the end of the list.
    pub fn push(&mut self, palette: Palette) {
        self.0.push(palette);
    }

    /// Remove the palette at `index`. Returns `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Palette> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.0.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Palette> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Palette] {
        &self.0
    }
}

impl From<Vec<Palette>> for FavoriteList {
    fn from(palettes: Vec<Palette>) -> Self {
        Self(palettes)
    }
}

impl<'a> IntoIterator for &'a FavoriteList {
    type Item = &'a Palette;
    type IntoIter = std::slice::Iter<'a, Palette>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Serialize a list to its stored JSON form.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
pub fn encode(list: &FavoriteList) -> Result<String> {
    Ok(serde_json::to_string(list)?)
}

/// Read a stored list. Absent or unparsable data becomes an empty list.
#[must_use]
pub fn decode(text: Option<&str>) -> FavoriteList {
    let Some(text) = text else {
        return FavoriteList::new();
    };
    match serde_json::from_str(text) {
        Ok(list) => list,
        Err(err) => {
            warn!(%err, "discarding unreadable favorites");
            FavoriteList::new()
        }
    }
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// Somewhere to keep the favorites list between sessions.
pub trait FavoritesStore {
    /// Read the saved list. Never fails; bad data reads as empty.
    fn load(&self) -> FavoriteList;

    /// Replace the saved list with `list`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be written.
    fn save(&mut self, list: &FavoriteList) -> Result<()>;
}

/// An in-process store holding the encoded text, as a browser's key-value
/// storage would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new() -> Self {
        Self { raw: None }
    }

    /// A store pre-filled with raw text, which need not be valid.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
        }
    }

    /// The text currently stored.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl FavoritesStore for MemoryStore {
    fn load(&self) -> FavoriteList {
        decode(self.raw.as_deref())
    }

    fn save(&mut self, list: &FavoriteList) -> Result<()> {
        self.raw = Some(encode(list)?);
        Ok(())
    }
}

/// A store backed by `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store under `dir` with the default key.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_key(dir, STORAGE_KEY)
    }

    /// Store under `dir` with the key named in `settings`.
    #[must_use]
    pub fn from_settings(dir: impl AsRef<Path>, settings: &Settings) -> Self {
        Self::with_key(dir, &settings.storage_key)
    }

    #[must_use]
    pub fn with_key(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for FileStore {
    fn load(&self) -> FavoriteList {
        match fs::read_to_string(&self.path) {
            Ok(text) => decode(Some(&text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => FavoriteList::new(),
            Err(err) => {
                warn!(%err, path = %self.path.display(), "cannot read favorites");
                FavoriteList::new()
            }
        }
    }

    fn save(&mut self, list: &FavoriteList) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, encode(list)?)?;
        debug!(count = list.len(), path = %self.path.display(), "saved favorites");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
