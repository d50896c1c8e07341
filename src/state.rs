// SPDX-License-Identifier: MIT
//
// Application state — one value, replaced wholesale per action.
//
// Every user intent becomes an `Action`. `reduce` folds an action into the
// old state and returns the new one; the only outside input it touches is
// the caller's random source. The `Controller` owns the state, runs the
// reducer, writes favorites back when they change, and then notifies every
// subscriber so the UI can re-render from the new snapshot.
//
//   UiEvent ─▶ event::translate ─▶ Action ─▶ reduce ─▶ AppState
//                                                     │
//                            FavoritesStore ◀─────────┤ (favorites changed)
//                                                     ▼
//                                              subscribers / PreviewSink

use rand::Rng;
use tracing::{debug, warn};

use hk_color::Color;
use hk_theme::contrast::{self, ContrastResult};
use hk_theme::{ExportFormat, Harmony, Palette, StyleConfig, curated, emit, palette};

use crate::config::Settings;
use crate::favorites::{FavoriteList, FavoritesStore};
use crate::preview::{PreviewModel, PreviewSink};

// ─── StyleField ─────────────────────────────────────────────────────────────

/// A new value for one [`StyleConfig`] field.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleField {
    FontFamily(String),
    FontWeight(u16),
    FontSize(u16),
    Spacing(u16),
    BorderRadius(u16),
    TextColor(Color),
    BackgroundColor(Color),
    Gradient(bool),
}

impl StyleField {
    /// Write this value into `style`.
    pub fn apply(self, style: &mut StyleConfig) {
        match self {
            Self::FontFamily(family) => style.font_family = family,
            Self::FontWeight(weight) => style.font_weight = weight,
            Self::FontSize(size) => style.font_size = size,
            Self::Spacing(spacing) => style.spacing = spacing,
            Self::BorderRadius(radius) => style.border_radius = radius,
            Self::TextColor(color) => style.text_color = color,
            Self::BackgroundColor(color) => style.background_color = color,
            Self::Gradient(on) => style.gradient = on,
        }
    }
}

// ─── Action ─────────────────────────────────────────────────────────────────

/// Everything a user can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch harmony rule. Regenerates the gallery.
    SelectHarmony(Harmony),
    /// Regenerate the gallery with the current rule.
    Generate,
    /// Make the gallery palette at this index current.
    PickPalette(usize),
    /// Make an arbitrary palette current.
    LoadPalette(Palette),
    /// Make the saved favorite at this index current.
    PickFavorite(usize),
    SetStyle(StyleField),
    SetFormat(ExportFormat),
    /// Append the current palette to the favorites.
    SaveFavorite,
    RemoveFavorite(usize),
}

// ─── AppState ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub harmony: Harmony,
    /// Candidate palettes shown in the gallery.
    pub gallery: Vec<Palette>,
    /// The palette applied to the preview, if any.
    pub current: Option<Palette>,
    pub style: StyleConfig,
    pub format: ExportFormat,
    pub favorites: FavoriteList,
    /// Generated palettes per gallery.
    pub gallery_size: usize,
    /// Put the curated palettes ahead of generated ones.
    pub curated_mix: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl AppState {
    /// Initial state: no gallery, no current palette, no favorites.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            harmony: settings.default_harmony,
            gallery: Vec::new(),
            current: None,
            style: settings.style.clone(),
            format: settings.default_format,
            favorites: FavoriteList::new(),
            gallery_size: settings.gallery_size,
            curated_mix: settings.curated_mix,
        }
    }

    /// Colors of the current palette, empty when none is selected.
    #[must_use]
    pub fn current_colors(&self) -> &[Color] {
        match &self.current {
            Some(palette) => palette.as_ref(),
            None => &[],
        }
    }

    /// Theme code for the current palette, style and format.
    #[must_use]
    pub fn code(&self) -> String {
        emit::render(self.format, self.current_colors(), &self.style)
    }

    /// Contrast of the text color on the background color.
    #[must_use]
    pub fn contrast(&self) -> ContrastResult {
        contrast::evaluate(self.style.text_color, self.style.background_color)
    }
}

/// A fresh gallery for `state`'s rule, size and curated setting.
fn fill_gallery<R: Rng>(state: &AppState, rng: &mut R) -> Vec<Palette> {
    if state.curated_mix {
        curated::mixed_gallery(state.harmony, state.gallery_size, rng)
    } else {
        palette::generate_batch(state.harmony, state.gallery_size, rng)
    }
}

// ─── Reducer ────────────────────────────────────────────────────────────────

/// Fold `action` into `state`.
///
/// Indices that point past the gallery or the favorites leave the state as
/// it was, and saving a favorite with no current palette does nothing.
#[must_use]
pub fn reduce<R: Rng>(mut state: AppState, action: Action, rng: &mut R) -> AppState {
    match action {
        Action::SelectHarmony(harmony) => {
            state.harmony = harmony;
            state.gallery = fill_gallery(&state, rng);
        }
        Action::Generate => {
            state.gallery = fill_gallery(&state, rng);
        }
        Action::PickPalette(index) => match state.gallery.get(index) {
            Some(&palette) => state.current = Some(palette),
            None => debug!(index, len = state.gallery.len(), "gallery pick out of range"),
        },
        Action::LoadPalette(palette) => state.current = Some(palette),
        Action::PickFavorite(index) => match state.favorites.get(index) {
            Some(&palette) => state.current = Some(palette),
            None => debug!(index, len = state.favorites.len(), "favorite pick out of range"),
        },
        Action::SetStyle(field) => field.apply(&mut state.style),
        Action::SetFormat(format) => state.format = format,
        Action::SaveFavorite => match state.current {
            Some(palette) => state.favorites.push(palette),
            None => debug!("no current palette to save"),
        },
        Action::RemoveFavorite(index) => {
            if state.favorites.remove(index).is_none() {
                debug!(index, "favorite removal out of range");
            }
        }
    }
    state
}

// ─── Controller ─────────────────────────────────────────────────────────────

/// Called with the new state after every dispatched action.
pub type Subscriber = Box<dyn FnMut(&AppState)>;

/// Owns the application state and drives it.
pub struct Controller<S, R> {
    state: AppState,
    store: S,
    rng: R,
    auto_select_first: bool,
    subscribers: Vec<Subscriber>,
}

impl<S: FavoritesStore, R: Rng> Controller<S, R> {
    #[must_use]
    pub fn new(settings: &Settings, store: S, rng: R) -> Self {
        Self {
            state: AppState::from_settings(settings),
            store,
            rng,
            auto_select_first: settings.auto_select_first,
            subscribers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Register a callback for state changes.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&AppState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Feed a [`PreviewModel`] of every new state to `sink`.
    pub fn attach<P: PreviewSink + 'static>(&mut self, mut sink: P) {
        self.subscribe(move |state| sink.apply(&PreviewModel::from_state(state)));
    }

    /// Load saved favorites, fill the first gallery and, when configured,
    /// select its first palette.
    pub fn start(&mut self) {
        self.state.favorites = self.store.load();
        debug!(favorites = self.state.favorites.len(), "loaded favorites");
        self.dispatch(Action::Generate);
        if self.auto_select_first && !self.state.gallery.is_empty() {
            self.dispatch(Action::PickPalette(0));
        }
    }

    /// Apply `action`, persist favorites if they changed, then notify
    /// subscribers.
    ///
    /// A failed write is logged and otherwise ignored: the in-memory list
    /// stays authoritative for the session.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatch");
        let old = std::mem::take(&mut self.state);
        let favorites_before = old.favorites.clone();
        self.state = reduce(old, action, &mut self.rng);

        if self.state.favorites != favorites_before {
            if let Err(err) = self.store.save(&self.state.favorites) {
                warn!(%err, "could not persist favorites");
            }
        }

        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
