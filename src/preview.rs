// SPDX-License-Identifier: MIT
//
// Preview model — everything the live preview shows, as plain values.
//
// `PreviewModel::from_state` is a pure projection of `AppState`. A UI host
// implements `PreviewSink` and copies the fields onto its widgets; nothing
// in here knows what those widgets are.
//
//   ┌ preview box ─────────────────────────────┐
//   │ font / text color / background or gradient│
//   │  [primary] [secondary]   (badge)          │
//   │  ┌─ card (4px accent top border) ───────┐ │
//   │  └──────────────────────────────────────┘ │
//   └───────────────────────────────────────────┘
//   contrast: 12.63  Pass (AA)  check_circle

use serde::Serialize;

use hk_color::Color;
use hk_theme::contrast::{ContrastResult, Grade};
use hk_theme::shade::{self, Foreground};
use hk_theme::{Palette, emit};

use crate::state::AppState;

/// Receives a new [`PreviewModel`] after every state change.
pub trait PreviewSink {
    fn apply(&mut self, model: &PreviewModel);
}

impl<F: FnMut(&PreviewModel)> PreviewSink for F {
    fn apply(&mut self, model: &PreviewModel) {
        self(model);
    }
}

/// A filled element: its color, readable text on it, and hover/pressed
/// shades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub background: String,
    pub foreground: Foreground,
    pub light: String,
    pub dark: String,
}

impl Swatch {
    #[must_use]
    pub fn of(color: Color) -> Self {
        let shades = shade::shades(color);
        Self {
            background: color.to_hex_string(),
            foreground: shade::readable_foreground(color),
            light: shades.light.to_string(),
            dark: shades.dark.to_string(),
        }
    }
}

/// Preview parts that only exist once a palette is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteStyles {
    pub primary_button: Swatch,
    pub secondary_button: Swatch,
    /// `4px solid <accent>`.
    pub card_border: String,
    pub badge: Swatch,
}

impl PaletteStyles {
    #[must_use]
    pub fn of(palette: &Palette) -> Self {
        Self {
            primary_button: Swatch::of(palette.primary()),
            secondary_button: Swatch::of(palette.secondary()),
            card_border: format!("4px solid {}", palette.accent().to_hex_string()),
            badge: Swatch::of(palette.accent()),
        }
    }
}

/// The accessibility readout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastStatus {
    pub result: ContrastResult,
    /// Two-decimal ratio text.
    pub ratio: String,
    pub label: &'static str,
    /// Material icon name.
    pub icon: &'static str,
    /// `pass` or `fail`, for styling the readout.
    pub class: &'static str,
}

impl ContrastStatus {
    #[must_use]
    pub fn of(result: ContrastResult) -> Self {
        let (icon, class) = match result.grade {
            Grade::Pass => ("check_circle", "pass"),
            Grade::Fail => ("warning", "fail"),
        };
        Self {
            result,
            ratio: result.display_ratio(),
            label: result.grade.label(),
            icon,
            class,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewModel {
    pub font_family: String,
    pub font_weight: u16,
    pub font_size: String,
    pub text_color: String,
    /// Background color, or the palette gradient when enabled.
    pub background: String,
    /// Corner radius for buttons, inputs, cards and alerts.
    pub radius: String,
    /// Gap between elements and card/alert padding.
    pub spacing: String,
    pub palette: Option<PaletteStyles>,
    pub text_hex: String,
    pub background_hex: String,
    pub contrast: ContrastStatus,
    pub code: String,
}

impl PreviewModel {
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let style = &state.style;
        let background = state
            .current
            .as_ref()
            .filter(|_| style.gradient)
            .and_then(|palette| emit::gradient(palette.as_ref()))
            .unwrap_or_else(|| style.background_color.to_hex_string());

        Self {
            font_family: style.font_family.clone(),
            font_weight: style.font_weight,
            font_size: style.font_size_px(),
            text_color: style.text_color.to_hex_string(),
            background,
            radius: style.radius_px(),
            spacing: style.spacing_px(),
            palette: state.current.as_ref().map(PaletteStyles::of),
            text_hex: style.text_color.to_hex_string(),
            background_hex: style.background_color.to_hex_string(),
            contrast: ContrastStatus::of(state.contrast()),
            code: state.code(),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
