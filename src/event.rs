// SPDX-License-Identifier: MIT
//
// UI event adapter — raw control events in, typed actions out.
//
// A host forwards each input/change/click as a control id plus the
// control's current text value. `translate` turns that into an `Action`,
// or `None` when the event means nothing (an unknown control, a number
// field holding "abc", a harmony the selector should never offer).
//
// | Control id          | Value          | Action                    |
// |---------------------|----------------|---------------------------|
// | `harmony-select`    | harmony name   | `SelectHarmony`           |
// | `generate-btn`      | —              | `Generate`                |
// | `font-select`       | font stack     | `SetStyle(FontFamily)`    |
// | `font-weight`       | integer        | `SetStyle(FontWeight)`    |
// | `font-size`         | integer (px)   | `SetStyle(FontSize)`      |
// | `spacing-input`     | integer (px)   | `SetStyle(Spacing)`       |
// | `button-radius`     | integer (px)   | `SetStyle(BorderRadius)`  |
// | `text-color`        | color text     | `SetStyle(TextColor)`     |
// | `background-color`  | color text     | `SetStyle(BackgroundColor)` |
// | `gradient-toggle`   | checked state  | `SetStyle(Gradient)`      |
// | `export-format`     | format name    | `SetFormat`               |
// | `save-favorite`     | —              | `SaveFavorite`            |
// | `remove-favorite`   | index          | `RemoveFavorite`          |
// | `palette`           | gallery index  | `PickPalette`             |
// | `favorite`          | favorite index | `PickFavorite`            |

use hk_color::Color;
use hk_theme::{ExportFormat, Harmony};

use crate::state::{Action, StyleField};

/// One raw event from a UI control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiEvent<'a> {
    /// Id of the control that fired.
    pub control: &'a str,
    /// The control's value, or empty for buttons.
    pub value: &'a str,
}

impl<'a> UiEvent<'a> {
    #[must_use]
    pub const fn input(control: &'a str, value: &'a str) -> Self {
        Self { control, value }
    }

    /// A button press with no value.
    #[must_use]
    pub const fn click(control: &'a str) -> Self {
        Self { control, value: "" }
    }
}

fn number<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

/// Checkbox state: `true`/`on`/`1`/`checked` turn it on, anything else off.
fn checked(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "checked"
    )
}

/// Translate a raw event into an action. Returns `None` for events to
/// ignore.
#[must_use]
pub fn translate(event: &UiEvent<'_>) -> Option<Action> {
    let value = event.value;
    let style = |field| Some(Action::SetStyle(field));

    match event.control {
        "harmony-select" => Harmony::from_name(value).map(Action::SelectHarmony),
        "generate-btn" => Some(Action::Generate),
        "font-select" => style(StyleField::FontFamily(value.to_string())),
        "font-weight" => number(value).map(StyleField::FontWeight).map(Action::SetStyle),
        "font-size" => number(value).map(StyleField::FontSize).map(Action::SetStyle),
        "spacing-input" => number(value).map(StyleField::Spacing).map(Action::SetStyle),
        "button-radius" => number(value).map(StyleField::BorderRadius).map(Action::SetStyle),
        "text-color" => style(StyleField::TextColor(Color::parse_or_gray(value))),
        "background-color" => style(StyleField::BackgroundColor(Color::parse_or_gray(value))),
        "gradient-toggle" => style(StyleField::Gradient(checked(value))),
        "export-format" => ExportFormat::from_name(value).map(Action::SetFormat),
        "save-favorite" => Some(Action::SaveFavorite),
        "remove-favorite" => number(value).map(Action::RemoveFavorite),
        "palette" => number(value).map(Action::PickPalette),
        "favorite" => number(value).map(Action::PickFavorite),
        other => {
            tracing::trace!(control = other, "ignoring event from unknown control");
            None
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
