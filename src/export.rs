// SPDX-License-Identifier: MIT
//
// Export — the theme as a JSON document, and the code as a download.

use serde::{Deserialize, Serialize};

use hk_theme::Palette;
use hk_theme::emit::DOWNLOAD_FILE_NAME;

use crate::error::Result;
use crate::state::AppState;

/// The full theme as one JSON object.
///
/// Sizes are CSS text (`16px`) and colors are hex literals. `palette` is
/// absent from the JSON when no palette is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
    pub font: String,
    pub font_weight: u16,
    pub font_size: String,
    pub spacing: String,
    pub button_radius: String,
    pub text_color: String,
    pub bg_color: String,
    pub gradient: bool,
}

impl ThemeExport {
    #[must_use]
    pub fn from_state(state: &AppState) -> Self {
        let style = &state.style;
        Self {
            palette: state.current,
            font: style.font_family.clone(),
            font_weight: style.font_weight,
            font_size: style.font_size_px(),
            spacing: style.spacing_px(),
            button_radius: style.radius_px(),
            text_color: style.text_color.to_hex_string(),
            bg_color: style.background_color.to_hex_string(),
            gradient: style.gradient,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A file offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub contents: String,
}

impl Download {
    /// The rendered theme code as `style.css`, whatever the format.
    #[must_use]
    pub fn code(state: &AppState) -> Self {
        Self {
            file_name: DOWNLOAD_FILE_NAME,
            contents: state.code(),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Action, reduce};
    use hk_theme::ExportFormat;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn state() -> AppState {
        let palette = Palette::parse_or_gray(["#ff0000", "#00ff00", "#0000ff", "#abc"]);
        reduce(AppState::default(), Action::LoadPalette(palette), &mut SmallRng::seed_from_u64(0))
    }

    #[test]
    fn json_shape() {
        let json = ThemeExport::from_state(&state()).to_json().unwrap();
        assert_eq!(
            json,
            r##"{
  "palette": [
    "#ff0000",
    "#00ff00",
    "#0000ff",
    "#abc"
  ],
  "font": "'Inter', sans-serif",
  "fontWeight": 400,
  "fontSize": "16px",
  "spacing": "16px",
  "buttonRadius": "8px",
  "textColor": "#333333",
  "bgColor": "#ffffff",
  "gradient": false
}"##
        );
    }

    #[test]
    fn json_without_palette_omits_it() {
        let json = ThemeExport::from_state(&AppState::default()).to_json().unwrap();
        assert!(!json.contains("palette"));
        let back: ThemeExport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.palette, None);
    }

    #[test]
    fn json_reads_back() {
        let export = ThemeExport::from_state(&state());
        let back: ThemeExport = serde_json::from_str(&export.to_json().unwrap()).unwrap();
        assert_eq!(back, export);
    }

    #[test]
    fn download_is_style_css() {
        let state = reduce(
            state(),
            Action::SetFormat(ExportFormat::Tailwind),
            &mut SmallRng::seed_from_u64(0),
        );
        let download = Download::code(&state);
        assert_eq!(download.file_name, "style.css");
        assert!(download.contents.starts_with("module.exports"));
    }
}
