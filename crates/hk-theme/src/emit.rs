//! Theme code emission — palette + style → copyable text.
//!
//! Three output formats:
//!
//! | Format     | Shape                                             |
//! |------------|---------------------------------------------------|
//! | `css`      | `:root { --name: value; … }` custom properties    |
//! | `scss`     | `$name: value;` declarations                      |
//! | `tailwind` | `module.exports = { theme: { extend: { … } } }`   |
//!
//! Palette slots that are missing fall back to placeholder colors, so the
//! output is always syntactically valid. Rendering has no side effects;
//! putting the text somewhere is the caller's job.

use hk_color::Color;
use serde::{Deserialize, Serialize};

use crate::style::StyleConfig;

/// Placeholders for the primary, secondary and accent slots.
pub const FALLBACK_COLORS: [&str; 3] = ["#000", "#333", "#555"];

/// File name offered when the code is downloaded.
pub const DOWNLOAD_FILE_NAME: &str = "style.css";

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Css,
    Scss,
    Tailwind,
}

impl ExportFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Tailwind => "tailwind",
        }
    }

    /// Parse a format from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|f| f.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Css, Self::Scss, Self::Tailwind]
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// One theme value under its CSS and SCSS variable names.
struct Decl {
    css: &'static str,
    scss: &'static str,
    value: String,
}

impl Decl {
    const fn new(css: &'static str, scss: &'static str, value: String) -> Self {
        Self { css, scss, value }
    }
}

/// Hex text for palette slot `index`, or its placeholder.
fn slot(colors: &[Color], index: usize) -> String {
    colors.get(index).map_or_else(
        || FALLBACK_COLORS[index].to_string(),
        |c| c.to_hex_string(),
    )
}

/// The background gradient built from the first two palette colors:
/// `linear-gradient(135deg, #rrggbb22, #rrggbb22)`.
///
/// Returns `None` when fewer than two colors are available.
#[must_use]
pub fn gradient(colors: &[Color]) -> Option<String> {
    match colors {
        [first, second, ..] => Some(format!(
            "linear-gradient(135deg, {}22, {}22)",
            first.to_hex6(),
            second.to_hex6()
        )),
        _ => None,
    }
}

/// Every declaration shared by the CSS and SCSS formats, in output order.
fn declarations(colors: &[Color], style: &StyleConfig) -> Vec<Decl> {
    let mut decls = vec![
        Decl::new("primary", "primary", slot(colors, 0)),
        Decl::new("secondary", "secondary", slot(colors, 1)),
        Decl::new("accent", "accent", slot(colors, 2)),
    ];
    if let Some(extra) = colors.get(3) {
        decls.push(Decl::new("extra", "extra", extra.to_hex_string()));
    }
    decls.extend([
        Decl::new("bg-color", "bg-color", style.background_color.to_hex_string()),
        Decl::new("text-color", "text-color", style.text_color.to_hex_string()),
        Decl::new("font-main", "font-stack", style.font_family.clone()),
        Decl::new("font-weight", "font-weight", style.font_weight.to_string()),
        Decl::new("font-size", "font-size", style.font_size_px()),
        Decl::new("spacing", "base-spacing", style.spacing_px()),
        Decl::new("radius", "border-radius", style.radius_px()),
    ]);
    if style.gradient {
        if let Some(g) = gradient(colors) {
            decls.push(Decl::new("bg-gradient", "bg-gradient", g));
        }
    }
    decls
}

fn render_css(colors: &[Color], style: &StyleConfig) -> String {
    let body: Vec<String> = declarations(colors, style)
        .iter()
        .map(|d| format!("  --{}: {};", d.css, d.value))
        .collect();
    format!(":root {{\n{}\n}}", body.join("\n"))
}

fn render_scss(colors: &[Color], style: &StyleConfig) -> String {
    declarations(colors, style)
        .iter()
        .map(|d| format!("${}: {};", d.scss, d.value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_tailwind(colors: &[Color], style: &StyleConfig) -> String {
    let mut palette = vec![
        ("primary", slot(colors, 0)),
        ("secondary", slot(colors, 1)),
        ("accent", slot(colors, 2)),
    ];
    if let Some(extra) = colors.get(3) {
        palette.push(("extra", extra.to_hex_string()));
    }
    palette.push(("background", style.background_color.to_hex_string()));
    palette.push(("text", style.text_color.to_hex_string()));

    let color_lines: Vec<String> = palette
        .iter()
        .map(|(name, value)| format!("        {name}: '{value}',"))
        .collect();

    let background_image = match (style.gradient, gradient(colors)) {
        (true, Some(g)) => format!("\n      backgroundImage: {{\n        theme: '{g}',\n      }},"),
        _ => String::new(),
    };

    format!(
        "module.exports = {{
  theme: {{
    extend: {{
      colors: {{
{colors}
      }},
      fontFamily: {{
        main: ['{font}'],
      }},
      fontWeight: {{
        main: '{weight}',
      }},
      fontSize: {{
        base: '{size}',
      }},
      spacing: {{
        base: '{spacing}',
      }},
      borderRadius: {{
        DEFAULT: '{radius}',
      }},{background_image}
    }},
  }},
}}",
        colors = color_lines.join("\n"),
        font = style.primary_font(),
        weight = style.font_weight,
        size = style.font_size_px(),
        spacing = style.spacing_px(),
        radius = style.radius_px(),
    )
}

/// Render `colors` and `style` as theme code in `format`.
///
/// `colors` is normally a full palette; missing slots use
/// [`FALLBACK_COLORS`] (and the extra slot is simply left out).
#[must_use]
pub fn render(format: ExportFormat, colors: &[Color], style: &StyleConfig) -> String {
    match format {
        ExportFormat::Css => render_css(colors, style),
        ExportFormat::Scss => render_scss(colors, style),
        ExportFormat::Tailwind => render_tailwind(colors, style),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
