//! Swatch reporting
//!
//! Turns engine results into something a human or a script can read:
//! ANSI true-color swatch lines for the terminal, serde-backed JSON for
//! everything else. The label printed on each swatch takes its color
//! from the engine's contrast selector, so it stays legible on any
//! background.

use color_engine::{distance, legible_text_color, CatalogEntry, Rgb};
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Map a CLI string to a format. Unknown names are rejected by the
    /// caller, not defaulted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            s if s.eq_ignore_ascii_case("text") => Some(OutputFormat::Text),
            s if s.eq_ignore_ascii_case("json") => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// One reported swatch: a color plus whatever context the command has
/// for it (catalog name, distance from the query color).
#[derive(Debug, Clone, Serialize)]
pub struct Swatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub hex: String,
    pub rgb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip)]
    color: Rgb,
}

impl Swatch {
    /// A bare color swatch, no catalog context.
    pub fn from_color(color: Rgb) -> Self {
        Self {
            name: None,
            hex: color.to_hex(),
            rgb: format!("rgb({}, {}, {})", color.r, color.g, color.b),
            distance: None,
            color,
        }
    }

    /// A swatch for a catalog entry.
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            name: Some(entry.name().to_string()),
            ..Self::from_color(entry.rgb())
        }
    }

    /// A catalog entry ranked against a query color.
    pub fn from_ranked_entry(entry: &CatalogEntry, query: Rgb) -> Self {
        Self {
            distance: Some(distance(query, entry.rgb())),
            ..Self::from_entry(entry)
        }
    }

    /// The underlying color value.
    pub fn color(&self) -> Rgb {
        self.color
    }
}

/// Render swatches as terminal lines with true-color cells.
pub fn render_text(swatches: &[Swatch]) -> String {
    let name_width = swatches
        .iter()
        .filter_map(|s| s.name.as_deref())
        .map(str::len)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for s in swatches {
        out.push_str(&swatch_cell(s.color));
        if let Some(name) = &s.name {
            out.push_str(&format!("  {name:<name_width$}"));
        }
        out.push_str(&format!("  {}", s.rgb));
        if let Some(d) = s.distance {
            out.push_str(&format!("  distance {d:.1}"));
        }
        out.push('\n');
    }
    out
}

/// Render swatches as pretty-printed JSON.
pub fn render_json(swatches: &[Swatch]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(swatches)
}

/// A hex label on its own background color, foreground chosen by the
/// contrast selector.
fn swatch_cell(c: Rgb) -> String {
    let fg = legible_text_color(c);
    format!(
        "\x1b[48;2;{};{};{}m\x1b[38;2;{};{};{}m {} \x1b[0m",
        c.r,
        c.g,
        c.b,
        fg.r,
        fg.g,
        fg.b,
        c.to_hex()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_swatch_from_entry_carries_name_and_forms() {
        let entry = CatalogEntry::new("Teal", Rgb::new(0, 128, 128));
        let swatch = Swatch::from_entry(&entry);
        assert_eq!(swatch.name.as_deref(), Some("Teal"));
        assert_eq!(swatch.hex, "#008080");
        assert_eq!(swatch.rgb, "rgb(0, 128, 128)");
        assert_eq!(swatch.distance, None);
    }

    #[test]
    fn test_ranked_swatch_distance() {
        let entry = CatalogEntry::new("Black", Rgb::BLACK);
        let swatch = Swatch::from_ranked_entry(&entry, Rgb::new(3, 4, 0));
        assert_eq!(swatch.distance, Some(5.0));
    }

    #[test]
    fn test_text_render_uses_legible_label_color() {
        let light = render_text(&[Swatch::from_color(Rgb::WHITE)]);
        // black foreground on a white cell
        assert!(light.contains("\x1b[38;2;0;0;0m"));

        let dark = render_text(&[Swatch::from_color(Rgb::BLACK)]);
        assert!(dark.contains("\x1b[38;2;255;255;255m"));
    }

    #[test]
    fn test_json_render_omits_absent_fields() {
        let json = render_json(&[Swatch::from_color(Rgb::new(1, 2, 3))]).unwrap();
        assert!(json.contains("\"hex\": \"#010203\""));
        assert!(!json.contains("\"name\""));
        assert!(!json.contains("\"distance\""));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("TEXT"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}
