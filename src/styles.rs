//! Theme resolver for the focus lists screen
//!
//! Maps a light/dark color scheme to the fixed palette and the layout
//! geometry of the screen. Nothing here is global: the resolved
//! [`ScreenStyles`] is built once per scheme change and passed down
//! explicitly to everything that renders.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Environment variable set by many terminals as `foreground;background`
const COLORFGBG_VAR: &str = "COLORFGBG";

/// Color scheme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    /// Parse a user-facing scheme name.
    ///
    /// Returns `None` for "system" and for anything unrecognised, which
    /// callers treat as "ask the environment".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(ColorScheme::Dark),
            "light" => Some(ColorScheme::Light),
            _ => None,
        }
    }

    /// Query the terminal's color scheme preference, defaulting to dark
    pub fn detect() -> Self {
        std::env::var(COLORFGBG_VAR)
            .ok()
            .and_then(|value| Self::from_colorfgbg(&value))
            .unwrap_or_default()
    }

    /// Interpret a `COLORFGBG` value (e.g. "15;0" or "0;default;15")
    ///
    /// The last field is the background palette index. White backgrounds
    /// (7 or 15) mean a light terminal.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg = value.rsplit(';').next()?.trim();
        let index: u8 = bg.parse().ok()?;
        Some(match index {
            7 | 15 => ColorScheme::Light,
            _ => ColorScheme::Dark,
        })
    }

    /// The opposite scheme
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown color scheme: {}", s.trim()))
    }
}

/// Semantic color roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub focused_border: Color,
}

impl Palette {
    pub const fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self {
                background: Color::Rgb(10, 12, 14),
                text: Color::Rgb(235, 237, 239),
                border: Color::Rgb(0, 0, 255),
                focused_border: Color::Rgb(255, 0, 0),
            },
            ColorScheme::Light => Self {
                background: Color::Rgb(235, 237, 239),
                text: Color::Rgb(10, 12, 14),
                border: Color::Rgb(0, 0, 200),
                focused_border: Color::Rgb(200, 0, 0),
            },
        }
    }
}

/// Outer container: padding around and gap between the three columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerStyle {
    pub padding: u16,
    pub gap: u16,
    pub background: Style,
}

/// Per-column layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnStyle {
    /// Lines reserved for the column header text
    pub header_height: u16,
}

/// Geometry shared by every row box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStyle {
    /// Total lines, borders included (minimum 3)
    pub height: u16,
    /// Style of the row title
    pub title: Style,
}

/// Fully resolved style configuration for one color scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenStyles {
    pub scheme: ColorScheme,
    pub palette: Palette,
    pub container: ContainerStyle,
    pub column: ColumnStyle,
    pub column_header_text: Style,
    pub item: ItemStyle,
    /// Border style of a row without focus
    pub item_unfocused: Style,
    /// Border style of the focused row
    pub item_focused: Style,
    /// Blank lines between consecutive rows
    pub content_gap: u16,
}

impl ScreenStyles {
    /// Resolve styles for an optional scheme, querying the terminal when absent
    pub fn resolve(scheme: Option<ColorScheme>) -> Self {
        Self::for_scheme(scheme.unwrap_or_else(ColorScheme::detect))
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        let palette = Palette::for_scheme(scheme);
        let text = Style::default().fg(palette.text);

        Self {
            scheme,
            palette,
            container: ContainerStyle {
                padding: 1,
                gap: 2,
                background: Style::default().bg(palette.background),
            },
            column: ColumnStyle { header_height: 3 },
            column_header_text: text,
            item: ItemStyle {
                height: 3,
                title: text,
            },
            item_unfocused: Style::default().fg(palette.border),
            item_focused: Style::default().fg(palette.focused_border),
            content_gap: 1,
        }
    }

    /// Border style for a row in the given focus state
    pub fn item_border(&self, focused: bool) -> Style {
        if focused {
            self.item_focused
        } else {
            self.item_unfocused
        }
    }

    /// Lines one row occupies including the gap after it
    pub fn row_stride(&self) -> u16 {
        self.item.height.max(3) + self.content_gap
    }

    // === Footer ===

    pub fn footer_label_style(&self) -> Style {
        Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default()
            .fg(self.palette.focused_border)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_separator_style(&self) -> Style {
        Style::default().fg(self.palette.border)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme_parse() {
        assert_eq!(ColorScheme::parse("dark"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::parse(" Light "), Some(ColorScheme::Light));
        assert_eq!(ColorScheme::parse("system"), None);
        assert_eq!(ColorScheme::parse("solarized"), None);
        assert_eq!(
            "nope".parse::<ColorScheme>(),
            Err("Unknown color scheme: nope".to_string())
        );
    }

    #[test]
    fn test_colorfgbg_detection() {
        assert_eq!(ColorScheme::from_colorfgbg("15;0"), Some(ColorScheme::Dark));
        assert_eq!(ColorScheme::from_colorfgbg("0;15"), Some(ColorScheme::Light));
        assert_eq!(
            ColorScheme::from_colorfgbg("0;default;7"),
            Some(ColorScheme::Light)
        );
        assert_eq!(ColorScheme::from_colorfgbg("garbage"), None);
        assert_eq!(ColorScheme::from_colorfgbg(""), None);
    }

    #[test]
    fn test_focused_border_differs_for_every_scheme() {
        for scheme in [ColorScheme::Dark, ColorScheme::Light] {
            let styles = ScreenStyles::for_scheme(scheme);
            assert_ne!(styles.item_focused.fg, styles.item_unfocused.fg);
            assert_eq!(styles.item_border(true), styles.item_focused);
            assert_eq!(styles.item_border(false), styles.item_unfocused);
        }
    }

    #[test]
    fn test_dark_palette_values() {
        let styles = ScreenStyles::resolve(Some(ColorScheme::Dark));
        assert_eq!(styles.container.background.bg, Some(Color::Rgb(10, 12, 14)));
        assert_eq!(styles.item_unfocused.fg, Some(Color::Rgb(0, 0, 255)));
        assert_eq!(styles.item_focused.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(styles.column_header_text.fg, Some(Color::Rgb(235, 237, 239)));
    }

    #[test]
    fn test_light_palette_values() {
        let palette = Palette::for_scheme(ColorScheme::Light);
        assert_eq!(palette.background, Color::Rgb(235, 237, 239));
        assert_eq!(palette.text, Color::Rgb(10, 12, 14));
        assert_eq!(palette.border, Color::Rgb(0, 0, 200));
        assert_eq!(palette.focused_border, Color::Rgb(200, 0, 0));
    }

    #[test]
    fn test_toggle_and_stride() {
        assert_eq!(ColorScheme::Dark.toggled(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggled().name(), "dark");
        assert_eq!(ScreenStyles::for_scheme(ColorScheme::Dark).row_stride(), 4);
    }
}
