//! Ghostty theme files and their mapping onto config overrides.
//!
//! Theme text uses the same `key = value` grammar as a config file but only the
//! seven color keys matter. Where the text comes from is the caller's business.

use crate::value::{ConfigValue, ConfigValues};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Option ids a theme controls. Applying a theme clears all of them first.
pub const THEME_COLOR_KEYS: [&str; 7] = [
    "background",
    "foreground",
    "cursor-color",
    "cursor-text",
    "selection-background",
    "selection-foreground",
    "palette",
];

/// Popular themes listed ahead of the rest.
pub const FEATURED_THEMES: [&str; 12] = [
    "Dracula",
    "Tokyo Night",
    "Catppuccin Mocha",
    "Nord",
    "Gruvbox Dark",
    "One Dark",
    "Solarized Dark",
    "Rose Pine",
    "Kanagawa",
    "Everforest Dark",
    "GitHub Dark",
    "Monokai Soda",
];

const PALETTE_SIZE: usize = 16;

static PALETTE_ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)=(.+)$").expect("PALETTE_ENTRY is a valid static regex pattern")
});

/// A color in RGB format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, or the `#rgb` shorthand.
    pub fn from_hex(text: &str) -> Option<Self> {
        let hex = text.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match hex.len() {
            6 => Some(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Some(Self::new(r * 17, g * 17, b * 17))
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Perceived brightness in `0.0..=1.0`.
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
}

/// The color keys of a theme file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: String,
    pub foreground: String,
    pub cursor_color: Option<String>,
    pub cursor_text: Option<String>,
    pub selection_background: Option<String>,
    pub selection_foreground: Option<String>,
    /// ANSI colors 0-15; empty strings are unset slots.
    pub palette: [String; PALETTE_SIZE],
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            foreground: "#ffffff".to_string(),
            cursor_color: None,
            cursor_text: None,
            selection_background: None,
            selection_foreground: None,
            palette: Default::default(),
        }
    }
}

/// A named theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
    /// The text the colors were parsed from.
    pub raw: String,
}

impl Theme {
    pub fn from_content(name: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            name: name.into(),
            colors: parse_theme_content(&raw),
            raw,
        }
    }

    pub fn kind(&self) -> ThemeKind {
        classify_theme(self)
    }

    pub fn is_featured(&self) -> bool {
        is_featured(&self.name)
    }
}

/// Light or dark, judged from the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Dark,
    Light,
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Dark => f.write_str("dark"),
            ThemeKind::Light => f.write_str("light"),
        }
    }
}

fn with_hash(value: &str) -> String {
    if value.starts_with('#') {
        value.to_string()
    } else {
        format!("#{value}")
    }
}

/// Parse theme text into its colors.
///
/// Unrecognized keys and malformed lines are ignored. Palette entries outside
/// 0-15 are dropped.
pub fn parse_theme_content(content: &str) -> ThemeColors {
    let mut colors = ThemeColors::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        match key {
            "background" => colors.background = with_hash(value),
            "foreground" => colors.foreground = with_hash(value),
            "cursor-color" => colors.cursor_color = Some(with_hash(value)),
            "cursor-text" => colors.cursor_text = Some(with_hash(value)),
            "selection-background" => colors.selection_background = Some(with_hash(value)),
            "selection-foreground" => colors.selection_foreground = Some(with_hash(value)),
            "palette" => {
                let Some(caps) = PALETTE_ENTRY.captures(value) else {
                    log::debug!("Ignoring malformed palette entry: {value}");
                    continue;
                };
                match caps[1].parse::<usize>() {
                    Ok(index) if index < PALETTE_SIZE => {
                        colors.palette[index] = with_hash(caps[2].trim());
                    }
                    _ => log::debug!("Ignoring out-of-range palette index: {}", &caps[1]),
                }
            }
            _ => {}
        }
    }

    colors
}

/// Config overrides that reproduce `theme`.
///
/// Optional colors that are unset, and empty palette slots, are left out.
pub fn theme_to_config(theme: &Theme) -> ConfigValues {
    let colors = &theme.colors;
    let mut config = ConfigValues::new();
    config.insert("background".into(), colors.background.clone().into());
    config.insert("foreground".into(), colors.foreground.clone().into());

    let optional = [
        ("cursor-color", &colors.cursor_color),
        ("cursor-text", &colors.cursor_text),
        ("selection-background", &colors.selection_background),
        ("selection-foreground", &colors.selection_foreground),
    ];
    for (key, value) in optional {
        if let Some(value) = value.as_ref().filter(|v| !v.is_empty()) {
            config.insert(key.into(), value.clone().into());
        }
    }

    let palette: Vec<String> = colors
        .palette
        .iter()
        .enumerate()
        .filter(|(_, color)| !color.is_empty())
        .map(|(index, color)| format!("{index}={color}"))
        .collect();
    if !palette.is_empty() {
        config.insert("palette".into(), ConfigValue::List(palette));
    }

    config
}

/// Classify a theme by background luminance. An unreadable background is dark.
pub fn classify_theme(theme: &Theme) -> ThemeKind {
    match Color::from_hex(&theme.colors.background) {
        Some(bg) if bg.luminance() > 0.5 => ThemeKind::Light,
        Some(_) => ThemeKind::Dark,
        None => {
            log::debug!(
                "Theme {} has unparsable background {:?}, treating as dark",
                theme.name,
                theme.colors.background
            );
            ThemeKind::Dark
        }
    }
}

pub fn is_featured(name: &str) -> bool {
    FEATURED_THEMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRACULA: &str = "\
palette = 0=#21222c
palette = 1=#ff5555
palette = 8=6272a4
palette = 16=#123456
background = 282a36
foreground = #f8f8f2
cursor-color = #f8f8f2
selection-background = #44475a
font-size = 99
";

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff8000"), Some(Color::new(255, 128, 0)));
        assert_eq!(Color::from_hex("ff8000"), Some(Color::new(255, 128, 0)));
        assert_eq!(Color::from_hex("#fff"), Some(Color::new(255, 255, 255)));
        assert_eq!(Color::from_hex("#zzzzzz"), None);
        assert_eq!(Color::from_hex("red"), None);
        assert_eq!(Color::new(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn test_parse_theme_content() {
        let colors = parse_theme_content(DRACULA);
        assert_eq!(colors.background, "#282a36");
        assert_eq!(colors.foreground, "#f8f8f2");
        assert_eq!(colors.cursor_color.as_deref(), Some("#f8f8f2"));
        assert_eq!(colors.cursor_text, None);
        assert_eq!(colors.palette[0], "#21222c");
        assert_eq!(colors.palette[8], "#6272a4");
        assert_eq!(colors.palette[2], "");
    }

    #[test]
    fn test_defaults_when_missing() {
        let colors = parse_theme_content("# nothing here\n");
        assert_eq!(colors.background, "#000000");
        assert_eq!(colors.foreground, "#ffffff");
        assert!(colors.palette.iter().all(String::is_empty));
    }

    #[test]
    fn test_out_of_range_palette_ignored() {
        let colors = parse_theme_content("palette = 16=#ffffff\npalette = -1=#ffffff");
        assert!(colors.palette.iter().all(String::is_empty));
    }

    #[test]
    fn test_theme_to_config() {
        let theme = Theme::from_content("Dracula", DRACULA);
        let config = theme_to_config(&theme);
        assert_eq!(config["background"], ConfigValue::Text("#282a36".into()));
        assert_eq!(config["cursor-color"], ConfigValue::Text("#f8f8f2".into()));
        assert!(!config.contains_key("cursor-text"));
        assert!(!config.contains_key("font-size"));
        assert_eq!(
            config["palette"],
            ConfigValue::List(vec![
                "0=#21222c".into(),
                "1=#ff5555".into(),
                "8=#6272a4".into()
            ])
        );
    }

    #[test]
    fn test_classify() {
        let dark = Theme::from_content("Black", "background = #000000");
        let light = Theme::from_content("White", "background = #ffffff");
        let broken = Theme::from_content("Broken", "background = nope");
        assert_eq!(classify_theme(&dark), ThemeKind::Dark);
        assert_eq!(classify_theme(&light), ThemeKind::Light);
        assert_eq!(broken.kind(), ThemeKind::Dark);
    }

    #[test]
    fn test_featured() {
        assert!(is_featured("Dracula"));
        assert!(!is_featured("dracula"));
        assert!(Theme::from_content("Nord", "").is_featured());
    }
}
