//! Theme system for the picker
//!
//! Provides:
//! - Theme struct with all picker colors
//! - Built-in presets (teal, nord, gruvbox)
//! - Hex color parsing
//! - Per-color overrides from config

use ratatui::style::Color;
use thiserror::Error;

use crate::config::ColorOverrides;

/// Theme colors for the UI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Header and summary labels
    pub accent: Color,
    /// Border of an unselected card
    pub card_border: Color,
    /// Card background when selected
    pub selection_bg: Color,
    /// Card text when selected
    pub selection_fg: Color,
    /// Card border when selected
    pub selection_border: Color,
    /// Keyboard focus marker
    pub focus: Color,
    /// Entry names, hints
    pub dimmed: Color,
    /// Favorite indicator
    pub favorite: Color,
    /// Dialog background
    pub dialog_bg: Color,
    /// Dialog border and highlighted button
    pub dialog_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::teal()
    }
}

impl Theme {
    /// Teal cards, gold/red selection
    pub fn teal() -> Self {
        Self {
            background: Color::Rgb(16, 24, 32),       // #101820
            foreground: Color::Rgb(240, 244, 248),    // #f0f4f8
            accent: Color::Rgb(255, 255, 255),        // #ffffff
            card_border: Color::Rgb(0, 128, 128),     // #008080 (teal)
            selection_bg: Color::Rgb(255, 215, 0),    // #ffd700 (gold)
            selection_fg: Color::Rgb(51, 51, 51),     // #333333
            selection_border: Color::Rgb(255, 0, 0),  // #ff0000 (red)
            focus: Color::Rgb(0, 206, 209),           // #00ced1
            dimmed: Color::Rgb(204, 204, 204),        // #cccccc
            favorite: Color::Rgb(239, 68, 68),        // #ef4444
            dialog_bg: Color::Rgb(30, 41, 59),        // #1e293b
            dialog_border: Color::Rgb(0, 128, 128),   // #008080
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),       // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),    // #eceff4 (nord6)
            accent: Color::Rgb(136, 192, 208),        // #88c0d0 (nord8)
            card_border: Color::Rgb(76, 86, 106),     // #4c566a (nord3)
            selection_bg: Color::Rgb(235, 203, 139),  // #ebcb8b (nord13)
            selection_fg: Color::Rgb(46, 52, 64),     // #2e3440 (nord0)
            selection_border: Color::Rgb(191, 97, 106), // #bf616a (nord11)
            focus: Color::Rgb(143, 188, 187),         // #8fbcbb (nord7)
            dimmed: Color::Rgb(216, 222, 233),        // #d8dee9 (nord4)
            favorite: Color::Rgb(191, 97, 106),       // #bf616a (nord11)
            dialog_bg: Color::Rgb(59, 66, 82),        // #3b4252 (nord1)
            dialog_border: Color::Rgb(136, 192, 208), // #88c0d0 (nord8)
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),       // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178),    // #ebdbb2 (fg)
            accent: Color::Rgb(250, 189, 47),         // #fabd2f (bright yellow)
            card_border: Color::Rgb(104, 157, 106),   // #689d6a (aqua)
            selection_bg: Color::Rgb(215, 153, 33),   // #d79921 (yellow)
            selection_fg: Color::Rgb(40, 40, 40),     // #282828 (bg)
            selection_border: Color::Rgb(204, 36, 29), // #cc241d (red)
            focus: Color::Rgb(142, 192, 124),         // #8ec07c (bright aqua)
            dimmed: Color::Rgb(168, 153, 132),        // #a89984 (gray)
            favorite: Color::Rgb(251, 73, 52),        // #fb4934 (bright red)
            dialog_bg: Color::Rgb(60, 56, 54),        // #3c3836 (bg1)
            dialog_border: Color::Rgb(250, 189, 47),  // #fabd2f
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "teal" | "default" => Some(Self::teal()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }

    /// Apply hex overrides from config on top of this theme
    pub fn with_overrides(mut self, overrides: &ColorOverrides) -> Result<Self, ColorError> {
        let slots: [(&Option<String>, &mut Color); 6] = [
            (&overrides.background, &mut self.background),
            (&overrides.foreground, &mut self.foreground),
            (&overrides.accent, &mut self.accent),
            (&overrides.card_border, &mut self.card_border),
            (&overrides.selection_bg, &mut self.selection_bg),
            (&overrides.favorite, &mut self.favorite),
        ];
        for (value, slot) in slots {
            if let Some(hex) = value {
                *slot = parse_hex_color(hex)?;
            }
        }
        Ok(self)
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, #rrggbbaa (with or without '#')
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex(s.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        // alpha is ignored in a terminal
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        n => Err(ColorError::InvalidLength(n)),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color length {0} (expected 3, 6, or 8 hex chars)")]
    InvalidLength(usize),
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("008080"), Ok(Color::Rgb(0, 128, 128)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("0f0"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_8() {
        assert_eq!(parse_hex_color("#ffd700ff"), Ok(Color::Rgb(255, 215, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex_color("#ff00"), Err(ColorError::InvalidLength(4)));
        assert!(matches!(parse_hex_color("#gg0000"), Err(ColorError::InvalidHex(_))));
        assert!(parse_hex_color("#ééé").is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Theme::from_preset("default"), Some(Theme::teal()));
        assert!(Theme::from_preset("Nord").is_some());
        assert!(Theme::from_preset("gruvbox-dark").is_some());
        assert!(Theme::from_preset("nonexistent").is_none());
    }

    #[test]
    fn test_overrides() {
        let overrides = ColorOverrides {
            accent: Some("#123456".to_string()),
            ..Default::default()
        };
        let theme = Theme::teal().with_overrides(&overrides).unwrap();
        assert_eq!(theme.accent, Color::Rgb(0x12, 0x34, 0x56));
        assert_eq!(theme.card_border, Theme::teal().card_border);

        let bad = ColorOverrides {
            favorite: Some("red".to_string()),
            ..Default::default()
        };
        assert!(Theme::teal().with_overrides(&bad).is_err());
    }
}
