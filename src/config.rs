use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, EmojiEntry};
use crate::ui::Theme;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub behavior: BehaviorConfig,
    /// Replaces the built-in catalog when non-empty
    pub catalog: Vec<EmojiEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Preset name: "teal", "nord", "gruvbox"
    pub theme: String,
    /// Indicator shown on favorited cards
    pub favorite_glyph: String,
    /// Indicator shown on the other cards
    pub unfavorite_glyph: String,
    /// Title on the outer border
    pub title: String,
    pub colors: ColorOverrides,
}

/// Optional hex colors layered over the preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub accent: Option<String>,
    pub card_border: Option<String>,
    pub selection_bg: Option<String>,
    pub favorite: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Show a dialog after a favorite is added or removed
    pub show_notices: bool,
    /// Index of the card focused at startup
    pub start_focus: usize,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "teal".to_string(),
            favorite_glyph: "❤️".to_string(),
            unfavorite_glyph: "🤍".to_string(),
            title: " emoji-fav ".to_string(),
            colors: ColorOverrides::default(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            show_notices: true,
            start_focus: 0,
        }
    }
}

impl Config {
    /// Default config location (`$XDG_CONFIG_HOME/emoji-fav/config.toml`)
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("emoji-fav")
            .join("config.toml")
    }

    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Resolve the catalog: custom entries if configured, built-ins otherwise
    pub fn resolve_catalog(&self) -> Result<Catalog> {
        if self.catalog.is_empty() {
            return Ok(Catalog::builtin());
        }
        Catalog::new(self.catalog.clone()).context("Invalid [[catalog]] in config")
    }

    /// Resolve theme preset plus color overrides
    pub fn resolve_theme(&self) -> Result<Theme> {
        let base = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!("Unknown theme '{}', using default", self.appearance.theme);
            Theme::default()
        });
        base.with_overrides(&self.appearance.colors)
            .context("Invalid color in [appearance.colors]")
    }
}
