use crate::keymap::Keymap;
use crate::styles::ColorScheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
///
/// Read from `~/.config/scrollfocus/config.toml` when present. The file is
/// never written by the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color scheme: "dark", "light" or "system" (anything else means system)
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Event poll timeout, which is also the animated scroll step interval
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Keyboard bindings
    #[serde(default)]
    pub keymap: Keymap,
}

fn default_theme() -> String {
    "system".to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_rate_ms: default_tick_rate_ms(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or defaults if the file does not exist
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Explicit scheme, or `None` to follow the terminal
    pub fn color_scheme(&self) -> Option<ColorScheme> {
        ColorScheme::parse(&self.theme)
    }

    /// Poll interval, never shorter than 1ms
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Action, KeyBinding, KeymapPreset};
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.theme, "system");
        assert_eq!(config.color_scheme(), None);
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!temp_dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_toml("theme = \"light\"\n").unwrap();
        assert_eq!(config.color_scheme(), Some(ColorScheme::Light));
        assert_eq!(config.keymap, Keymap::default());
        assert_eq!(config.tick_rate_ms, 50);
    }

    #[test]
    fn test_unknown_theme_follows_system() {
        let config = Config::from_toml("theme = \"sepia\"\n").unwrap();
        assert_eq!(config.color_scheme(), None);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.theme = "dark".to_string();
        config.keymap.preset = KeymapPreset::Emacs;
        config.keymap.overrides.push(KeyBinding::new("x", Action::Quit));

        let parsed = Config::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
