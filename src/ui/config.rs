//! # Configuration Persistence
//!
//! User settings stored in `~/.config/glyphref/config.json`. Only the theme
//! choice survives a session; query, tab, and collapse state are rebuilt
//! fresh on every start.
//!
//! The persisted value is a theme *name*, not a theme; [`Config::resolve_theme`]
//! validates it against the built-in table so a stale or hand-edited name
//! degrades to the default instead of failing startup.

use crate::ui::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

/// Persisted user settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Selected theme name; `None` means the built-in default. Validated on
    /// resolve, not on load, so an unknown name still round-trips.
    pub theme: Option<String>,
}

impl Config {
    /// Load the user's config, falling back to defaults when there is no
    /// config directory or no usable file.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::read(&path).unwrap_or_default(),
            None => Self::default(),
        }
    }

    /// Persist the current settings to the platform config directory.
    pub fn store(&self) -> Result<()> {
        let path = Self::config_path().context("Could not determine config directory")?;
        self.write(&path)
    }

    /// Read settings from `path`. A missing file yields the defaults; an
    /// unreadable or malformed file is an error.
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// The persisted theme, validated against the built-in table. An unknown
    /// name warns once and falls back to the default.
    pub fn resolve_theme(&self) -> &'static Theme {
        match &self.theme {
            None => Theme::default_theme(),
            Some(name) => Theme::by_name(name).unwrap_or_else(|| {
                eprintln!(
                    "Warning: unknown theme {:?} in config, using {}",
                    name,
                    Theme::default_theme().name
                );
                Theme::default_theme()
            }),
        }
    }

    /// Record `theme` as the persisted choice.
    pub fn set_theme(&mut self, theme: &Theme) {
        self.theme = Some(theme.name.to_string());
    }

    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "glyphref")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_resolves_to_default_theme() {
        let config = Config::default();
        assert!(config.theme.is_none());
        assert_eq!(config.resolve_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_known_theme_name_resolves() {
        let mut config = Config::default();
        config.set_theme(Theme::by_name("dracula").expect("built-in"));
        assert_eq!(config.theme.as_deref(), Some("Dracula"));
        assert_eq!(config.resolve_theme().name, "Dracula");
    }

    #[test]
    fn test_unknown_theme_name_falls_back_to_default() {
        let config = Config {
            theme: Some("Solarized Sepia".to_string()),
        };
        assert_eq!(config.resolve_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_write_read_roundtrip() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("subdir").join(CONFIG_FILE);

        let mut config = Config::default();
        config.set_theme(Theme::by_name("Nord").expect("built-in"));

        config.write(&config_path).expect("write");
        let loaded = Config::read(&config_path).expect("read");
        assert_eq!(loaded.theme, config.theme);
    }

    #[test]
    fn test_unknown_theme_name_survives_roundtrip() {
        // Validation happens on resolve; the stored name is not rewritten.
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);

        let config = Config {
            theme: Some("no-such-theme".to_string()),
        };
        config.write(&config_path).expect("write");

        let loaded = Config::read(&config_path).expect("read");
        assert_eq!(loaded.theme.as_deref(), Some("no-such-theme"));
        assert_eq!(loaded.resolve_theme().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_read_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config_path = temp_dir.path().join("does_not_exist.json");

        let loaded = Config::read(&config_path).expect("read");
        assert!(loaded.theme.is_none());
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert!(config.theme.is_none());
    }

    #[test]
    fn test_deny_unknown_fields() {
        let json = r#"{"theme": "Nord", "unknown_field": true}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err(), "should reject unknown fields");
    }
}
