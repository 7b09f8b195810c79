//! Configuration loader plus strongly typed settings structures.
//!
//! The default `config.toml` is embedded at compile time and extracted into
//! the data directory on first run; after that the user's copy is read.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "TABCALC_DIR";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for input before redrawing
    pub poll_timeout_ms: u64,
    pub show_border: bool,
    pub border_color: String,
    pub tab_active_color: String,
    pub tab_inactive_color: String,
    pub digit_color: String,
    pub operator_color: String,
    pub action_color: String,
    pub focus_color: String,
    pub alert_border_color: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: 16, // ~60 FPS
            show_border: true,
            border_color: "#808080".to_string(),
            tab_active_color: "#FFFF00".to_string(),
            tab_inactive_color: "#808080".to_string(),
            digit_color: "#FFFFFF".to_string(),
            operator_color: "#00BFFF".to_string(),
            action_color: "#FFA500".to_string(),
            focus_color: "#FFFF00".to_string(),
            alert_border_color: "#FF5555".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Section id shown at startup (first section if unset or unknown)
    #[serde(default)]
    pub default_section: Option<String>,
    #[serde(default = "default_sections")]
    pub sections: Vec<SectionConfig>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_section: Some("calculator".to_string()),
            sections: default_sections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub kind: SectionKind,
    /// Panel text for `text` sections
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    #[default]
    Text,
    Calculator,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Copy the result to the clipboard when the display is clicked
    pub copy_on_display_click: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            copy_on_display_click: true,
        }
    }
}

fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig {
            id: "home".to_string(),
            title: "Home".to_string(),
            kind: SectionKind::Text,
            body: "Welcome!".to_string(),
        },
        SectionConfig {
            id: "calculator".to_string(),
            title: "Calculator".to_string(),
            kind: SectionKind::Calculator,
            body: String::new(),
        },
    ]
}

impl Config {
    /// Load from the data directory, extracting defaults on first run
    pub fn load() -> Result<Self> {
        Self::extract_defaults()?;
        let config_path = Self::config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load config from a custom file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let config = Self::parse(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse TOML text and repair anything the navigator can't work with
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.validate();
        Ok(config)
    }

    /// The embedded default configuration
    #[cfg(test)]
    pub fn embedded_default() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG).context("Failed to parse embedded default config")
    }

    fn validate(&mut self) {
        if self.navigation.sections.is_empty() {
            tracing::warn!("No navigation sections configured, using built-in sections");
            self.navigation.sections = default_sections();
        }

        let mut seen = std::collections::HashSet::new();
        for section in &self.navigation.sections {
            if !seen.insert(section.id.as_str()) {
                tracing::warn!("Duplicate section id '{}': only the first is reachable by id", section.id);
            }
        }

        if let Some(default) = &self.navigation.default_section {
            if !self.navigation.sections.iter().any(|s| &s.id == default) {
                tracing::warn!("default_section '{}' not found, starting on first section", default);
                self.navigation.default_section = None;
            }
        }

        if self.ui.poll_timeout_ms == 0 {
            tracing::warn!("poll_timeout_ms must be positive, using 16");
            self.ui.poll_timeout_ms = 16;
        }
    }

    /// Write the embedded config if the user has none yet (idempotent)
    fn extract_defaults() -> Result<()> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            return Ok(());
        }
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, DEFAULT_CONFIG).context("Failed to write config.toml")?;
        tracing::info!("Extracted default config to {:?}", config_path);
        Ok(())
    }

    /// Get the base data directory (~/.tabcalc/)
    /// Can be overridden with the TABCALC_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".tabcalc"))
    }

    /// Returns: ~/.tabcalc/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Returns: ~/.tabcalc/tabcalc.log
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("tabcalc.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config = Config::embedded_default().expect("embedded config parses");
        let ids: Vec<&str> = config
            .navigation
            .sections
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, vec!["home", "calculator", "about"]);
        assert_eq!(config.navigation.default_section.as_deref(), Some("calculator"));
        assert_eq!(config.navigation.sections[1].kind, SectionKind::Calculator);
        assert!(config.calculator.copy_on_display_click);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.ui.poll_timeout_ms, 16);
        assert!(!config.navigation.sections.is_empty());
        assert_eq!(config.ui.tab_active_color, "#FFFF00");
    }

    #[test]
    fn test_empty_sections_fall_back() {
        let config = Config::parse("[navigation]\nsections = []\n").unwrap();
        assert_eq!(config.navigation.sections.len(), 2);
    }

    #[test]
    fn test_unknown_default_section_cleared() {
        let toml = r#"
[navigation]
default_section = "nowhere"

[[navigation.sections]]
id = "only"
title = "Only"
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.navigation.default_section, None);
        assert_eq!(config.navigation.sections[0].kind, SectionKind::Text);
    }

    #[test]
    fn test_partial_ui_section() {
        let config = Config::parse("[ui]\nfocus_color = \"#00FF00\"\npoll_timeout_ms = 0\n").unwrap();
        assert_eq!(config.ui.focus_color, "#00FF00");
        assert_eq!(config.ui.border_color, "#808080");
        assert_eq!(config.ui.poll_timeout_ms, 16);
    }

    #[test]
    fn test_bad_section_kind_rejected() {
        let toml = r#"
[[navigation.sections]]
id = "x"
title = "X"
kind = "spreadsheet"
"#;
        assert!(Config::parse(toml).is_err());
    }
}
