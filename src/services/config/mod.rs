// Configuration service
// Loads AppConfig from TOML with built-in defaults for every section

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::color::is_valid_hex_color;
use crate::services::overrides::OverrideTable;
use crate::services::palette::PaletteOptions;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub images: ImageConfig,
    pub events: EventConfig,
    pub palette: PaletteConfig,
    /// Absent section means the built-in override table.
    pub overrides: Option<OverrideConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub base_id: String,
    pub table: String,
    pub view: Option<String>,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.airtable.com/v0".to_string(),
            base_id: String::new(),
            table: "Events".to_string(),
            view: None,
            api_key_env: "AIRTABLE_API_KEY".to_string(),
        }
    }
}

impl SourceConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("Environment variable {} is not set", self.api_key_env))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub default_logo_url: String,
    pub timeout_secs: u64,
    pub max_bytes: usize,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            default_logo_url: "https://assets.event-palette.dev/default-logo.png".to_string(),
            timeout_secs: 15,
            max_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub default_photo: String,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            default_photo: "https://assets.event-palette.dev/default-photo.jpg".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub sample_limit: usize,
    pub max_colors: usize,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        let options = PaletteOptions::default();
        Self {
            sample_limit: options.sample_limit,
            max_colors: options.max_colors,
        }
    }
}

impl PaletteConfig {
    pub fn to_options(&self) -> PaletteOptions {
        PaletteOptions {
            sample_limit: self.sample_limit.max(1),
            max_colors: self.max_colors,
            ..PaletteOptions::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    pub force_white: Vec<String>,
    pub colors: BTreeMap<String, String>,
}

impl AppConfig {
    /// Load from `path`, or from the platform config directory, or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let candidate = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.exists()),
        };

        let Some(candidate) = candidate else {
            log::info!("No configuration file found; using defaults");
            return Ok(Self::default());
        };

        let contents = std::fs::read_to_string(&candidate)
            .with_context(|| format!("Failed to read configuration file {:?}", candidate))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid configuration in {:?}", candidate))?;

        log::info!("Loaded configuration from {:?}", candidate);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents).context("Failed to parse TOML")?;
        config.validate().map_err(|err| anyhow!(err))?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "EventPalette", "event-palette")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.images.default_logo_url.trim().is_empty() {
            return Err("images.default_logo_url cannot be empty".to_string());
        }

        if self.images.timeout_secs == 0 {
            return Err("images.timeout_secs must be greater than 0".to_string());
        }

        if self.events.default_photo.trim().is_empty() {
            return Err("events.default_photo cannot be empty".to_string());
        }

        if !(1..=u8::MAX as usize).contains(&self.palette.max_colors) {
            return Err("palette.max_colors must be between 1 and 255".to_string());
        }

        if let Some(overrides) = &self.overrides {
            for (name, hex) in &overrides.colors {
                if !is_valid_hex_color(hex) {
                    return Err(format!(
                        "Override color for '{}' must be in hex format (#RRGGBB or #RGB)",
                        name
                    ));
                }
            }
        }

        Ok(())
    }

    pub fn override_table(&self) -> OverrideTable {
        match &self.overrides {
            Some(overrides) => OverrideTable::new(
                overrides.force_white.iter().cloned(),
                overrides
                    .colors
                    .iter()
                    .map(|(name, hex)| (name.clone(), hex.clone())),
            ),
            None => OverrideTable::default(),
        }
    }
}
