//! Persistent user configuration

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::clipboard::TextColor;
use crate::errors::{Result, StylerError};
use crate::gemini::{api_key_from_env, GeminiConfig, GeminiModel, SuggestionService};
use crate::styles::DEFAULT_PLACEHOLDER;

/// Generative-text settings stored on disk. The API key is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    pub model: GeminiModel,
    pub timeout_seconds: u64,
    pub base_url: Option<String>,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: GeminiModel::default(),
            timeout_seconds: 30,
            base_url: None,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Style used by `convert` when none is given
    pub default_style: String,

    /// Color used when copying
    pub preview_color: TextColor,

    /// Text rendered by `preview` when the input is empty
    pub preview_placeholder: String,

    pub gemini: GeminiSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_style: "bold".to_string(),
            preview_color: TextColor::WHITE,
            preview_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            gemini: GeminiSettings::default(),
        }
    }
}

impl AppConfig {
    /// Configuration directory
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "unistyle", "unistyle").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Gemini client settings, with the key and overrides taken from the
    /// environment. `None` when no API key is set; overrides are only read
    /// once a key is present.
    pub fn gemini_config(&self) -> Result<Option<GeminiConfig>> {
        let Some(api_key) = api_key_from_env() else {
            return Ok(None);
        };

        let mut config = GeminiConfig {
            api_key,
            model: self.gemini.model,
            timeout_seconds: self.gemini.timeout_seconds,
            ..GeminiConfig::default()
        };
        if let Some(base_url) = &self.gemini.base_url {
            config.base_url.clone_from(base_url);
        }
        config.with_env_overrides().map(Some)
    }

    /// Suggestion service for these settings. Never fails: bad settings are
    /// logged and the service answers with its fixed error message.
    pub fn suggestion_service(&self) -> SuggestionService {
        match self.gemini_config() {
            Ok(Some(config)) => SuggestionService::new(config),
            Ok(None) => SuggestionService::unconfigured(),
            Err(e) => {
                error!("Invalid Gemini settings: {}", e);
                SuggestionService::invalid()
            }
        }
    }
}

/// Load configuration from the default location, or defaults if absent
pub fn load_config() -> Result<AppConfig> {
    let path = AppConfig::config_path().ok_or_else(|| {
        StylerError::ConfigurationError("Could not determine config path".to_string())
    })?;
    load_config_from(&path)
}

/// Load configuration from `path`; a missing file yields defaults
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| StylerError::ConfigurationError(format!("Failed to read config: {e}")))?;

    // TOML by extension, JSON otherwise
    if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&content)
            .map_err(|e| StylerError::ConfigurationError(format!("Invalid TOML config: {e}")))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| StylerError::ConfigurationError(format!("Invalid JSON config: {e}")))
    }
}

/// Save configuration to the default location
pub fn save_config(config: &AppConfig) -> Result<()> {
    let path = AppConfig::config_path().ok_or_else(|| {
        StylerError::ConfigurationError("Could not determine config path".to_string())
    })?;
    save_config_to(&path, config)
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            StylerError::ConfigurationError(format!("Failed to create config dir: {e}"))
        })?;
    }

    let content = if path.extension().is_some_and(|e| e == "toml") {
        toml::to_string_pretty(config)
            .map_err(|e| StylerError::SerializationError(format!("Failed to serialize config: {e}")))?
    } else {
        serde_json::to_string_pretty(config)
            .map_err(|e| StylerError::SerializationError(format!("Failed to serialize config: {e}")))?
    };

    fs::write(path, content)
        .map_err(|e| StylerError::ConfigurationError(format!("Failed to write config: {e}")))?;

    Ok(())
}
