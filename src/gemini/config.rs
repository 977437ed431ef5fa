//! Google Gemini configuration

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, StylerError};

/// Available Gemini models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GeminiModel {
    /// Gemini 3 Flash preview
    #[default]
    #[serde(rename = "gemini-3-flash-preview")]
    Gemini3FlashPreview,
    /// Gemini 2.5 Flash - Faster and more cost-effective
    #[serde(rename = "gemini-2.5-flash")]
    Gemini25Flash,
    /// Gemini 2.5 Pro - Most capable model
    #[serde(rename = "gemini-2.5-pro")]
    Gemini25Pro,
}

impl GeminiModel {
    /// Get the model name for API requests
    pub fn model_name(&self) -> &'static str {
        match self {
            GeminiModel::Gemini3FlashPreview => "gemini-3-flash-preview",
            GeminiModel::Gemini25Flash => "gemini-2.5-flash",
            GeminiModel::Gemini25Pro => "gemini-2.5-pro",
        }
    }

    /// Get the endpoint path for the model
    pub fn endpoint(&self) -> String {
        format!("models/{}:generateContent", self.model_name())
    }

    /// Parse model string to GeminiModel enum
    pub fn parse(model_str: &str) -> Result<Self> {
        match model_str {
            "gemini-3-flash-preview" => Ok(GeminiModel::Gemini3FlashPreview),
            "gemini-2.5-flash" => Ok(GeminiModel::Gemini25Flash),
            "gemini-2.5-pro" => Ok(GeminiModel::Gemini25Pro),
            _ => Err(StylerError::ConfigurationError(format!(
                "Unknown Gemini model: {}. Supported models: gemini-3-flash-preview, gemini-2.5-flash, gemini-2.5-pro",
                model_str
            ))),
        }
    }
}

impl fmt::Display for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model_name())
    }
}

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for Google AI
    pub api_key: String,
    /// Model to use
    pub model: GeminiModel,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// API root, without trailing slash
    pub base_url: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: GeminiModel::default(),
            timeout_seconds: 30,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Read the API key from `GEMINI_API_KEY`, then `API_KEY`
pub fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

impl GeminiConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = api_key_from_env().ok_or_else(|| {
            StylerError::ConfigurationError("GEMINI_API_KEY not set".to_string())
        })?;

        Self {
            api_key,
            ..Self::default()
        }
        .with_env_overrides()
    }

    /// Apply `GEMINI_MODEL` and `GEMINI_TIMEOUT_SECONDS` on top of `self`
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(model) = env::var("GEMINI_MODEL") {
            self.model = GeminiModel::parse(&model)?;
        }

        if let Ok(timeout) = env::var("GEMINI_TIMEOUT_SECONDS") {
            self.timeout_seconds = timeout.parse().map_err(|_| {
                StylerError::ConfigurationError("Invalid GEMINI_TIMEOUT_SECONDS".to_string())
            })?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(StylerError::ConfigurationError(
                "Gemini API key cannot be empty".to_string(),
            ));
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > 300 {
            return Err(StylerError::ConfigurationError(
                "Timeout must be between 1 and 300 seconds".to_string(),
            ));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(StylerError::ConfigurationError(format!(
                "Invalid Gemini base URL: {}",
                self.base_url
            )));
        }

        Ok(())
    }

    /// Get the full URL for an endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}?key={}",
            self.base_url.trim_end_matches('/'),
            endpoint,
            self.api_key
        )
    }
}
