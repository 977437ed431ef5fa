//! Google Gemini HTTP client implementation

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::errors::{Result, StylerError};
use crate::gemini::{GeminiConfig, GenerateContentRequest, GenerateContentResponse};

/// Google Gemini HTTP client
pub struct GeminiClient {
    config: GeminiConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(config: GeminiConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("unistyle/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StylerError::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        info!("Gemini client initialized with model: {}", config.model);

        Ok(Self { config, client })
    }

    /// Send one generateContent request. No retries.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let endpoint = self.config.model.endpoint();
        let url = self.config.endpoint_url(&endpoint);

        debug!("Making Gemini API request to model {}", self.config.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| StylerError::NetworkError(format!("Request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Gemini API error {}: {}", status, error_text);
            return Err(StylerError::ExternalApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let gemini_response: GenerateContentResponse = response.json().await.map_err(|e| {
            StylerError::SerializationError(format!("Failed to parse response: {}", e))
        })?;

        if gemini_response.is_blocked() {
            warn!("Gemini response was blocked by safety filters");
            return Err(StylerError::ExternalApiError(
                "Response blocked by Gemini safety filters".to_string(),
            ));
        }

        Ok(gemini_response)
    }

    /// Send a plain text prompt and return the first candidate's text
    pub async fn generate_text(&self, prompt: &str) -> Result<Option<String>> {
        let request = GenerateContentRequest::new_text(prompt)
            .with_generation_config(Default::default());
        let response = self.generate_content(&request).await?;
        Ok(response.get_text())
    }

    /// Get the current model being used
    pub fn get_model(&self) -> &str {
        self.config.model.model_name()
    }

    /// Get configuration
    pub fn get_config(&self) -> &GeminiConfig {
        &self.config
    }
}
