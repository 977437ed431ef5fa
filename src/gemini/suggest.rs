//! Rewrite and suggestion tasks on top of the Gemini client.
//!
//! [`SuggestionService::suggest`] always returns a displayable string: either
//! the model's answer or one of the fixed messages below.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, error};

use crate::errors::{Result, StylerError};
use crate::gemini::{GeminiClient, GeminiConfig};

pub const MISSING_KEY_MESSAGE: &str = "Please configure your API Key to use AI features.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "No suggestions generated.";
pub const ERROR_MESSAGE: &str = "Error generating suggestions. Please try again later.";

/// What to ask the model for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionTask {
    Rewrite,
    Title,
    Description,
    Tags,
}

impl SuggestionTask {
    pub const ALL: [SuggestionTask; 4] = [Self::Rewrite, Self::Title, Self::Description, Self::Tags];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rewrite => "rewrite",
            Self::Title => "title",
            Self::Description => "desc",
            Self::Tags => "tags",
        }
    }

    /// Prompt sent to the model for `input`
    pub fn prompt(&self, input: &str) -> String {
        match self {
            Self::Title => format!(
                "Generate 5 catchy, high-CTR YouTube video titles based on this topic or text. \
                 Keep them under 60 characters if possible. Use emojis sparingly. Text: \"{input}\""
            ),
            Self::Description => format!(
                "Write a compelling YouTube video description (first 3 lines) including keywords \
                 for SEO based on: \"{input}\". Focus on the hook."
            ),
            Self::Tags => format!(
                "Generate a comma-separated list of 15 high-ranking YouTube tags for: \"{input}\". \
                 Return ONLY the tags, separated by commas."
            ),
            Self::Rewrite => format!(
                "Rewrite the following text to be more engaging, witty, and suitable for a YouTube \
                 community post or comment. Add relevant emojis. Text: \"{input}\""
            ),
        }
    }
}

impl fmt::Display for SuggestionTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionTask {
    type Err = StylerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rewrite" => Ok(Self::Rewrite),
            "title" | "titles" => Ok(Self::Title),
            "desc" | "description" => Ok(Self::Description),
            "tags" | "tag" => Ok(Self::Tags),
            other => Err(StylerError::ConfigurationError(format!(
                "Unknown suggestion task: {other}. Expected rewrite, title, desc or tags"
            ))),
        }
    }
}

enum Backend {
    /// No API key
    Missing,
    /// A key is present but the client settings were rejected
    Invalid,
    Ready(GeminiClient),
}

/// Generative-text assistant that never fails past its own boundary
pub struct SuggestionService {
    backend: Backend,
}

impl SuggestionService {
    /// Service without a credential; every call returns [`MISSING_KEY_MESSAGE`]
    pub fn unconfigured() -> Self {
        Self {
            backend: Backend::Missing,
        }
    }

    /// Service whose settings could not be used; every call returns [`ERROR_MESSAGE`]
    pub fn invalid() -> Self {
        Self {
            backend: Backend::Invalid,
        }
    }

    /// Build from a configuration. An empty API key yields an unconfigured
    /// service; settings the client rejects are logged and yield an invalid one.
    pub fn new(config: GeminiConfig) -> Self {
        if config.api_key.is_empty() {
            return Self::unconfigured();
        }
        match GeminiClient::new(config) {
            Ok(client) => Self {
                backend: Backend::Ready(client),
            },
            Err(e) => {
                error!("Invalid Gemini settings: {}", e);
                Self::invalid()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.backend, Backend::Ready(_))
    }

    /// Ask the model to perform `task` on `input`
    pub async fn suggest(&self, input: &str, task: SuggestionTask) -> String {
        if input.trim().is_empty() {
            debug!("Skipping '{}' suggestion for blank input", task);
            return EMPTY_RESPONSE_MESSAGE.to_string();
        }

        let client = match &self.backend {
            Backend::Missing => return MISSING_KEY_MESSAGE.to_string(),
            Backend::Invalid => return ERROR_MESSAGE.to_string(),
            Backend::Ready(client) => client,
        };

        debug!("Requesting '{}' suggestion for {} bytes", task, input.len());
        match client.generate_text(&task.prompt(input)).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_RESPONSE_MESSAGE.to_string(),
            Err(e) => {
                error!("Gemini API Error: {}", e);
                ERROR_MESSAGE.to_string()
            }
        }
    }
}
