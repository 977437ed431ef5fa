use thiserror::Error;

/// Errors that can occur in the styler library
#[derive(Error, Debug)]
pub enum StylerError {
    /// Caller asked for a style id that is not in the catalog
    #[error("Style not found: {id}")]
    StyleNotFound { id: String },

    /// Two catalog entries share the same id
    #[error("Duplicate style id: {id}")]
    DuplicateStyleId { id: String },

    /// Color string is not `#RGB` or `#RRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Network error for HTTP requests
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The generative-text service answered with something unusable
    #[error("External API error: {0}")]
    ExternalApiError(String),

    /// Error when serializing or deserializing data
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Error when talking to the system clipboard
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Result with StylerError
pub type Result<T> = std::result::Result<T, StylerError>;

impl StylerError {
    /// Shorthand for [`StylerError::StyleNotFound`]
    pub fn style_not_found(id: impl Into<String>) -> Self {
        Self::StyleNotFound { id: id.into() }
    }
}
