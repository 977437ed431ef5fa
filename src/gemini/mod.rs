//! Google Gemini AI integration module
//!
//! Generative-text assistant used for rewriting posts and suggesting titles,
//! descriptions and tags.

pub mod client;
pub mod config;
pub mod models;
pub mod suggest;

pub use client::GeminiClient;
pub use config::{api_key_from_env, GeminiConfig, GeminiModel};
pub use models::*;
pub use suggest::{SuggestionService, SuggestionTask};
