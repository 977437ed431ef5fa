//! # Unistyle
//!
//! Turns plain text into Unicode look-alike "fonts" (bold, script, fraktur,
//! circled, fullwidth, regional-indicator letters, ...) that survive being
//! pasted into places that only accept plain text, such as video titles,
//! descriptions and comments.
//!
//! The style engine in [`styles`] is pure and synchronous. [`clipboard`] and
//! [`gemini`] are thin collaborators for copying results and for asking a
//! generative-text service for rewrites and suggestions.

pub mod clipboard;
pub mod config;
pub mod errors;
pub mod gemini;
pub mod styles;

pub use errors::{Result, StylerError};
pub use styles::{catalog, convert, convert_text, list_styles, FontStyle, StyleCatalog, StyleSummary};
