//! Applying a style mapping to arbitrary text

use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::errors::Result;
use crate::styles::alphabet::Mapping;
use crate::styles::catalog::{catalog, StyleCatalog, StyleSummary};

/// Text shown in previews when the user has not typed anything
pub const DEFAULT_PLACEHOLDER: &str = "Preview Text";

/// Replace every grapheme of `text` found in `mapping`, leaving the rest as is.
///
/// The output has exactly as many grapheme clusters as the input.
pub fn convert_text(text: &str, mapping: &Mapping) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for grapheme in text.graphemes(true) {
        out.push_str(mapping.get_grapheme(grapheme).unwrap_or(grapheme));
    }
    out
}

/// Convert `text` with a style from the built-in catalog
pub fn convert(text: &str, style_id: &str) -> Result<String> {
    catalog().convert(text, style_id)
}

/// Number of user-perceived characters in `text`
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

impl StyleCatalog {
    /// Convert `text` with the style named `style_id`
    pub fn convert(&self, text: &str, style_id: &str) -> Result<String> {
        let style = self.get(style_id)?;
        debug!("Converting {} graphemes with style '{}'", grapheme_len(text), style_id);
        Ok(convert_text(text, style.mapping()))
    }
}

/// Render `text` in every style of `catalog`, in display order.
///
/// Empty input is replaced by `placeholder` so each style still shows
/// something.
pub fn preview_all(
    catalog: &StyleCatalog,
    text: &str,
    placeholder: &str,
) -> Vec<(StyleSummary, String)> {
    let source = if text.is_empty() { placeholder } else { text };
    catalog
        .iter()
        .map(|style| (style.summary(), convert_text(source, style.mapping())))
        .collect()
}
