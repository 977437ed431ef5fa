//! Unicode look-alike font styles
//!
//! A style is a substitution table from the 62 reference characters
//! (`A-Z`, `a-z`, `0-9`) to look-alike glyphs. Tables are built from dense
//! target-alphabet strings by pairing grapheme clusters position by position,
//! and conversion walks the input one grapheme cluster at a time.

pub mod alphabet;
pub mod catalog;
pub mod convert;

#[cfg(test)]
mod tests;

pub use alphabet::{build_mapping, Mapping, ALPHABET, ALPHABET_LEN};
pub use catalog::{
    catalog, CoverageRow, FontStyle, StyleCatalog, StyleDefinition, StyleSummary, BUILTIN_STYLES,
    CATALOG,
};
pub use convert::{convert, convert_text, grapheme_len, preview_all, DEFAULT_PLACEHOLDER};

/// Summaries of every built-in style, in display order
pub fn list_styles() -> Vec<StyleSummary> {
    catalog().list()
}
