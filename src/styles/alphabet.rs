//! Reference alphabet and the grapheme-aware mapping builder

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// The 62 source characters every style is aligned against, in order.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters in [`ALPHABET`]
pub const ALPHABET_LEN: usize = 62;

/// Returns true if `c` is one of the [`ALPHABET`] characters
pub fn is_alphabet_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Substitution table from an alphabet character to a target grapheme.
///
/// Targets may span several codepoints (a regional indicator plus a
/// joiner control, for instance), so values are owned strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    table: HashMap<char, String>,
}

impl Mapping {
    /// Build a mapping by pairing [`ALPHABET`] position by position with
    /// the grapheme clusters of `target`.
    ///
    /// Positions past the end of `target` are left unmapped.
    pub fn from_target(target: &str) -> Self {
        build_mapping(ALPHABET, target)
    }

    /// Look up the replacement for a single source character
    pub fn get(&self, c: char) -> Option<&str> {
        self.table.get(&c).map(String::as_str)
    }

    /// Look up the replacement for one grapheme cluster.
    ///
    /// Only clusters consisting of exactly one character can be keys, so a
    /// letter carrying a combining mark never matches.
    pub fn get_grapheme(&self, grapheme: &str) -> Option<&str> {
        let mut chars = grapheme.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.get(c),
            _ => None,
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.table.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Entries in [`ALPHABET`] order
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        ALPHABET
            .chars()
            .filter_map(move |c| self.get(c).map(|target| (c, target)))
    }
}

/// Pair `source` and `target` grapheme by grapheme.
///
/// Both sides are segmented into user-perceived characters before pairing,
/// so a multi-codepoint target glyph consumes exactly one source position.
/// A source grapheme that is not a single alphabet character is skipped, and
/// pairing stops silently when either side runs out.
pub fn build_mapping(source: &str, target: &str) -> Mapping {
    let mut table = HashMap::with_capacity(ALPHABET_LEN);

    for (src, dst) in source.graphemes(true).zip(target.graphemes(true)) {
        let mut chars = src.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if is_alphabet_char(c) {
                table.insert(c, dst.to_string());
            }
        }
    }

    Mapping { table }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(ALPHABET.chars().count(), ALPHABET_LEN);
        assert!(ALPHABET.chars().all(is_alphabet_char));
        assert!(ALPHABET.starts_with("ABC"));
        assert!(ALPHABET.ends_with("789"));
    }

    #[test]
    fn test_identity_mapping() {
        let mapping = Mapping::from_target(ALPHABET);
        assert_eq!(mapping.len(), ALPHABET_LEN);
        assert_eq!(mapping.get('q'), Some("q"));
    }

    #[test]
    fn test_short_target_leaves_tail_unmapped() {
        let mapping = Mapping::from_target("xyz");
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.get('A'), Some("x"));
        assert_eq!(mapping.get('C'), Some("z"));
        assert!(!mapping.contains('D'));
        assert!(!mapping.contains('9'));
    }

    #[test]
    fn test_empty_target() {
        let mapping = Mapping::from_target("");
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_multi_codepoint_target_keeps_alignment() {
        // "e" + combining acute is one grapheme and must consume one slot
        let mapping = Mapping::from_target("e\u{301}XY");
        assert_eq!(mapping.get('A'), Some("e\u{301}"));
        assert_eq!(mapping.get('B'), Some("X"));
        assert_eq!(mapping.get('C'), Some("Y"));
        assert_eq!(mapping.len(), 3);
    }

    #[test]
    fn test_adjacent_regional_indicators_fuse() {
        // Two bare regional indicators form a single flag cluster, so only
        // one source position gets bound.
        let mapping = Mapping::from_target("\u{1F1E8}\u{1F1F4}");
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get('A'), Some("\u{1F1E8}\u{1F1F4}"));
    }

    #[test]
    fn test_longer_target_is_truncated() {
        let long = "*".repeat(100);
        let mapping = Mapping::from_target(&long);
        assert_eq!(mapping.len(), ALPHABET_LEN);
    }

    #[test]
    fn test_keys_never_leave_alphabet() {
        let mapping = build_mapping("A-b c", "12345");
        let keys: Vec<char> = mapping.entries().map(|(c, _)| c).collect();
        assert_eq!(keys, vec!['A', 'b', 'c']);
        assert_eq!(mapping.get('b'), Some("3"));
        assert_eq!(mapping.get('c'), Some("5"));
    }

    #[test]
    fn test_get_grapheme_requires_single_char() {
        let mapping = Mapping::from_target("Z");
        assert_eq!(mapping.get_grapheme("A"), Some("Z"));
        assert_eq!(mapping.get_grapheme("A\u{301}"), None);
        assert_eq!(mapping.get_grapheme(""), None);
    }

    #[test]
    fn test_entries_follow_alphabet_order() {
        let mapping = Mapping::from_target(ALPHABET);
        let order: String = mapping.entries().map(|(c, _)| c).collect();
        assert_eq!(order, ALPHABET);
    }
}
