//! Golden tests for the built-in style catalog

use std::collections::HashSet;

use rstest::rstest;

use super::*;
use crate::errors::StylerError;

const EXPECTED_ORDER: &[&str] = &[
    "bold",
    "sans",
    "sans_bold",
    "italic",
    "bold_italic",
    "script",
    "bold_script",
    "regional",
    "squared_neg",
    "squared",
    "circled_neg",
    "circled",
    "fullwidth",
    "small_caps",
    "fraktur",
    "bold_fraktur",
    "double",
    "monospace",
];

const SAMPLES: &[&str] = &[
    "",
    "Hello, World!",
    "The quick brown fox jumps over the lazy dog 0123456789",
    "naïve café",
    "e\u{301}\u{301} stacked marks",
    "line one\r\nline two\ttab",
    "漢字とカタカナ",
    "👍🏽 👨‍👩‍👧 🇧🇷",
    "mixed Ωμέγα and Latin",
];

fn style(id: &str) -> &'static FontStyle {
    catalog().get(id).unwrap()
}

#[test]
fn test_catalog_order_is_fixed() {
    assert_eq!(catalog().ids(), EXPECTED_ORDER);
}

#[test]
fn test_builtin_catalog_builds() {
    let built = StyleCatalog::builtin().unwrap();
    assert_eq!(built.ids(), EXPECTED_ORDER);
    assert_eq!(built.ids(), catalog().ids());
}

#[test]
fn test_catalog_has_unique_ids() {
    let ids: HashSet<&str> = BUILTIN_STYLES.iter().map(|def| def.id).collect();
    assert_eq!(ids.len(), BUILTIN_STYLES.len());
    assert!(BUILTIN_STYLES.len() >= 16);
}

#[test]
fn test_list_styles_fields_non_empty() {
    let styles = list_styles();
    assert_eq!(styles.len(), EXPECTED_ORDER.len());
    for (summary, id) in styles.iter().zip(EXPECTED_ORDER) {
        assert_eq!(summary.id, *id);
        assert!(!summary.name.is_empty());
        assert!(!summary.preview.is_empty());
    }
}

#[test]
fn test_every_builtin_style_is_complete() {
    for row in catalog().coverage_report() {
        assert_eq!(row.covered, ALPHABET_LEN, "style {} is incomplete", row.id);
        assert!(row.missing.is_empty());
    }
}

#[test]
fn test_every_target_alphabet_has_62_graphemes() {
    for def in BUILTIN_STYLES {
        assert_eq!(grapheme_len(def.target), ALPHABET_LEN, "target of {}", def.id);
    }
}

#[rstest]
#[case("bold", "𝐀", "𝐳", "𝟎")]
#[case("sans", "𝖠", "𝗓", "𝟢")]
#[case("sans_bold", "𝗔", "𝘇", "𝟬")]
#[case("italic", "𝐴", "𝑧", "0")]
#[case("bold_italic", "𝑨", "𝒛", "𝟎")]
#[case("script", "𝒜", "𝓏", "0")]
#[case("bold_script", "𝓐", "𝔃", "𝟎")]
#[case("regional", "🇦\u{200C}", "🇿\u{200C}", "0")]
#[case("squared_neg", "🅰", "🆉", "0")]
#[case("squared", "🄰", "🅉", "0")]
#[case("circled_neg", "🅐", "🅩", "⓿")]
#[case("circled", "Ⓐ", "ⓩ", "0")]
#[case("fullwidth", "Ａ", "ｚ", "０")]
#[case("small_caps", "A", "ᴢ", "0")]
#[case("fraktur", "𝔄", "𝔷", "0")]
#[case("bold_fraktur", "𝕬", "𝖟", "𝟎")]
#[case("double", "𝔸", "𝕫", "𝟘")]
#[case("monospace", "𝙰", "𝚣", "𝟶")]
fn test_golden_endpoints(
    #[case] id: &str,
    #[case] upper_a: &str,
    #[case] lower_z: &str,
    #[case] zero: &str,
) {
    let mapping = style(id).mapping();
    assert_eq!(mapping.get('A'), Some(upper_a));
    assert_eq!(mapping.get('z'), Some(lower_z));
    assert_eq!(mapping.get('0'), Some(zero));
}

/// Contiguous runs in the Mathematical Alphanumeric Symbols block, with the
/// letterlike-symbol holes each style fills from elsewhere.
#[rstest]
#[case("bold", 0x1D400, 0x1D41A, Some(0x1D7CE), &[])]
#[case("sans", 0x1D5A0, 0x1D5BA, Some(0x1D7E2), &[])]
#[case("sans_bold", 0x1D5D4, 0x1D5EE, Some(0x1D7EC), &[])]
#[case("italic", 0x1D434, 0x1D44E, None, &[('h', 0x210E)])]
#[case("bold_italic", 0x1D468, 0x1D482, Some(0x1D7CE), &[])]
#[case(
    "script",
    0x1D49C,
    0x1D4B6,
    None,
    &[
        ('B', 0x212C), ('E', 0x2130), ('F', 0x2131), ('H', 0x210B), ('I', 0x2110),
        ('L', 0x2112), ('M', 0x2133), ('R', 0x211B), ('e', 0x212F), ('g', 0x210A),
        ('o', 0x2134),
    ]
)]
#[case("bold_script", 0x1D4D0, 0x1D4EA, Some(0x1D7CE), &[])]
#[case(
    "fraktur",
    0x1D504,
    0x1D51E,
    None,
    &[('C', 0x212D), ('H', 0x210C), ('I', 0x2111), ('R', 0x211C), ('Z', 0x2128)]
)]
#[case("bold_fraktur", 0x1D56C, 0x1D586, Some(0x1D7CE), &[])]
#[case(
    "double",
    0x1D538,
    0x1D552,
    Some(0x1D7D8),
    &[
        ('C', 0x2102), ('H', 0x210D), ('N', 0x2115), ('P', 0x2119), ('Q', 0x211A),
        ('R', 0x211D), ('Z', 0x2124),
    ]
)]
#[case("monospace", 0x1D670, 0x1D68A, Some(0x1D7F6), &[])]
#[case("fullwidth", 0xFF21, 0xFF41, Some(0xFF10), &[])]
fn test_golden_math_alphanumeric_table(
    #[case] id: &str,
    #[case] upper: u32,
    #[case] lower: u32,
    #[case] digits: Option<u32>,
    #[case] holes: &[(char, u32)],
) {
    let mapping = style(id).mapping();
    for c in ALPHABET.chars() {
        let expected = (if let Some(&(_, cp)) = holes.iter().find(|(h, _)| *h == c) {
            char::from_u32(cp)
        } else if c.is_ascii_uppercase() {
            char::from_u32(upper + (c as u32 - 'A' as u32))
        } else if c.is_ascii_lowercase() {
            char::from_u32(lower + (c as u32 - 'a' as u32))
        } else {
            match digits {
                Some(base) => char::from_u32(base + (c as u32 - '0' as u32)),
                None => Some(c),
            }
        })
        .unwrap();
        assert_eq!(
            mapping.get(c),
            Some(expected.to_string().as_str()),
            "style {} char {}",
            id,
            c
        );
    }
}

#[rstest]
#[case("squared", 0x1F130)]
#[case("squared_neg", 0x1F170)]
#[case("circled_neg", 0x1F150)]
fn test_enclosed_styles_share_case(#[case] id: &str, #[case] base: u32) {
    let mapping = style(id).mapping();
    for (upper, lower) in ('A'..='Z').zip('a'..='z') {
        let expected = char::from_u32(base + (upper as u32 - 'A' as u32)).unwrap().to_string();
        assert_eq!(mapping.get(upper), Some(expected.as_str()));
        assert_eq!(mapping.get(lower), Some(expected.as_str()));
    }
}

#[test]
fn test_circled_digits() {
    assert_eq!(convert("0123456789", "circled").unwrap(), "0①②③④⑤⑥⑦⑧⑨");
    assert_eq!(convert("0123456789", "circled_neg").unwrap(), "⓿❶❷❸❹❺❻❼❽❾");
}

#[test]
fn test_small_caps_keeps_upper_case() {
    assert_eq!(convert("Small CAPS x", "small_caps").unwrap(), "Sᴍᴀʟʟ CAPS x");
}

#[test]
fn test_regional_targets_are_multi_codepoint() {
    let mapping = style("regional").mapping();
    for c in ('A'..='Z').chain('a'..='z') {
        let target = mapping.get(c).unwrap();
        assert_eq!(target.chars().count(), 2, "target for {}", c);
        assert_eq!(grapheme_len(target), 1);
    }
}

#[test]
fn test_convert_hello_bold() {
    assert_eq!(convert("HELLO", "bold").unwrap(), "𝐇𝐄𝐋𝐋𝐎");
}

#[test]
fn test_convert_empty_italic() {
    assert_eq!(convert("", "italic").unwrap(), "");
}

#[test]
fn test_convert_monospace_mixed() {
    let out = convert("A1 b!", "monospace").unwrap();
    assert_eq!(out, "𝙰𝟷 𝚋!");
    assert_eq!(grapheme_len(&out), 5);
}

#[test]
fn test_convert_regional_stays_two_graphemes() {
    let out = convert("CO", "regional").unwrap();
    assert_eq!(out, "🇨\u{200C}🇴\u{200C}");
    assert_eq!(grapheme_len(&out), 2);
    // Without the joiner these two indicators would render as one flag
    assert_eq!(grapheme_len("🇨🇴"), 1);
}

#[test]
fn test_convert_unknown_style() {
    match convert("abc", "no-such-style") {
        Err(StylerError::StyleNotFound { id }) => assert_eq!(id, "no-such-style"),
        other => panic!("expected StyleNotFound, got {:?}", other),
    }
}

#[test]
fn test_grapheme_count_preserved_for_all_styles() {
    for style in catalog() {
        for sample in SAMPLES {
            let out = convert_text(sample, style.mapping());
            assert_eq!(
                grapheme_len(&out),
                grapheme_len(sample),
                "style {} sample {:?}",
                style.id(),
                sample
            );
        }
    }
}

#[test]
fn test_non_alphabet_text_passes_through() {
    let text = "!? ., — 🙂 漢字 👍🏽 🇨🇴 Ωμέγα é\u{301}";
    for style in catalog() {
        assert_eq!(convert_text(text, style.mapping()), text);
    }
}

#[test]
fn test_whitespace_preserved() {
    let out = convert("  a \t b\n", "bold").unwrap();
    assert_eq!(out, "  𝐚 \t 𝐛\n");
}

#[test]
fn test_convert_is_deterministic() {
    let first = convert("Same input 123", "bold_fraktur").unwrap();
    let second = convert("Same input 123", "bold_fraktur").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_partial_style_degrades_gracefully() {
    // Bare regional indicators pair into flags, so 26 indicators only
    // yield 13 clusters and the rest of the alphabet stays unmapped.
    let bare: String = (0..26).filter_map(|i| char::from_u32(0x1F1E6 + i)).collect();
    let style = FontStyle::new("bare_regional", "Bare", &bare, "AB");
    assert_eq!(style.coverage(), 13);
    assert_eq!(style.mapping().get('A'), Some("🇦🇧"));
    assert!(!style.mapping().contains('N'));

    let catalog = StyleCatalog::new(vec![style]).unwrap();
    assert_eq!(catalog.convert("AN!", "bare_regional").unwrap(), "🇦🇧N!");
}
