//! Font style records and the built-in style catalog

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::{Result, StylerError};
use crate::styles::alphabet::{Mapping, ALPHABET, ALPHABET_LEN};

/// Authored source data for one style: the target alphabet is a string whose
/// grapheme clusters line up with [`ALPHABET`].
#[derive(Debug, Clone, Copy)]
pub struct StyleDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub target: &'static str,
    pub preview: &'static str,
}

/// One named Unicode substitution style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontStyle {
    id: String,
    name: String,
    mapping: Mapping,
    preview: String,
}

impl FontStyle {
    /// Create a style, building its mapping from `target`
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        target: &str,
        preview: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            mapping: Mapping::from_target(target),
            preview: preview.into(),
        }
    }

    pub fn from_definition(def: &StyleDefinition) -> Self {
        Self::new(def.id, def.name, def.target, def.preview)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Number of alphabet characters this style replaces
    pub fn coverage(&self) -> usize {
        self.mapping.len()
    }

    /// Alphabet characters this style leaves untouched, in alphabet order
    pub fn missing(&self) -> Vec<char> {
        ALPHABET.chars().filter(|c| !self.mapping.contains(*c)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.coverage() == ALPHABET_LEN
    }

    pub fn summary(&self) -> StyleSummary {
        StyleSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            preview: self.preview.clone(),
        }
    }
}

/// What a selection UI needs to show for a style
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSummary {
    pub id: String,
    pub name: String,
    pub preview: String,
}

/// One row of [`StyleCatalog::coverage_report`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageRow {
    pub id: String,
    pub covered: usize,
    pub missing: Vec<char>,
}

/// Ordered, immutable collection of font styles
#[derive(Debug, Clone, Default)]
pub struct StyleCatalog {
    styles: Vec<FontStyle>,
    index: HashMap<String, usize>,
}

impl StyleCatalog {
    /// Create a catalog from styles in display order.
    ///
    /// Fails with [`StylerError::DuplicateStyleId`] if two styles share an id.
    pub fn new(styles: Vec<FontStyle>) -> Result<Self> {
        let mut index = HashMap::with_capacity(styles.len());
        for (pos, style) in styles.iter().enumerate() {
            if index.insert(style.id.clone(), pos).is_some() {
                return Err(StylerError::DuplicateStyleId {
                    id: style.id.clone(),
                });
            }
        }

        for style in &styles {
            if !style.is_complete() {
                warn!(
                    "Style '{}' covers {}/{} characters, missing: {}",
                    style.id,
                    style.coverage(),
                    ALPHABET_LEN,
                    style.missing().into_iter().collect::<String>()
                );
            }
        }

        debug!("Built style catalog with {} styles", styles.len());
        Ok(Self { styles, index })
    }

    /// The styles shipped with the crate, in authored order
    pub fn builtin() -> Result<Self> {
        let styles: Vec<FontStyle> = BUILTIN_STYLES.iter().map(FontStyle::from_definition).collect();
        Self::new(styles)
    }

    /// Look up a style by id
    pub fn get(&self, id: &str) -> Result<&FontStyle> {
        self.find(id).ok_or_else(|| StylerError::style_not_found(id))
    }

    pub fn find(&self, id: &str) -> Option<&FontStyle> {
        self.index.get(id).map(|&pos| &self.styles[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn styles(&self) -> &[FontStyle] {
        &self.styles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FontStyle> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.styles.iter().map(FontStyle::id).collect()
    }

    /// Summaries for a selection UI, in display order
    pub fn list(&self) -> Vec<StyleSummary> {
        self.styles.iter().map(FontStyle::summary).collect()
    }

    pub fn coverage_report(&self) -> Vec<CoverageRow> {
        self.styles
            .iter()
            .map(|style| CoverageRow {
                id: style.id.clone(),
                covered: style.coverage(),
                missing: style.missing(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a StyleCatalog {
    type Item = &'a FontStyle;
    type IntoIter = std::slice::Iter<'a, FontStyle>;

    fn into_iter(self) -> Self::IntoIter {
        self.styles.iter()
    }
}

lazy_static! {
    /// Process-wide built-in catalog
    pub static ref CATALOG: StyleCatalog =
        StyleCatalog::builtin().expect("Built-in style table has duplicate ids");
}

/// Shared reference to the built-in catalog
pub fn catalog() -> &'static StyleCatalog {
    &CATALOG
}

// Target alphabets. Each string holds 62 grapheme clusters: A-Z, a-z, 0-9.

const BOLD: &str = "𝐀𝐁𝐂𝐃𝐄𝐅𝐆𝐇𝐈𝐉𝐊𝐋𝐌𝐍𝐎𝐏𝐐𝐑𝐒𝐓𝐔𝐕𝐖𝐗𝐘𝐙𝐚𝐛𝐜𝐝𝐞𝐟𝐠𝐡𝐢𝐣𝐤𝐥𝐦𝐧𝐨𝐩𝐪𝐫𝐬𝐭𝐮𝐯𝐰𝐱𝐲𝐳𝟎𝟏𝟐𝟑𝟒𝟓𝟔𝟕𝟖𝟗";
const SANS: &str = "𝖠𝖡𝖢𝖣𝖤𝖥𝖦𝖧𝖨𝖩𝖪𝖫𝖬𝖭𝖮𝖯𝖰𝖱𝖲𝖳𝖴𝖵𝖶𝖷𝖸𝖹𝖺𝖻𝖼𝖽𝖾𝖿𝗀𝗁𝗂𝗃𝗄𝗅𝗆𝗇𝗈𝗉𝗊𝗋𝗌𝗍𝗎𝗏𝗐𝗑𝗒𝗓𝟢𝟣𝟤𝟥𝟦𝟧𝟨𝟩𝟪𝟫";
const SANS_BOLD: &str = "𝗔𝗕𝗖𝗗𝗘𝗙𝗚𝗛𝗜𝗝𝗞𝗟𝗠𝗡𝗢𝗣𝗤𝗥𝗦𝗧𝗨𝗩𝗪𝗫𝗬𝗭𝗮𝗯𝗰𝗱𝗲𝗳𝗴𝗵𝗶𝗷𝗸𝗹𝗺𝗻𝗼𝗽𝗾𝗿𝘀𝘁𝘂𝘃𝘄𝘅𝘆𝘇𝟬𝟭𝟮𝟯𝟰𝟱𝟲𝟳𝟴𝟵";
// Italic digits do not exist; they map to themselves
const ITALIC: &str = "𝐴𝐵𝐶𝐷𝐸𝐹𝐺𝐻𝐼𝐽𝐾𝐿𝑀𝑁𝑂𝑃𝑄𝑅𝑆𝑇𝑈𝑉𝑊𝑋𝑌𝑍𝑎𝑏𝑐𝑑𝑒𝑓𝑔ℎ𝑖𝑗𝑘𝑙𝑚𝑛𝑜𝑝𝑞𝑟𝑠𝑡𝑢𝑣𝑤𝑥𝑦𝑧0123456789";
const BOLD_ITALIC: &str = "𝑨𝑩𝑪𝑫𝑬𝑭𝑮𝑯𝑰𝑱𝑲𝑳𝑴𝑵𝑶𝑷𝑸𝑹𝑺𝑻𝑼𝑽𝑾𝑿𝒀𝒁𝒂𝒃𝒄𝒅𝒆𝒇𝒈𝒉𝒊𝒋𝒌𝒍𝒎𝒏𝒐𝒑𝒒𝒓𝒔𝒕𝒖𝒗𝒘𝒙𝒚𝒛𝟎𝟏𝟐𝟑𝟒𝟓𝟔𝟕𝟖𝟗";
const SCRIPT: &str = "𝒜ℬ𝒞𝒟ℰℱ𝒢ℋℐ𝒥𝒦ℒℳ𝒩𝒪𝒫𝒬ℛ𝒮𝒯𝒰𝒱𝒲𝒳𝒴𝒵𝒶𝒷𝒸𝒹ℯ𝒻ℊ𝒽𝒾𝒿𝓀𝓁𝓂𝓃ℴ𝓅𝓆𝓇𝓈𝓉𝓊𝓋𝓌𝓍𝓎𝓏0123456789";
const BOLD_SCRIPT: &str = "𝓐𝓑𝓒𝓓𝓔𝓕𝓖𝓗𝓘𝓙𝓚𝓛𝓜𝓝𝓞𝓟𝓠𝓡𝓢𝓣𝓤𝓥𝓦𝓧𝓨𝓩𝓪𝓫𝓬𝓭𝓮𝓯𝓰𝓱𝓲𝓳𝓴𝓵𝓶𝓷𝓸𝓹𝓺𝓻𝓼𝓽𝓾𝓿𝔀𝔁𝔂𝔃𝟎𝟏𝟐𝟑𝟒𝟓𝟔𝟕𝟖𝟗";
// ZWNJ after each indicator keeps neighbouring letters from fusing into a flag
const REGIONAL: &str = "🇦\u{200C}🇧\u{200C}🇨\u{200C}🇩\u{200C}🇪\u{200C}🇫\u{200C}🇬\u{200C}🇭\u{200C}🇮\u{200C}🇯\u{200C}🇰\u{200C}🇱\u{200C}🇲\u{200C}🇳\u{200C}🇴\u{200C}🇵\u{200C}🇶\u{200C}🇷\u{200C}🇸\u{200C}🇹\u{200C}🇺\u{200C}🇻\u{200C}🇼\u{200C}🇽\u{200C}🇾\u{200C}🇿\u{200C}\
🇦\u{200C}🇧\u{200C}🇨\u{200C}🇩\u{200C}🇪\u{200C}🇫\u{200C}🇬\u{200C}🇭\u{200C}🇮\u{200C}🇯\u{200C}🇰\u{200C}🇱\u{200C}🇲\u{200C}🇳\u{200C}🇴\u{200C}🇵\u{200C}🇶\u{200C}🇷\u{200C}🇸\u{200C}🇹\u{200C}🇺\u{200C}🇻\u{200C}🇼\u{200C}🇽\u{200C}🇾\u{200C}🇿\u{200C}\
0123456789";
const SQUARED_NEG: &str = "🅰🅱🅲🅳🅴🅵🅶🅷🅸🅹🅺🅻🅼🅽🅾🅿🆀🆁🆂🆃🆄🆅🆆🆇🆈🆉🅰🅱🅲🅳🅴🅵🅶🅷🅸🅹🅺🅻🅼🅽🅾🅿🆀🆁🆂🆃🆄🆅🆆🆇🆈🆉0123456789";
const SQUARED: &str = "🄰🄱🄲🄳🄴🄵🄶🄷🄸🄹🄺🄻🄼🄽🄾🄿🅀🅁🅂🅃🅄🅅🅆🅇🅈🅉🄰🄱🄲🄳🄴🄵🄶🄷🄸🄹🄺🄻🄼🄽🄾🄿🅀🅁🅂🅃🅄🅅🅆🅇🅈🅉0123456789";
const CIRCLED_NEG: &str = "🅐🅑🅒🅓🅔🅕🅖🅗🅘🅙🅚🅛🅜🅝🅞🅟🅠🅡🅢🅣🅤🅥🅦🅧🅨🅩🅐🅑🅒🅓🅔🅕🅖🅗🅘🅙🅚🅛🅜🅝🅞🅟🅠🅡🅢🅣🅤🅥🅦🅧🅨🅩⓿❶❷❸❹❺❻❼❽❾";
const CIRCLED: &str = "ⒶⒷⒸⒹⒺⒻⒼⒽⒾⒿⓀⓁⓂⓃⓄⓅⓆⓇⓈⓉⓊⓋⓌⓍⓎⓏⓐⓑⓒⓓⓔⓕⓖⓗⓘⓙⓚⓛⓜⓝⓞⓟⓠⓡⓢⓣⓤⓥⓦⓧⓨⓩ0①②③④⑤⑥⑦⑧⑨";
const FULLWIDTH: &str = "ＡＢＣＤＥＦＧＨＩＪＫＬＭＮＯＰＱＲＳＴＵＶＷＸＹＺａｂｃｄｅｆｇｈｉｊｋｌｍｎｏｐｑｒｓｔｕｖｗｘｙｚ０１２３４５６７８９";
const SMALL_CAPS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZᴀʙᴄᴅᴇꜰɢʜɪᴊᴋʟᴍɴᴏᴘꞯʀꜱᴛᴜᴠᴡxʏᴢ0123456789";
const FRAKTUR: &str = "𝔄𝔅ℭ𝔇𝔈𝔉𝔊ℌℑ𝔍𝔎𝔏𝔐𝔑𝔒𝔓𝔔ℜ𝔖𝔗𝔘𝔙𝔚𝔛𝔜ℨ𝔞𝔟𝔠𝔡𝔢𝔣𝔤𝔥𝔦𝔧𝔨𝔩𝔪𝔫𝔬𝔭𝔮𝔯𝔰𝔱𝔲𝔳𝔴𝔵𝔶𝔷0123456789";
const BOLD_FRAKTUR: &str = "𝕬𝕭𝕮𝕯𝕰𝕱𝕲𝕳𝕴𝕵𝕶𝕷𝕸𝕹𝕺𝕻𝕼𝕽𝕾𝕿𝖀𝖁𝖂𝖃𝖄𝖅𝖆𝖇𝖈𝖉𝖊𝖋𝖌𝖍𝖎𝖏𝖐𝖑𝖒𝖓𝖔𝖕𝖖𝖗𝖘𝖙𝖚𝖛𝖜𝖝𝖞𝖟𝟎𝟏𝟐𝟑𝟒𝟓𝟔𝟕𝟖𝟗";
const DOUBLE: &str = "𝔸𝔹ℂ𝔻𝔼𝔽𝔾ℍ𝕀𝕁𝕂𝕃𝕄ℕ𝕆ℙℚℝ𝕊𝕋𝕌𝕍𝕎𝕏𝕐ℤ𝕒𝕓𝕔𝕕𝕖𝕗𝕘𝕙𝕚𝕛𝕜𝕝𝕞𝕟𝕠𝕡𝕢𝕣𝕤𝕥𝕦𝕧𝕨𝕩𝕪𝕫𝟘𝟙𝟚𝟛𝟜𝟝𝟞𝟟𝟠𝟡";
const MONOSPACE: &str = "𝙰𝙱𝙲𝙳𝙴𝙵𝙶𝙷𝙸𝙹𝙺𝙻𝙼𝙽𝙾𝙿𝚀𝚁𝚂𝚃𝚄𝚅𝚆𝚇𝚈𝚉𝚊𝚋𝚌𝚍𝚎𝚏𝚐𝚑𝚒𝚓𝚔𝚕𝚖𝚗𝚘𝚙𝚚𝚛𝚜𝚝𝚞𝚟𝚠𝚡𝚢𝚣𝟶𝟷𝟸𝟹𝟺𝟻𝟼𝟽𝟾𝟿";

/// Built-in styles in display order
pub const BUILTIN_STYLES: &[StyleDefinition] = &[
    StyleDefinition { id: "bold", name: "Bold", target: BOLD, preview: "Bold" },
    StyleDefinition { id: "sans", name: "Sans Serif", target: SANS, preview: "Sans" },
    StyleDefinition { id: "sans_bold", name: "Sans Bold", target: SANS_BOLD, preview: "Sans Bold" },
    StyleDefinition { id: "italic", name: "Italic", target: ITALIC, preview: "Italic" },
    StyleDefinition { id: "bold_italic", name: "Bold Italic", target: BOLD_ITALIC, preview: "Bold Italic" },
    StyleDefinition { id: "script", name: "Script", target: SCRIPT, preview: "Script" },
    StyleDefinition { id: "bold_script", name: "Bold Script", target: BOLD_SCRIPT, preview: "Bold Script" },
    StyleDefinition {
        id: "regional",
        name: "Blue Letters",
        target: REGIONAL,
        preview: "🇨\u{200C}🇴\u{200C}🇱\u{200C}🇴\u{200C}🇷\u{200C}",
    },
    StyleDefinition { id: "squared_neg", name: "Boxed Black", target: SQUARED_NEG, preview: "🅰" },
    StyleDefinition { id: "squared", name: "Boxed", target: SQUARED, preview: "🄰" },
    StyleDefinition { id: "circled_neg", name: "Circled Black", target: CIRCLED_NEG, preview: "🅐" },
    StyleDefinition { id: "circled", name: "Circled", target: CIRCLED, preview: "Circled" },
    StyleDefinition { id: "fullwidth", name: "Wide Text", target: FULLWIDTH, preview: "Ｗｉｄｅ" },
    StyleDefinition { id: "small_caps", name: "Small Caps", target: SMALL_CAPS, preview: "ꜱᴍᴀʟʟ" },
    StyleDefinition { id: "fraktur", name: "Gothic", target: FRAKTUR, preview: "Gothic" },
    StyleDefinition { id: "bold_fraktur", name: "Bold Gothic", target: BOLD_FRAKTUR, preview: "Bold Gothic" },
    StyleDefinition { id: "double", name: "Double Struck", target: DOUBLE, preview: "Double" },
    StyleDefinition { id: "monospace", name: "Monospace", target: MONOSPACE, preview: "Mono" },
];
