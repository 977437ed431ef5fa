//! Rich-text clipboard writer
//!
//! Copies styled text either as plain text or, when a non-default color is
//! chosen, as an HTML fragment with a plain-text alternative. Apps that accept
//! rich text (word processors, mail clients) keep the color; everything else
//! gets the plain text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{Result, StylerError};

/// An sRGB text color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl TextColor {
    pub const WHITE: TextColor = TextColor::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (the leading `#` is optional)
    pub fn parse(input: &str) -> Result<Self> {
        let hex = input.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || StylerError::InvalidColor(input.to_string());

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let expand = |s: &str| channel(&s.repeat(2));
                Ok(Self::rgb(
                    expand(&hex[0..1])?,
                    expand(&hex[1..2])?,
                    expand(&hex[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::WHITE
    }

    /// `#RRGGBB`, upper case
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for TextColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for TextColor {
    type Err = StylerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for TextColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for TextColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Quick-pick colors offered next to the free color input
pub const PRESET_COLORS: &[(&str, TextColor)] = &[
    ("White", TextColor::WHITE),
    ("Blue", TextColor::rgb(0x3E, 0xA6, 0xFF)),
    ("Red", TextColor::rgb(0xFF, 0x00, 0x00)),
    ("Green", TextColor::rgb(0x2B, 0xA6, 0x40)),
    ("Yellow", TextColor::rgb(0xF1, 0xC4, 0x0F)),
    ("Purple", TextColor::rgb(0x9B, 0x59, 0xB6)),
    ("Orange", TextColor::rgb(0xE6, 0x7E, 0x22)),
];

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML fragment that shows `text` in `color`
pub fn color_markup(text: &str, color: TextColor) -> String {
    format!(
        "<span style=\"color: {};\">{}</span>",
        color.to_hex(),
        escape_html(text)
    )
}

/// Minimal clipboard surface the writer needs
pub trait ClipboardBackend {
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Write `html` with `alt_text` as the plain-text alternative
    fn set_html(&mut self, html: &str, alt_text: &str) -> Result<()>;
}

/// The operating system clipboard
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| StylerError::ClipboardError(format!("Failed to open clipboard: {e}")))?;
        Ok(Self { inner })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .map_err(|e| StylerError::ClipboardError(e.to_string()))
    }

    fn set_html(&mut self, html: &str, alt_text: &str) -> Result<()> {
        self.inner
            .set_html(html, Some(alt_text))
            .map_err(|e| StylerError::ClipboardError(e.to_string()))
    }
}

/// How a copy ended up on the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Default color, plain text only
    Plain,
    /// HTML with color plus plain-text alternative
    Rich,
    /// Rich write failed, plain text written instead
    PlainFallback,
}

/// Writes plain or color-annotated text to a [`ClipboardBackend`]
pub struct RichClipboard<B: ClipboardBackend> {
    backend: B,
}

impl<B: ClipboardBackend> RichClipboard<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Copy `text`; only a failed plain-text write is an error
    pub fn copy(&mut self, text: &str, color: TextColor) -> Result<CopyOutcome> {
        if color.is_default() {
            self.backend.set_text(text)?;
            debug!("Copied {} bytes as plain text", text.len());
            return Ok(CopyOutcome::Plain);
        }

        let html = color_markup(text, color);
        match self.backend.set_html(&html, text) {
            Ok(()) => {
                debug!("Copied {} bytes as rich text in {}", text.len(), color);
                Ok(CopyOutcome::Rich)
            }
            Err(e) => {
                warn!("Rich copy failed, falling back to text: {}", e);
                self.backend.set_text(text)?;
                Ok(CopyOutcome::PlainFallback)
            }
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
