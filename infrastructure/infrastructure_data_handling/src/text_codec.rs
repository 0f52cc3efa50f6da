//! Text Codec Module
//!
//! Character encodings used to map STRING_EXT payloads to text on decode
//! and text values to bytes on encode.
//!
//! - **Utf8**: full Unicode, bytes must be valid UTF-8
//! - **Latin1**: ISO-8859-1, one byte per codepoint up to U+00FF
//! - **Ascii**: 7-bit, one byte per codepoint up to U+007F

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextCodec {
    #[default]
    Utf8,
    Latin1,
    Ascii,
}

/// A codec name that matches none of the known encodings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown text codec: {0:?}")]
pub struct UnknownTextCodec(pub String);

impl TextCodec {
    /// Canonical name of the codec
    pub fn name(self) -> &'static str {
        match self {
            TextCodec::Utf8 => "utf-8",
            TextCodec::Latin1 => "latin-1",
            TextCodec::Ascii => "ascii",
        }
    }

    /// Decode bytes to text
    ///
    /// # Returns
    /// * `Some(text)` - Every byte is valid in this codec
    /// * `None` - The bytes cannot be represented as text
    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            TextCodec::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            TextCodec::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            TextCodec::Ascii => {
                if bytes.is_ascii() {
                    Some(bytes.iter().map(|&b| char::from(b)).collect())
                } else {
                    None
                }
            }
        }
    }

    /// Encode text to bytes
    ///
    /// # Returns
    /// * `Some(bytes)` - Encoded text
    /// * `None` - A character is outside the codec's range
    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        match self {
            TextCodec::Utf8 => Some(text.as_bytes().to_vec()),
            TextCodec::Latin1 => text.chars().map(|c| u8::try_from(c).ok()).collect(),
            TextCodec::Ascii => {
                if text.is_ascii() {
                    Some(text.as_bytes().to_vec())
                } else {
                    None
                }
            }
        }
    }

    /// Length of [`TextCodec::encode`]'s output without building it
    pub fn encoded_len(self, text: &str) -> Option<usize> {
        match self {
            TextCodec::Utf8 => Some(text.len()),
            TextCodec::Latin1 => {
                if text.chars().all(|c| u32::from(c) <= 0xFF) {
                    Some(text.chars().count())
                } else {
                    None
                }
            }
            TextCodec::Ascii => text.is_ascii().then_some(text.len()),
        }
    }
}

impl FromStr for TextCodec {
    type Err = UnknownTextCodec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(TextCodec::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextCodec::Latin1),
            "ascii" | "us-ascii" => Ok(TextCodec::Ascii),
            _ => Err(UnknownTextCodec(s.to_string())),
        }
    }
}

impl fmt::Display for TextCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
