//! Configuration Module
//!
//! Typed settings for [`crate::Decoder`] and [`crate::Encoder`]. Names are
//! validated when a configuration is built, so a bad text mode is reported
//! before any value is encoded.

use crate::error::ConfigError;
use infrastructure_data_handling::TextCodec;
use std::str::FromStr;

/// Default bound on nested tuples and lists while decoding
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Wire form used for text values when a codec is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMode {
    /// BINARY_EXT
    #[default]
    Binary,
    /// STRING_EXT
    String,
}

impl FromStr for TextMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "binary" => Ok(TextMode::Binary),
            "string" => Ok(TextMode::String),
            other => Err(ConfigError::UnknownTextMode(other.to_string())),
        }
    }
}

/// Decoder settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Codec tried on STRING_EXT payloads; `None` keeps them as char lists
    pub text_codec: Option<TextCodec>,
    /// Deepest allowed nesting of tuples and lists
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            text_codec: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Build a configuration from an optional codec name
    ///
    /// # Returns
    /// * `Ok(config)` - Configuration with the default depth limit
    /// * `Err(ConfigError)` - Unknown codec name
    pub fn from_names(text_codec: Option<&str>) -> Result<Self, ConfigError> {
        let text_codec = text_codec.map(str::parse::<TextCodec>).transpose()?;
        Ok(Self {
            text_codec,
            ..Self::default()
        })
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Encoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Codec for text values; `None` writes text as a list of codepoints
    pub text_codec: Option<TextCodec>,
    /// Wire form for encoded text
    pub text_mode: TextMode,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            text_codec: Some(TextCodec::Utf8),
            text_mode: TextMode::Binary,
        }
    }
}

impl EncoderConfig {
    /// Build a configuration from names
    ///
    /// # Arguments
    /// * `text_codec` - Codec name, or `None` for codepoint lists
    /// * `text_mode` - `"binary"` or `"string"`
    ///
    /// # Returns
    /// * `Ok(config)` - Parsed configuration
    /// * `Err(ConfigError)` - Unknown codec name or text mode
    pub fn from_names(text_codec: Option<&str>, text_mode: &str) -> Result<Self, ConfigError> {
        let text_codec = text_codec.map(str::parse::<TextCodec>).transpose()?;
        let text_mode: TextMode = text_mode.parse()?;
        Ok(Self {
            text_codec,
            text_mode,
        })
    }
}
