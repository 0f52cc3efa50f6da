//! Error Module
//!
//! Error taxonomy of the term codec. Every error is terminal for the call
//! that raised it; nothing is retried or recovered locally.

use infrastructure_bignum_encoding::BignumError;
use infrastructure_data_handling::{ReadError, UnknownTextCodec, WriteError};
use thiserror::Error;

/// Decoding error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// First byte is not the version magic (131)
    #[error("expected version byte 131, found {found:?}")]
    Format {
        /// The byte found instead, `None` for empty input
        found: Option<u8>,
    },

    /// Tag byte not in the registry
    #[error("unsupported tag {tag} at offset {offset}")]
    UnsupportedTag { tag: u8, offset: usize },

    /// A sub-term has the wrong shape for its position
    #[error("{context}: expected {expected}, found {found} at offset {offset}")]
    TypeMismatch {
        /// Field being decoded, e.g. `"pid node"`
        context: &'static str,
        /// What the field requires
        expected: &'static str,
        /// Symbolic name of the tag found, or a short description
        found: String,
        offset: usize,
    },

    /// List terminator is not NIL_EXT
    #[error("improper list: tail at offset {offset} is not NIL_EXT")]
    ImproperList { offset: usize },

    /// Input ends inside a field
    #[error("truncated input at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Legacy FLOAT_EXT text does not parse as a number
    #[error("invalid float text {text:?} at offset {offset}")]
    InvalidFloat { offset: usize, text: String },

    /// Nested tuples and lists exceed the configured depth
    #[error("nesting deeper than {limit} at offset {offset}")]
    NestingTooDeep { limit: usize, offset: usize },
}

impl From<ReadError> for DecodeError {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::Truncated {
                offset,
                needed,
                available,
            } => DecodeError::Truncated {
                offset,
                needed,
                available,
            },
        }
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Text output mode other than `"binary"` or `"string"`
    #[error("unknown text mode {0:?}, expected \"binary\" or \"string\"")]
    UnknownTextMode(String),

    #[error(transparent)]
    UnknownTextCodec(#[from] UnknownTextCodec),
}

/// Encoding error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The value has no wire representation
    #[error("cannot encode {kind}: {reason}")]
    UnsupportedValue {
        /// [`entities_term::Term::kind`] of the value
        kind: &'static str,
        reason: String,
    },

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl EncodeError {
    pub(crate) fn unsupported(kind: &'static str, reason: impl Into<String>) -> Self {
        EncodeError::UnsupportedValue {
            kind,
            reason: reason.into(),
        }
    }

    pub(crate) fn from_write(kind: &'static str, err: WriteError) -> Self {
        EncodeError::unsupported(kind, err.to_string())
    }
}

impl From<BignumError> for EncodeError {
    fn from(err: BignumError) -> Self {
        EncodeError::unsupported("integer", err.to_string())
    }
}
