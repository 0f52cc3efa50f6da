//! Infrastructure Layer: External Term Format
//!
//! Provides the bidirectional codec between [`Term`] values and the
//! external term format: a version byte (131) followed by one tagged term.
//!
//! ## Overview
//!
//! - **[`decoding`]**: [`Decoder`], a cursor-based parser driven by an
//!   explicit work stack with a configurable nesting limit
//! - **[`encoding`]**: [`Encoder`], the inverse serializer
//! - **[`size_calculation`]**: [`encoded_size`], exact output length
//!   computed without encoding
//! - **[`config`]**: text codec, text mode and depth settings
//! - **[`error`]**: [`DecodeError`], [`EncodeError`], [`ConfigError`]
//!
//! ## Architecture
//!
//! This crate depends on:
//! - `entities_term` for the term model and tag registry
//! - `infrastructure_data_handling` for the byte-level field codecs
//! - `infrastructure_bignum_encoding` for arbitrary-precision integers
//!
//! Both the decoder and the encoder are plain configuration holders; a
//! single instance can be shared between threads.
//!
//! ## Example
//!
//! ```
//! use infrastructure_external_format::{decode, encode};
//! use entities_term::Term;
//!
//! let term = Term::tuple(vec![Term::atom("ok"), Term::from(42)]);
//! let bytes = encode(&term).unwrap();
//! assert_eq!(bytes[0], 131);
//! assert_eq!(decode(&bytes).unwrap(), term);
//! ```

pub mod config;
pub mod decoding;
pub mod encoding;
pub mod error;
pub mod size_calculation;

pub use config::{DecoderConfig, EncoderConfig, TextMode, DEFAULT_MAX_DEPTH};
pub use decoding::Decoder;
pub use encoding::Encoder;
pub use error::{ConfigError, DecodeError, EncodeError};
pub use infrastructure_data_handling::TextCodec;
pub use size_calculation::encoded_size;

use entities_term::Term;

/// Decode a versioned payload with the default configuration
///
/// STRING_EXT payloads decode to [`Term::CharList`].
pub fn decode(data: &[u8]) -> Result<Term, DecodeError> {
    Decoder::new().decode(data)
}

/// Encode a term with the default configuration
///
/// Text is written as UTF-8 BINARY_EXT.
pub fn encode(term: &Term) -> Result<Vec<u8>, EncodeError> {
    Encoder::new().encode(term)
}
