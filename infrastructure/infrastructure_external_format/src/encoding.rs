//! Encoding Module
//!
//! Provides [`Encoder`], which serializes a [`Term`] to external term format.
//!
//! Compound terms are walked with an explicit stack of pending work, so the
//! depth of a caller-built value is limited only by memory. The output
//! buffer is sized up front with [`crate::encoded_size`].

use crate::config::{EncoderConfig, TextMode};
use crate::error::EncodeError;
use crate::size_calculation::encoded_size;
use entities_term::tags::{
    EXPORT_EXT, FLOAT_EXT, INTEGER_EXT, NEW_REFERENCE_EXT, NIL_EXT, PID_EXT, PORT_EXT,
    SMALL_INTEGER_EXT, VERSION_MAGIC,
};
use entities_term::{Integer, Term};
use infrastructure_bignum_encoding::BignumCodec;
use infrastructure_data_handling::{
    encode_atom, encode_binary, encode_list_header, encode_string, encode_tuple_header,
    MAX_STRING_LENGTH,
};
use tracing::{debug, trace};

/// Width of the FLOAT_EXT text field
pub(crate) const FLOAT_TEXT_LEN: usize = 31;

/// Largest number of id words a NEW_REFERENCE_EXT can carry
pub(crate) const MAX_REFERENCE_WORDS: usize = u16::MAX as usize;

enum Pending<'a> {
    Term(&'a Term),
    /// Terminator of a LIST_EXT whose elements are already queued
    Nil,
}

/// External term format encoder
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create an encoder with the default configuration (UTF-8 text as
    /// BINARY_EXT)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with the given configuration
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Configuration this encoder was built with
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode a term with the version byte
    ///
    /// # Arguments
    /// * `term` - Term to encode
    ///
    /// # Returns
    /// * `Ok(bytes)` - `131` followed by the encoded term
    /// * `Err(EncodeError)` - The term has no wire representation
    pub fn encode(&self, term: &Term) -> Result<Vec<u8>, EncodeError> {
        let size = encoded_size(term, &self.config).inspect_err(log_failure)?;
        let mut buf = Vec::with_capacity(size);
        self.encode_into(term, &mut buf)?;
        Ok(buf)
    }

    /// Append the version byte and the encoded term to `buf`
    ///
    /// On error `buf` is left as it was.
    pub fn encode_into(&self, term: &Term, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
        trace!(kind = term.kind(), "encoding term");
        let start = buf.len();
        buf.push(VERSION_MAGIC);
        match self.encode_term(term, buf) {
            Ok(()) => {
                trace!(len = buf.len() - start, "encoded term");
                Ok(())
            }
            Err(err) => {
                buf.truncate(start);
                log_failure(&err);
                Err(err)
            }
        }
    }

    fn encode_term(&self, term: &Term, buf: &mut Vec<u8>) -> Result<(), EncodeError> {
        let mut pending = vec![Pending::Term(term)];

        while let Some(next) = pending.pop() {
            let term = match next {
                Pending::Term(term) => term,
                Pending::Nil => {
                    buf.push(NIL_EXT);
                    continue;
                }
            };

            match term {
                // booleans go out as the atoms `true` and `false`
                Term::Boolean(value) => {
                    let name: &[u8] = if *value { b"true" } else { b"false" };
                    write_atom(buf, name, "boolean")?;
                }
                Term::Integer(value) => encode_integer(buf, value)?,
                Term::Float(value) => encode_float(buf, *value)?,
                Term::Atom(atom) => write_atom(buf, atom.as_bytes(), "atom")?,
                Term::Binary(data) => {
                    encode_binary(buf, data).map_err(|e| EncodeError::from_write("binary", e))?;
                }
                Term::Text(text) => self.encode_text(buf, text)?,
                Term::CharList(bytes) => encode_char_list(buf, bytes)?,
                Term::List(items) if items.is_empty() => buf.push(NIL_EXT),
                Term::List(items) => {
                    encode_list_header(buf, items.len())
                        .map_err(|e| EncodeError::from_write("list", e))?;
                    pending.push(Pending::Nil);
                    pending.extend(items.iter().rev().map(Pending::Term));
                }
                Term::Tuple(items) => {
                    encode_tuple_header(buf, items.len())
                        .map_err(|e| EncodeError::from_write("tuple", e))?;
                    pending.extend(items.iter().rev().map(Pending::Term));
                }
                Term::Pid(pid) => {
                    buf.push(PID_EXT);
                    write_atom(buf, pid.node.as_bytes(), "pid")?;
                    buf.extend_from_slice(&pid.id.to_be_bytes());
                    buf.extend_from_slice(&pid.serial.to_be_bytes());
                    buf.push(pid.creation);
                }
                Term::Port(port) => {
                    buf.push(PORT_EXT);
                    write_atom(buf, port.node.as_bytes(), "port")?;
                    buf.extend_from_slice(&port.id.to_be_bytes());
                    buf.push(port.creation);
                }
                Term::Reference(reference) => {
                    let words = reference.id.len();
                    if words == 0 {
                        return Err(EncodeError::unsupported("reference", "reference has no id words"));
                    }
                    if words > MAX_REFERENCE_WORDS {
                        return Err(EncodeError::unsupported(
                            "reference",
                            format!("{words} id words exceed the maximum of {MAX_REFERENCE_WORDS}"),
                        ));
                    }
                    buf.push(NEW_REFERENCE_EXT);
                    buf.extend_from_slice(&(words as u16).to_be_bytes());
                    write_atom(buf, reference.node.as_bytes(), "reference")?;
                    buf.push(reference.creation);
                    for word in &reference.id {
                        buf.extend_from_slice(&word.to_be_bytes());
                    }
                }
                Term::Export(export) => {
                    buf.push(EXPORT_EXT);
                    write_atom(buf, export.module.as_bytes(), "export")?;
                    write_atom(buf, export.function.as_bytes(), "export")?;
                    buf.push(SMALL_INTEGER_EXT);
                    buf.push(export.arity);
                }
            }
        }

        Ok(())
    }

    /// Encode text per the configured codec and mode
    ///
    /// Without a codec the text becomes a list of codepoint integers.
    fn encode_text(&self, buf: &mut Vec<u8>, text: &str) -> Result<(), EncodeError> {
        let Some(codec) = self.config.text_codec else {
            return encode_codepoints(buf, text);
        };
        let bytes = codec.encode(text).ok_or_else(|| {
            EncodeError::unsupported("text", format!("text is not representable in {codec}"))
        })?;
        match self.config.text_mode {
            TextMode::Binary => encode_binary(buf, &bytes),
            TextMode::String => encode_string(buf, &bytes),
        }
        .map_err(|e| EncodeError::from_write("text", e))?;
        Ok(())
    }
}

fn log_failure(err: &EncodeError) {
    debug!(error = %err, "encode failed");
}

fn write_atom(buf: &mut Vec<u8>, name: &[u8], kind: &'static str) -> Result<(), EncodeError> {
    encode_atom(buf, name).map_err(|e| EncodeError::from_write(kind, e))?;
    Ok(())
}

/// Encode a machine integer as SMALL_INTEGER_EXT or INTEGER_EXT
///
/// SMALL_INTEGER_EXT is unsigned, so negative values always take the wide form.
fn encode_small(buf: &mut Vec<u8>, value: i32) {
    if let Ok(byte) = u8::try_from(value) {
        buf.push(SMALL_INTEGER_EXT);
        buf.push(byte);
    } else {
        buf.push(INTEGER_EXT);
        buf.extend_from_slice(&value.to_be_bytes());
    }
}

fn encode_integer(buf: &mut Vec<u8>, value: &Integer) -> Result<(), EncodeError> {
    match i32::try_from(value) {
        Ok(small) => encode_small(buf, small),
        Err(_) => {
            BignumCodec::encode(buf, value)?;
        }
    }
    Ok(())
}

/// Format a float the way C's `%.20e` does: 21 significant digits and an
/// exponent with an explicit sign and at least two digits
pub(crate) fn format_float(value: f64) -> Result<String, EncodeError> {
    if !value.is_finite() {
        return Err(EncodeError::unsupported(
            "float",
            format!("{value} has no finite representation"),
        ));
    }
    let formatted = format!("{value:.20e}");
    let (mantissa, exponent) = formatted
        .split_once('e')
        .ok_or_else(|| EncodeError::unsupported("float", format!("unexpected layout {formatted:?}")))?;
    let exponent: i32 = exponent
        .parse()
        .map_err(|_| EncodeError::unsupported("float", format!("unexpected layout {formatted:?}")))?;
    let sign = if exponent < 0 { '-' } else { '+' };
    Ok(format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs()))
}

fn encode_float(buf: &mut Vec<u8>, value: f64) -> Result<(), EncodeError> {
    let text = format_float(value)?;
    let mut field = [0u8; FLOAT_TEXT_LEN];
    let len = text.len().min(FLOAT_TEXT_LEN);
    field[..len].copy_from_slice(&text.as_bytes()[..len]);
    buf.push(FLOAT_EXT);
    buf.extend_from_slice(&field);
    Ok(())
}

/// STRING_EXT when the bytes fit its 16-bit length, otherwise a list of
/// small integers
///
/// The long form decodes back as a [`Term::List`] of integers, not a
/// [`Term::CharList`].
fn encode_char_list(buf: &mut Vec<u8>, bytes: &[u8]) -> Result<(), EncodeError> {
    if bytes.len() <= MAX_STRING_LENGTH {
        encode_string(buf, bytes).map_err(|e| EncodeError::from_write("char_list", e))?;
        return Ok(());
    }
    encode_list_header(buf, bytes.len()).map_err(|e| EncodeError::from_write("char_list", e))?;
    for &byte in bytes {
        buf.push(SMALL_INTEGER_EXT);
        buf.push(byte);
    }
    buf.push(NIL_EXT);
    Ok(())
}

fn encode_codepoints(buf: &mut Vec<u8>, text: &str) -> Result<(), EncodeError> {
    if text.is_empty() {
        buf.push(NIL_EXT);
        return Ok(());
    }
    encode_list_header(buf, text.chars().count()).map_err(|e| EncodeError::from_write("text", e))?;
    for c in text.chars() {
        // codepoints stop at U+10FFFF, well inside i32
        encode_small(buf, u32::from(c) as i32);
    }
    buf.push(NIL_EXT);
    Ok(())
}
