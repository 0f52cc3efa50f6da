//! Decoding Module
//!
//! Provides [`Decoder`], which rebuilds a [`Term`] from external term format
//! bytes.
//!
//! Nested tuples and lists are decoded with an explicit stack of open
//! containers instead of recursion. Each completed value is handed to the
//! innermost open container; when a container has received all of its
//! elements it is closed and becomes the completed value for its parent.
//! Nesting depth is therefore bounded by [`DecoderConfig::max_depth`], not
//! by the call stack.

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use entities_term::tags::*;
use entities_term::{tag_name, Atom, Export, Integer, Pid, Port, Reference, Term};
use infrastructure_bignum_encoding::BignumCodec;
use infrastructure_data_handling::{
    decode_atom_body, decode_binary_body, decode_string_body, WireReader,
};
use tracing::{debug, trace};

/// Width of the legacy FLOAT_EXT text field
const FLOAT_TEXT_LEN: usize = 31;

/// Most elements reserved up front when a container opens
///
/// Declared lengths come from the input; larger containers grow as their
/// elements arrive.
const MAX_RESERVED_ITEMS: usize = 64;

/// An open container waiting for elements
enum Frame {
    Tuple { items: Vec<Term>, remaining: usize },
    List { items: Vec<Term>, remaining: usize },
}

impl Frame {
    /// Add an element; returns true once the container is full
    fn push(&mut self, value: Term) -> bool {
        let (items, remaining) = match self {
            Frame::Tuple { items, remaining } | Frame::List { items, remaining } => {
                (items, remaining)
            }
        };
        items.push(value);
        *remaining -= 1;
        *remaining == 0
    }
}

/// External term format decoder
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Create a decoder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with the given configuration
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Configuration this decoder was built with
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode a versioned payload
    ///
    /// Bytes after the first complete term are ignored.
    ///
    /// # Arguments
    /// * `data` - Version byte (131) followed by one term
    ///
    /// # Returns
    /// * `Ok(Term)` - Decoded term
    /// * `Err(DecodeError)` - Malformed input
    pub fn decode(&self, data: &[u8]) -> Result<Term, DecodeError> {
        self.decode_with_len(data).map(|(term, _)| term)
    }

    /// Decode a versioned payload and report how many bytes it occupied
    ///
    /// # Returns
    /// * `Ok((term, consumed))` - `consumed` includes the version byte
    /// * `Err(DecodeError)` - Malformed input
    pub fn decode_with_len(&self, data: &[u8]) -> Result<(Term, usize), DecodeError> {
        trace!(len = data.len(), "decoding term");
        let result = match data.first() {
            Some(&VERSION_MAGIC) => self.decode_from(data, 1),
            found => Err(DecodeError::Format {
                found: found.copied(),
            }),
        };
        log_outcome(result)
    }

    /// Decode one term starting at `offset`, with no version byte
    ///
    /// # Arguments
    /// * `data` - Whole input buffer; error offsets are relative to its start
    /// * `offset` - Position of the term's tag byte
    ///
    /// # Returns
    /// * `Ok((term, new_offset))` - Decoded term and the position after it
    /// * `Err(DecodeError)` - Malformed input
    pub fn decode_term_at(&self, data: &[u8], offset: usize) -> Result<(Term, usize), DecodeError> {
        trace!(len = data.len(), offset, "decoding term");
        log_outcome(self.decode_from(data, offset))
    }

    fn decode_from(&self, data: &[u8], offset: usize) -> Result<(Term, usize), DecodeError> {
        let mut reader = WireReader::at(data, offset);
        let mut stack: Vec<Frame> = Vec::new();

        'next: loop {
            let Some(mut value) = self.decode_one(&mut reader, &mut stack)? else {
                continue;
            };

            while let Some(mut frame) = stack.pop() {
                if !frame.push(value) {
                    stack.push(frame);
                    continue 'next;
                }
                value = match frame {
                    Frame::Tuple { items, .. } => Term::Tuple(items),
                    Frame::List { items, .. } => {
                        self.expect_nil_tail(&mut reader)?;
                        Term::List(items)
                    }
                };
            }

            return Ok((value, reader.position()));
        }
    }

    /// Decode the term at the cursor
    ///
    /// Returns `None` when the term is a non-empty container, which is
    /// pushed onto `stack` to collect its elements.
    fn decode_one(
        &self,
        reader: &mut WireReader<'_>,
        stack: &mut Vec<Frame>,
    ) -> Result<Option<Term>, DecodeError> {
        let offset = reader.position();
        let tag = reader.read_u8()?;

        let term = match tag {
            SMALL_INTEGER_EXT => Term::Integer(Integer::from(reader.read_u8()?)),
            INTEGER_EXT => Term::Integer(Integer::from(reader.read_i32()?)),
            FLOAT_EXT => Term::Float(decode_float_text(reader)?),
            NEW_FLOAT_EXT => Term::Float(reader.read_f64()?),
            ATOM_EXT | SMALL_ATOM_EXT => match decode_atom_body(reader, tag)? {
                Some(atom) => atom_or_boolean(atom),
                None => return Err(DecodeError::UnsupportedTag { tag, offset }),
            },
            SMALL_TUPLE_EXT | LARGE_TUPLE_EXT => {
                self.check_depth(stack, offset)?;
                let arity = if tag == SMALL_TUPLE_EXT {
                    reader.read_u8()? as usize
                } else {
                    reader.read_u32()? as usize
                };
                if arity == 0 {
                    Term::Tuple(Vec::new())
                } else {
                    stack.push(Frame::Tuple {
                        items: Vec::with_capacity(arity.min(MAX_RESERVED_ITEMS)),
                        remaining: arity,
                    });
                    return Ok(None);
                }
            }
            NIL_EXT => Term::nil(),
            STRING_EXT => {
                let bytes = decode_string_body(reader)?;
                self.string_term(bytes)
            }
            LIST_EXT => {
                self.check_depth(stack, offset)?;
                let len = reader.read_u32()? as usize;
                if len == 0 {
                    self.expect_nil_tail(reader)?;
                    Term::nil()
                } else {
                    stack.push(Frame::List {
                        items: Vec::with_capacity(len.min(MAX_RESERVED_ITEMS)),
                        remaining: len,
                    });
                    return Ok(None);
                }
            }
            BINARY_EXT => Term::Binary(decode_binary_body(reader)?.to_vec()),
            SMALL_BIG_EXT | LARGE_BIG_EXT => Term::Integer(decode_bignum(reader, tag)?),
            REFERENCE_EXT => {
                let node = read_atom(reader, "reference node")?;
                let id = reader.read_u32()?;
                let creation = reader.read_u8()?;
                Term::Reference(Reference {
                    node,
                    id: vec![id],
                    creation,
                })
            }
            NEW_REFERENCE_EXT => {
                let words_offset = reader.position();
                let words = reader.read_u16()? as usize;
                if words == 0 {
                    return Err(DecodeError::TypeMismatch {
                        context: "reference id",
                        expected: "at least one id word",
                        found: "0 words".to_string(),
                        offset: words_offset,
                    });
                }
                let node = read_atom(reader, "reference node")?;
                let creation = reader.read_u8()?;
                let mut id = Vec::with_capacity(words.min(reader.remaining() / 4));
                for _ in 0..words {
                    id.push(reader.read_u32()?);
                }
                Term::Reference(Reference { node, id, creation })
            }
            PORT_EXT => {
                let node = read_atom(reader, "port node")?;
                let id = reader.read_u32()?;
                let creation = reader.read_u8()?;
                Term::Port(Port { node, id, creation })
            }
            PID_EXT => {
                let node = read_atom(reader, "pid node")?;
                let id = reader.read_u32()?;
                let serial = reader.read_u32()?;
                let creation = reader.read_u8()?;
                Term::Pid(Pid {
                    node,
                    id,
                    serial,
                    creation,
                })
            }
            EXPORT_EXT => {
                let module = read_atom(reader, "export module")?;
                let function = read_atom(reader, "export function")?;
                let arity = read_arity(reader)?;
                Term::Export(Export {
                    module,
                    function,
                    arity,
                })
            }
            _ => return Err(DecodeError::UnsupportedTag { tag, offset }),
        };

        Ok(Some(term))
    }

    fn check_depth(&self, stack: &[Frame], offset: usize) -> Result<(), DecodeError> {
        if stack.len() >= self.config.max_depth {
            return Err(DecodeError::NestingTooDeep {
                limit: self.config.max_depth,
                offset,
            });
        }
        Ok(())
    }

    /// Consume the terminator of a LIST_EXT
    ///
    /// The terminator must decode to the empty list: NIL_EXT, a LIST_EXT
    /// declaring no elements (whose own tail is checked in turn), or, when
    /// no text codec is configured, an empty STRING_EXT.
    fn expect_nil_tail(&self, reader: &mut WireReader<'_>) -> Result<(), DecodeError> {
        loop {
            let offset = reader.position();
            let improper = DecodeError::ImproperList { offset };
            match reader.read_u8()? {
                NIL_EXT => return Ok(()),
                LIST_EXT => {
                    if reader.read_u32()? != 0 {
                        return Err(improper);
                    }
                }
                STRING_EXT if self.config.text_codec.is_none() => {
                    if reader.read_u16()? != 0 {
                        return Err(improper);
                    }
                    return Ok(());
                }
                _ => return Err(improper),
            }
        }
    }

    /// Map a STRING_EXT payload to text, or keep its bytes
    fn string_term(&self, bytes: &[u8]) -> Term {
        let Some(codec) = self.config.text_codec else {
            return Term::CharList(bytes.to_vec());
        };
        match codec.decode(bytes) {
            Some(text) => Term::Text(text),
            None => {
                trace!(codec = %codec, len = bytes.len(), "string is not valid text, keeping char list");
                Term::CharList(bytes.to_vec())
            }
        }
    }
}

fn log_outcome(result: Result<(Term, usize), DecodeError>) -> Result<(Term, usize), DecodeError> {
    match &result {
        Ok((term, end)) => trace!(kind = term.kind(), end, "decoded term"),
        Err(err) => debug!(error = %err, "decode failed"),
    }
    result
}

fn atom_or_boolean(atom: Atom) -> Term {
    match atom.as_bytes() {
        b"true" => Term::Boolean(true),
        b"false" => Term::Boolean(false),
        _ => Term::Atom(atom),
    }
}

/// Error for a sub-term whose tag is not the one its position requires
fn mismatch(context: &'static str, expected: &'static str, tag: u8, offset: usize) -> DecodeError {
    match tag_name(tag) {
        Some(name) => DecodeError::TypeMismatch {
            context,
            expected,
            found: name.to_string(),
            offset,
        },
        None => DecodeError::UnsupportedTag { tag, offset },
    }
}

/// Read an identifier sub-term that must be an atom
///
/// `true` and `false` stay atoms here.
fn read_atom(reader: &mut WireReader<'_>, context: &'static str) -> Result<Atom, DecodeError> {
    let offset = reader.position();
    let tag = reader.read_u8()?;
    decode_atom_body(reader, tag)?.ok_or_else(|| mismatch(context, "atom", tag, offset))
}

/// Read the arity of an EXPORT_EXT, which may use any integer encoding
fn read_arity(reader: &mut WireReader<'_>) -> Result<u8, DecodeError> {
    let offset = reader.position();
    let tag = reader.read_u8()?;
    let value = match tag {
        SMALL_INTEGER_EXT => return Ok(reader.read_u8()?),
        INTEGER_EXT => Integer::from(reader.read_i32()?),
        SMALL_BIG_EXT | LARGE_BIG_EXT => decode_bignum(reader, tag)?,
        _ => return Err(mismatch("export arity", "integer", tag, offset)),
    };
    u8::try_from(&value).map_err(|_| DecodeError::TypeMismatch {
        context: "export arity",
        expected: "integer in 0..=255",
        found: value.to_string(),
        offset,
    })
}

fn decode_bignum(reader: &mut WireReader<'_>, tag: u8) -> Result<Integer, DecodeError> {
    let count = if tag == SMALL_BIG_EXT {
        reader.read_u8()? as usize
    } else {
        reader.read_u32()? as usize
    };
    let sign = reader.read_u8()?;
    let magnitude = reader.read_bytes(count)?;
    Ok(BignumCodec::decode(sign, magnitude))
}

/// Parse the 31-byte FLOAT_EXT field
///
/// The text ends at the first NUL, or fills the field when there is none.
fn decode_float_text(reader: &mut WireReader<'_>) -> Result<f64, DecodeError> {
    let offset = reader.position();
    let field = reader.read_bytes(FLOAT_TEXT_LEN)?;
    let text = match field.iter().position(|&b| b == 0) {
        Some(end) => &field[..end],
        None => field,
    };
    let invalid = || DecodeError::InvalidFloat {
        offset,
        text: String::from_utf8_lossy(text).into_owned(),
    };
    std::str::from_utf8(text)
        .map_err(|_| invalid())?
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<f64>()
        .map_err(|_| invalid())
}
