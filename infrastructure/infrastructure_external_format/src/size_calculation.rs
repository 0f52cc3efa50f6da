//! Size Calculation Module
//!
//! Computes the exact number of bytes [`crate::Encoder`] produces for a
//! term, without producing them.

use crate::config::{EncoderConfig, TextMode};
use crate::encoding::FLOAT_TEXT_LEN;
use crate::error::EncodeError;
use entities_term::{Integer, Term};
use infrastructure_bignum_encoding::BignumCodec;
use infrastructure_data_handling::{encoded_atom_size, tuple_header_size, MAX_STRING_LENGTH};

/// LIST_EXT header: tag + 32-bit length
const LIST_HEADER_SIZE: usize = 5;

/// Calculate the size of the versioned encoding of a term
///
/// # Arguments
/// * `term` - The term to calculate size for
/// * `config` - Encoder configuration; text size depends on codec and mode
///
/// # Returns
/// * `Ok(usize)` - Size in bytes, version byte included
/// * `Err(EncodeError)` - Text the configured codec cannot represent
pub fn encoded_size(term: &Term, config: &EncoderConfig) -> Result<usize, EncodeError> {
    let mut size = 1;
    let mut pending = vec![term];

    while let Some(term) = pending.pop() {
        size += match term {
            Term::Boolean(value) => encoded_atom_size(if *value { 4 } else { 5 }),
            Term::Integer(value) => integer_size(value),
            Term::Float(_) => 1 + FLOAT_TEXT_LEN,
            Term::Atom(atom) => encoded_atom_size(atom.len()),
            Term::Binary(data) => 5 + data.len(),
            Term::Text(text) => text_size(text, config)?,
            Term::CharList(bytes) if bytes.len() <= MAX_STRING_LENGTH => 3 + bytes.len(),
            Term::CharList(bytes) => LIST_HEADER_SIZE + 2 * bytes.len() + 1,
            Term::List(items) if items.is_empty() => 1,
            Term::List(items) => {
                pending.extend(items);
                LIST_HEADER_SIZE + 1
            }
            Term::Tuple(items) => {
                pending.extend(items);
                tuple_header_size(items.len())
            }
            Term::Pid(pid) => 1 + encoded_atom_size(pid.node.len()) + 4 + 4 + 1,
            Term::Port(port) => 1 + encoded_atom_size(port.node.len()) + 4 + 1,
            Term::Reference(reference) => {
                1 + 2 + encoded_atom_size(reference.node.len()) + 1 + 4 * reference.id.len()
            }
            Term::Export(export) => {
                1 + encoded_atom_size(export.module.len())
                    + encoded_atom_size(export.function.len())
                    + 2
            }
        };
    }

    Ok(size)
}

fn small_integer_size(value: i64) -> usize {
    if (0..=255).contains(&value) {
        2
    } else {
        5
    }
}

fn integer_size(value: &Integer) -> usize {
    match i32::try_from(value) {
        Ok(small) => small_integer_size(i64::from(small)),
        Err(_) => BignumCodec::encoded_size(value),
    }
}

fn text_size(text: &str, config: &EncoderConfig) -> Result<usize, EncodeError> {
    let Some(codec) = config.text_codec else {
        if text.is_empty() {
            return Ok(1);
        }
        let elements: usize = text
            .chars()
            .map(|c| small_integer_size(i64::from(u32::from(c))))
            .sum();
        return Ok(LIST_HEADER_SIZE + elements + 1);
    };
    let len = codec.encoded_len(text).ok_or_else(|| {
        EncodeError::unsupported("text", format!("text is not representable in {codec}"))
    })?;
    Ok(match config.text_mode {
        TextMode::Binary => 5 + len,
        TextMode::String => 3 + len,
    })
}
