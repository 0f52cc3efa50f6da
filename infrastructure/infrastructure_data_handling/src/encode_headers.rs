//! Encode Headers Module
//!
//! Writes the tag and length prefix of compound terms. The elements
//! themselves are appended by the caller.

use crate::error::WriteError;
use entities_term::tags::{LARGE_TUPLE_EXT, LIST_EXT, SMALL_TUPLE_EXT};

/// Encode a tuple header
///
/// SMALL_TUPLE_EXT is used for arities below 256, LARGE_TUPLE_EXT otherwise.
///
/// # Returns
/// * `Ok(bytes_written)` - 2 or 5
/// * `Err(WriteError)` - Arity beyond 32 bits
pub fn encode_tuple_header(buf: &mut Vec<u8>, arity: usize) -> Result<usize, WriteError> {
    if let Ok(small) = u8::try_from(arity) {
        buf.push(SMALL_TUPLE_EXT);
        buf.push(small);
        return Ok(2);
    }
    WriteError::check("tuple arity", arity, u32::MAX as usize)?;
    buf.push(LARGE_TUPLE_EXT);
    buf.extend_from_slice(&(arity as u32).to_be_bytes());
    Ok(5)
}

/// Encode a LIST_EXT header
///
/// The caller appends `len` elements and the NIL_EXT tail.
///
/// # Returns
/// * `Ok(5)` - Bytes written
/// * `Err(WriteError)` - Length beyond 32 bits
pub fn encode_list_header(buf: &mut Vec<u8>, len: usize) -> Result<usize, WriteError> {
    WriteError::check("list", len, u32::MAX as usize)?;
    buf.push(LIST_EXT);
    buf.extend_from_slice(&(len as u32).to_be_bytes());
    Ok(5)
}

/// Size of the tuple header [`encode_tuple_header`] writes
pub fn tuple_header_size(arity: usize) -> usize {
    if arity <= u8::MAX as usize {
        2
    } else {
        5
    }
}
