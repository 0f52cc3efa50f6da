//! Encode Binary Module
//!
//! Writes BINARY_EXT (32-bit length) and STRING_EXT (16-bit length) terms.

use crate::error::WriteError;
use entities_term::tags::{BINARY_EXT, STRING_EXT};

/// Largest STRING_EXT payload
pub const MAX_STRING_LENGTH: usize = u16::MAX as usize;

/// Encode a binary
///
/// # Arguments
/// * `buf` - Buffer to append to
/// * `data` - Binary payload
///
/// # Returns
/// * `Ok(bytes_written)` - Number of bytes appended
/// * `Err(WriteError)` - Payload longer than a 32-bit length can describe
pub fn encode_binary(buf: &mut Vec<u8>, data: &[u8]) -> Result<usize, WriteError> {
    WriteError::check("binary", data.len(), u32::MAX as usize)?;
    let initial_len = buf.len();
    buf.push(BINARY_EXT);
    buf.extend_from_slice(&(data.len() as u32).to_be_bytes());
    buf.extend_from_slice(data);
    Ok(buf.len() - initial_len)
}

/// Encode a STRING_EXT term
///
/// # Arguments
/// * `buf` - Buffer to append to
/// * `data` - Character bytes
///
/// # Returns
/// * `Ok(bytes_written)` - Number of bytes appended
/// * `Err(WriteError)` - More than 65535 bytes
pub fn encode_string(buf: &mut Vec<u8>, data: &[u8]) -> Result<usize, WriteError> {
    WriteError::check("string", data.len(), MAX_STRING_LENGTH)?;
    let initial_len = buf.len();
    buf.push(STRING_EXT);
    buf.extend_from_slice(&(data.len() as u16).to_be_bytes());
    buf.extend_from_slice(data);
    Ok(buf.len() - initial_len)
}
