//! Decode Binary Module
//!
//! Reads the bodies of BINARY_EXT (32-bit length) and STRING_EXT (16-bit
//! length) terms. Both return borrowed slices; the caller decides whether
//! and how to copy them.

use crate::error::ReadError;
use crate::reader::WireReader;

/// Decode a BINARY_EXT body
///
/// # Arguments
/// * `reader` - Reader positioned just after the tag byte
///
/// # Returns
/// * `Ok(bytes)` - Binary payload
/// * `Err(ReadError)` - Declared length runs past the end of input
pub fn decode_binary_body<'a>(reader: &mut WireReader<'a>) -> Result<&'a [u8], ReadError> {
    let len = reader.read_u32()? as usize;
    reader.read_bytes(len)
}

/// Decode a STRING_EXT body
///
/// # Arguments
/// * `reader` - Reader positioned just after the tag byte
///
/// # Returns
/// * `Ok(bytes)` - Raw string bytes, one per character
/// * `Err(ReadError)` - Declared length runs past the end of input
pub fn decode_string_body<'a>(reader: &mut WireReader<'a>) -> Result<&'a [u8], ReadError> {
    let len = reader.read_u16()? as usize;
    reader.read_bytes(len)
}
