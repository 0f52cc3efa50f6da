//! Decode Atom Module
//!
//! Reads the body of an ATOM_EXT or SMALL_ATOM_EXT term. The tag byte has
//! already been consumed by the caller, which decides on it whether the
//! length prefix is 16 or 8 bits wide.

use crate::error::ReadError;
use crate::reader::WireReader;
use entities_term::tags::{ATOM_EXT, SMALL_ATOM_EXT};
use entities_term::Atom;

/// Decode an atom body
///
/// # Arguments
/// * `reader` - Reader positioned just after the tag byte
/// * `tag` - The atom tag that was read (`ATOM_EXT` or `SMALL_ATOM_EXT`)
///
/// # Returns
/// * `Ok(Some(atom))` - Decoded atom
/// * `Ok(None)` - `tag` is not an atom tag; nothing was consumed
/// * `Err(ReadError)` - Input ended inside the atom
pub fn decode_atom_body(reader: &mut WireReader<'_>, tag: u8) -> Result<Option<Atom>, ReadError> {
    let len = match tag {
        ATOM_EXT => reader.read_u16()? as usize,
        SMALL_ATOM_EXT => reader.read_u8()? as usize,
        _ => return Ok(None),
    };
    let name = reader.read_bytes(len)?;
    Ok(Some(Atom::new(name)))
}
