//! Encode Atom Module
//!
//! Writes atoms as ATOM_EXT (16-bit length). The compact SMALL_ATOM_EXT
//! form is accepted by the decoder but never produced here.

use crate::error::WriteError;
use entities_term::tags::ATOM_EXT;
use entities_term::MAX_ATOM_LENGTH;

/// Encode an atom name
///
/// # Arguments
/// * `buf` - Buffer to append to
/// * `name` - Atom name bytes
///
/// # Returns
/// * `Ok(bytes_written)` - Number of bytes appended
/// * `Err(WriteError)` - Name longer than 65535 bytes
pub fn encode_atom(buf: &mut Vec<u8>, name: &[u8]) -> Result<usize, WriteError> {
    WriteError::check("atom", name.len(), MAX_ATOM_LENGTH)?;
    let initial_len = buf.len();
    buf.push(ATOM_EXT);
    buf.extend_from_slice(&(name.len() as u16).to_be_bytes());
    buf.extend_from_slice(name);
    Ok(buf.len() - initial_len)
}

/// Number of bytes [`encode_atom`] appends for a name of `len` bytes
pub fn encoded_atom_size(len: usize) -> usize {
    3 + len
}
