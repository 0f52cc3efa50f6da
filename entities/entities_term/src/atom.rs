//! Atom Module
//!
//! Provides the [`Atom`] type: a symbolic name that is distinct from ordinary
//! text. Equality, ordering and wire encoding all work on the raw name bytes,
//! so atoms that are not valid UTF-8 (Latin-1 names sent by older runtimes)
//! are preserved exactly.
//!
//! ## Limits
//!
//! - Maximum name length: 65535 bytes (`MAX_ATOM_LENGTH`), the width of the
//!   ATOM_EXT length field
//! - Maximum name length for the compact form: 255 bytes (`MAX_SMALL_ATOM_LENGTH`)

use std::borrow::Cow;
use std::fmt;

/// Maximum atom name length in bytes (16-bit length prefix)
pub const MAX_ATOM_LENGTH: usize = u16::MAX as usize;

/// Maximum atom name length for SMALL_ATOM_EXT (8-bit length prefix)
pub const MAX_SMALL_ATOM_LENGTH: usize = u8::MAX as usize;

/// An atom name
///
/// Construction never fails; names longer than [`MAX_ATOM_LENGTH`] are
/// rejected when they are encoded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    name: Vec<u8>,
}

impl Atom {
    /// Create an atom from its name bytes
    pub fn new(name: impl Into<Vec<u8>>) -> Self {
        Self { name: name.into() }
    }

    /// Raw name bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.name
    }

    /// Name as UTF-8 text, if it is valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.name).ok()
    }

    /// Name with invalid UTF-8 sequences replaced
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Name length in bytes
    pub fn len(&self) -> usize {
        self.name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    /// Consume the atom, returning its name bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.name
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom::new(name)
    }
}

impl From<String> for Atom {
    fn from(name: String) -> Self {
        Atom::new(name)
    }
}

impl From<&[u8]> for Atom {
    fn from(name: &[u8]) -> Self {
        Atom::new(name)
    }
}

impl PartialEq<str> for Atom {
    fn eq(&self, other: &str) -> bool {
        self.name == other.as_bytes()
    }
}

impl PartialEq<&str> for Atom {
    fn eq(&self, other: &&str) -> bool {
        self.name == other.as_bytes()
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
