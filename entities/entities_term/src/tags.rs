//! Tag Registry
//!
//! One-byte tags of the external term format. Every encoded payload starts
//! with [`VERSION_MAGIC`] followed by exactly one tagged term.

/// External term format version magic byte
pub const VERSION_MAGIC: u8 = 131;

/// Small integer (unsigned, 0..=255)
pub const SMALL_INTEGER_EXT: u8 = 97;

/// Integer (32-bit signed, big-endian)
pub const INTEGER_EXT: u8 = 98;

/// Float (legacy 31-byte NUL-padded text)
pub const FLOAT_EXT: u8 = 99;

/// New float (8-byte IEEE 754, big-endian)
pub const NEW_FLOAT_EXT: u8 = 70;

/// Atom (16-bit length)
pub const ATOM_EXT: u8 = 100;

/// Small atom (8-bit length)
pub const SMALL_ATOM_EXT: u8 = 115;

/// Small tuple (arity < 256)
pub const SMALL_TUPLE_EXT: u8 = 104;

/// Large tuple (32-bit arity)
pub const LARGE_TUPLE_EXT: u8 = 105;

/// Nil (empty list)
pub const NIL_EXT: u8 = 106;

/// String (16-bit length, raw bytes)
pub const STRING_EXT: u8 = 107;

/// List (32-bit length, elements, tail)
pub const LIST_EXT: u8 = 108;

/// Binary (32-bit length, raw bytes)
pub const BINARY_EXT: u8 = 109;

/// Small big integer (8-bit magnitude length)
pub const SMALL_BIG_EXT: u8 = 110;

/// Large big integer (32-bit magnitude length)
pub const LARGE_BIG_EXT: u8 = 111;

/// Reference (legacy, single id word)
pub const REFERENCE_EXT: u8 = 101;

/// New reference (multi-word id)
pub const NEW_REFERENCE_EXT: u8 = 114;

/// Port
pub const PORT_EXT: u8 = 102;

/// PID
pub const PID_EXT: u8 = 103;

/// Export (module:function/arity)
pub const EXPORT_EXT: u8 = 113;

/// Symbolic name of a registered tag
///
/// Returns `None` for bytes that are not part of the registry, which the
/// decoder reports as an unsupported tag.
pub fn tag_name(tag: u8) -> Option<&'static str> {
    let name = match tag {
        SMALL_INTEGER_EXT => "SMALL_INTEGER_EXT",
        INTEGER_EXT => "INTEGER_EXT",
        FLOAT_EXT => "FLOAT_EXT",
        NEW_FLOAT_EXT => "NEW_FLOAT_EXT",
        ATOM_EXT => "ATOM_EXT",
        SMALL_ATOM_EXT => "SMALL_ATOM_EXT",
        SMALL_TUPLE_EXT => "SMALL_TUPLE_EXT",
        LARGE_TUPLE_EXT => "LARGE_TUPLE_EXT",
        NIL_EXT => "NIL_EXT",
        STRING_EXT => "STRING_EXT",
        LIST_EXT => "LIST_EXT",
        BINARY_EXT => "BINARY_EXT",
        SMALL_BIG_EXT => "SMALL_BIG_EXT",
        LARGE_BIG_EXT => "LARGE_BIG_EXT",
        REFERENCE_EXT => "REFERENCE_EXT",
        NEW_REFERENCE_EXT => "NEW_REFERENCE_EXT",
        PORT_EXT => "PORT_EXT",
        PID_EXT => "PID_EXT",
        EXPORT_EXT => "EXPORT_EXT",
        _ => return None,
    };
    Some(name)
}
