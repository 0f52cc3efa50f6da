//! Infrastructure Layer: Data Handling
//!
//! Provides the byte-level building blocks of the external term format:
//! a bounds-checked reader, per-field decoders and encoders, and the text
//! codecs used for STRING_EXT payloads and text values.
//!
//! Nothing in this crate knows how terms nest; that is the job of
//! `infrastructure_external_format`, which drives these primitives.
//! Depends on the Entities layer.

pub mod decode_atom;
pub mod decode_binary;
pub mod encode_atom;
pub mod encode_binary;
pub mod encode_headers;
pub mod error;
pub mod reader;
pub mod text_codec;

pub use decode_atom::decode_atom_body;
pub use decode_binary::{decode_binary_body, decode_string_body};
pub use encode_atom::{encode_atom, encoded_atom_size};
pub use encode_binary::{encode_binary, encode_string, MAX_STRING_LENGTH};
pub use encode_headers::{encode_list_header, encode_tuple_header, tuple_header_size};
pub use error::{ReadError, WriteError};
pub use reader::WireReader;
pub use text_codec::{TextCodec, UnknownTextCodec};
