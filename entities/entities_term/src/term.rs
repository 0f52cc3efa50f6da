//! Term Module
//!
//! Provides the closed [`Term`] enum: every value the decoder can produce
//! and the encoder can consume.
//!
//! Booleans are their own variant. On the wire they are the atoms `true`
//! and `false`, and the decoder maps those two atom names back to
//! [`Term::Boolean`], so `Term::Atom(Atom::new("true"))` never survives a
//! round trip as an atom.

use crate::atom::Atom;
use crate::identifiers::{Export, Pid, Port, Reference};
use malachite::Integer;

/// External term
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// Boolean (`true` / `false` atoms on the wire)
    Boolean(bool),
    /// Arbitrary-precision integer
    Integer(Integer),
    /// Double-precision float
    Float(f64),
    /// Atom
    Atom(Atom),
    /// Opaque byte string
    Binary(Vec<u8>),
    /// Unicode text
    ///
    /// The decoder only produces this for STRING_EXT payloads when a text
    /// codec is configured and the bytes decode cleanly.
    Text(String),
    /// Byte values of a STRING_EXT payload that was not mapped to text
    ///
    /// More than 65535 bytes do not fit STRING_EXT; the encoder writes them
    /// as a list of small integers, which decodes as a [`Term::List`].
    CharList(Vec<u8>),
    /// Proper list; the empty list is `List(vec![])`
    List(Vec<Term>),
    /// Tuple
    Tuple(Vec<Term>),
    /// Process identifier
    Pid(Pid),
    /// Port identifier
    Port(Port),
    /// Reference
    Reference(Reference),
    /// Exported function capture
    Export(Export),
}

impl Term {
    /// The empty list
    pub fn nil() -> Self {
        Term::List(Vec::new())
    }

    /// Whether this is the empty list
    pub fn is_nil(&self) -> bool {
        matches!(self, Term::List(items) if items.is_empty())
    }

    pub fn atom(name: impl Into<Atom>) -> Self {
        Term::Atom(name.into())
    }

    pub fn binary(data: impl Into<Vec<u8>>) -> Self {
        Term::Binary(data.into())
    }

    pub fn char_list(data: impl Into<Vec<u8>>) -> Self {
        Term::CharList(data.into())
    }

    pub fn tuple(elements: Vec<Term>) -> Self {
        Term::Tuple(elements)
    }

    pub fn list(elements: Vec<Term>) -> Self {
        Term::List(elements)
    }

    /// Stable name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Boolean(_) => "boolean",
            Term::Integer(_) => "integer",
            Term::Float(_) => "float",
            Term::Atom(_) => "atom",
            Term::Binary(_) => "binary",
            Term::Text(_) => "text",
            Term::CharList(_) => "char_list",
            Term::List(_) => "list",
            Term::Tuple(_) => "tuple",
            Term::Pid(_) => "pid",
            Term::Port(_) => "port",
            Term::Reference(_) => "reference",
            Term::Export(_) => "export",
        }
    }

    /// Integer value narrowed to `i64`, if it is an integer in range
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Term::Integer(value) => i64::try_from(value).ok(),
            _ => None,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Term::Atom(atom) => Some(atom),
            _ => None,
        }
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Boolean(value)
    }
}

macro_rules! integer_term_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Term {
                fn from(value: $t) -> Self {
                    Term::Integer(Integer::from(value))
                }
            }
        )*
    };
}

integer_term_from!(u8, i32, u32, i64, u64, i128);

impl From<Integer> for Term {
    fn from(value: Integer) -> Self {
        Term::Integer(value)
    }
}

impl From<f64> for Term {
    fn from(value: f64) -> Self {
        Term::Float(value)
    }
}

impl From<Atom> for Term {
    fn from(value: Atom) -> Self {
        Term::Atom(value)
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Text(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Text(value)
    }
}

impl From<Pid> for Term {
    fn from(value: Pid) -> Self {
        Term::Pid(value)
    }
}

impl From<Port> for Term {
    fn from(value: Port) -> Self {
        Term::Port(value)
    }
}

impl From<Reference> for Term {
    fn from(value: Reference) -> Self {
        Term::Reference(value)
    }
}

impl From<Export> for Term {
    fn from(value: Export) -> Self {
        Term::Export(value)
    }
}
