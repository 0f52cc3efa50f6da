//! Entities Layer: Term Model
//!
//! Provides the value model shared by the external term format decoder and
//! encoder, together with the fixed tag registry of the wire format.
//!
//! ## Overview
//!
//! The `entities_term` crate is the innermost layer of the codec workspace. It
//! has no knowledge of byte buffers; it only defines what a term *is*:
//!
//! - **[`tags`](tags/index.html)**: One-byte wire tags and the version magic byte
//! - **[`atom`](atom/index.html)**: The [`Atom`] name type
//! - **[`identifiers`](identifiers/index.html)**: [`Pid`], [`Port`], [`Reference`]
//!   and [`Export`] composite identifiers
//! - **[`term`](term/index.html)**: The closed [`Term`] enum
//!
//! ## Usage
//!
//! ```rust
//! use entities_term::{Atom, Term};
//!
//! let term = Term::tuple(vec![Term::atom("ok"), Term::from(42)]);
//! assert_eq!(term.kind(), "tuple");
//! assert_eq!(Term::from(true), Term::Boolean(true));
//! assert!(Term::nil().is_nil());
//! ```

pub mod atom;
pub mod identifiers;
pub mod tags;
pub mod term;

pub use atom::{Atom, MAX_ATOM_LENGTH};
pub use identifiers::{Export, Pid, Port, Reference};
pub use tags::{tag_name, VERSION_MAGIC};
pub use term::Term;

/// Arbitrary-precision integer used by [`Term::Integer`]
pub use malachite::Integer;
