//! Infrastructure Layer: Bignum Encoding
//!
//! Provides the arbitrary-precision integer codec of the external term format.
//!
//! ## Overview
//!
//! On the wire a bignum is a sign byte followed by its magnitude, stored
//! least-significant byte first. SMALL_BIG_EXT carries an 8-bit byte count,
//! LARGE_BIG_EXT a 32-bit one. This crate converts between that layout and
//! malachite's [`Integer`](malachite::Integer).
//!
//! ## Codecs
//!
//! - **[`bignum_codec`](bignum_codec/index.html)**: [`BignumCodec`] plus the
//!   raw [`integer_to_bytes`] / [`bytes_to_integer`] conversions.

pub mod bignum_codec;

pub use bignum_codec::{bytes_to_integer, integer_to_bytes, BignumCodec, BignumError};
