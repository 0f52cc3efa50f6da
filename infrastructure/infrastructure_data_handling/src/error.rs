//! Error Module
//!
//! Errors raised by the byte-level readers and writers.

use thiserror::Error;

/// Reading past the end of the input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// A field declares more bytes than remain in the buffer
    #[error("truncated input at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        /// Offset of the field that could not be read
        offset: usize,
        /// Bytes the field requires
        needed: usize,
        /// Bytes left in the buffer
        available: usize,
    },
}

/// A value does not fit the length field of its wire form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("{field} length {len} exceeds the maximum of {max}")]
    LengthOverflow {
        /// Name of the length field
        field: &'static str,
        /// Requested length
        len: usize,
        /// Largest length the field can carry
        max: usize,
    },
}

impl WriteError {
    /// Fail with [`WriteError::LengthOverflow`] when `len` exceeds `max`
    pub fn check(field: &'static str, len: usize, max: usize) -> Result<(), WriteError> {
        if len > max {
            return Err(WriteError::LengthOverflow { field, len, max });
        }
        Ok(())
    }
}
