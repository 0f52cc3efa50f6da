//! Bignum Codec Module
//!
//! Converts between malachite integers and the sign + little-endian magnitude
//! layout used by SMALL_BIG_EXT and LARGE_BIG_EXT.
//!
//! ## Encoding Format
//!
//! - **SMALL_BIG_EXT** (tag 110): tag + 1 byte count + 1 byte sign + n bytes (little-endian)
//! - **LARGE_BIG_EXT** (tag 111): tag + 4 byte count (big-endian) + 1 byte sign + n bytes (little-endian)

use entities_term::tags::{LARGE_BIG_EXT, SMALL_BIG_EXT};
use malachite::num::arithmetic::traits::UnsignedAbs;
use malachite::num::conversion::traits::PowerOf2Digits;
use malachite::{Integer, Natural};
use thiserror::Error;

/// Bignum codec errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BignumError {
    /// Magnitude needs more bytes than a 32-bit count can describe
    #[error("bignum magnitude of {0} bytes exceeds the 32-bit length field")]
    ValueTooLarge(usize),
}

/// Split an integer into its magnitude bytes (little-endian) and sign
///
/// Zero yields an empty magnitude.
///
/// # Returns
/// * `(bytes, is_negative)` - Magnitude bytes and sign flag
pub fn integer_to_bytes(value: &Integer) -> (Vec<u8>, bool) {
    let is_negative = *value < 0;
    let magnitude: Natural = value.unsigned_abs();
    let bytes: Vec<u8> = PowerOf2Digits::<u8>::to_power_of_2_digits_asc(&magnitude, 8);
    (bytes, is_negative)
}

/// Rebuild an integer from magnitude bytes (little-endian) and sign
///
/// Trailing zero bytes are accepted and do not change the value.
pub fn bytes_to_integer(bytes: &[u8], is_negative: bool) -> Integer {
    let magnitude =
        <Natural as PowerOf2Digits<u8>>::from_power_of_2_digits_asc(8, bytes.iter().copied())
            .unwrap_or_default();
    Integer::from_sign_and_abs(!is_negative, magnitude)
}

/// Bignum codec
pub struct BignumCodec;

impl BignumCodec {
    /// Append the SMALL_BIG_EXT or LARGE_BIG_EXT encoding of `value` to `buf`
    ///
    /// SMALL_BIG_EXT is chosen while the magnitude fits in 255 bytes.
    ///
    /// # Returns
    /// * `Ok(bytes_written)` - Number of bytes appended, tag included
    /// * `Err(BignumError)` - Magnitude too large for LARGE_BIG_EXT
    pub fn encode(buf: &mut Vec<u8>, value: &Integer) -> Result<usize, BignumError> {
        let (magnitude, is_negative) = integer_to_bytes(value);
        let initial_len = buf.len();
        let sign = u8::from(is_negative);

        if let Ok(count) = u8::try_from(magnitude.len()) {
            buf.reserve(3 + magnitude.len());
            buf.push(SMALL_BIG_EXT);
            buf.push(count);
        } else {
            let count = u32::try_from(magnitude.len())
                .map_err(|_| BignumError::ValueTooLarge(magnitude.len()))?;
            buf.reserve(6 + magnitude.len());
            buf.push(LARGE_BIG_EXT);
            buf.extend_from_slice(&count.to_be_bytes());
        }
        buf.push(sign);
        buf.extend_from_slice(&magnitude);

        Ok(buf.len() - initial_len)
    }

    /// Decode a bignum body whose sign byte and magnitude bytes have
    /// already been sliced out of the buffer
    ///
    /// Any non-zero sign byte means negative.
    pub fn decode(sign: u8, magnitude: &[u8]) -> Integer {
        bytes_to_integer(magnitude, sign != 0)
    }

    /// Number of bytes [`BignumCodec::encode`] appends for `value`
    pub fn encoded_size(value: &Integer) -> usize {
        let magnitude_len = Self::magnitude_len(value);
        if magnitude_len <= u8::MAX as usize {
            3 + magnitude_len
        } else {
            6 + magnitude_len
        }
    }

    /// Magnitude length in bytes, without materialising the bytes
    pub fn magnitude_len(value: &Integer) -> usize {
        use malachite::num::logic::traits::SignificantBits;
        let bits = value.unsigned_abs().significant_bits();
        bits.div_ceil(8) as usize
    }
}
