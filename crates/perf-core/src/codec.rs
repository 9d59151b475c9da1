//! Deterministic row encodings.
//!
//! Keys are the magnitude of the row index, zero-padded to exactly
//! [`FIXED_KEY_WIDTH`] ASCII digits. Values are the plain decimal form of the
//! index, sign included. The two rules are intentionally different: a key
//! never carries a sign, so `i` and `-i` address the same row while expecting
//! different values.
//!
//! Magnitudes of 10^10 or more do not fit the key width. Only the ten least
//! significant digits are kept; this is not reported as an error.

use thiserror::Error;

/// Width in bytes of an encoded key.
pub const FIXED_KEY_WIDTH: usize = 10;

/// Errors returned when decoding keys or values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Key is not exactly [`FIXED_KEY_WIDTH`] bytes.
    #[error("Invalid key width: expected 10 bytes, got {0}")]
    InvalidWidth(usize),

    /// Key contains a byte outside `'0'..='9'`.
    #[error("Invalid key byte 0x{byte:02x} at position {position}")]
    InvalidDigit { position: usize, byte: u8 },

    /// Value bytes are not valid UTF-8.
    #[error("Value is not valid UTF-8")]
    InvalidUtf8,

    /// Value is not a decimal integer in range.
    #[error("Invalid integer value: {0}")]
    InvalidInteger(String),
}

/// Encode a row index as a fixed-width key.
///
/// `i32::MIN` is handled through its unsigned magnitude and encodes as
/// `"2147483648"`.
pub fn encode_key(n: i32) -> [u8; FIXED_KEY_WIDTH] {
    fill_digits(u64::from(n.unsigned_abs()))
}

/// Encode a 64-bit row index as a fixed-width key.
///
/// Magnitudes of 10^10 or more silently lose their leading digits.
pub fn encode_key_wide(n: i64) -> [u8; FIXED_KEY_WIDTH] {
    fill_digits(n.unsigned_abs())
}

fn fill_digits(mut d: u64) -> [u8; FIXED_KEY_WIDTH] {
    let mut key = [b'0'; FIXED_KEY_WIDTH];
    for slot in key.iter_mut().rev() {
        *slot = b'0' + (d % 10) as u8;
        d /= 10;
    }
    key
}

/// Decode a fixed-width key back to the magnitude it was built from.
pub fn decode_key(key: &[u8]) -> Result<u64, CodecError> {
    if key.len() != FIXED_KEY_WIDTH {
        return Err(CodecError::InvalidWidth(key.len()));
    }

    key.iter().enumerate().try_fold(0u64, |acc, (position, &byte)| {
        if byte.is_ascii_digit() {
            Ok(acc * 10 + u64::from(byte - b'0'))
        } else {
            Err(CodecError::InvalidDigit { position, byte })
        }
    })
}

/// Encode a row index as its decimal string value.
pub fn encode_value(n: i32) -> Vec<u8> {
    n.to_string().into_bytes()
}

/// Decode a value produced by [`encode_value`].
pub fn decode_value(value: &[u8]) -> Result<i32, CodecError> {
    let text = std::str::from_utf8(value).map_err(|_| CodecError::InvalidUtf8)?;
    text.parse::<i32>()
        .map_err(|_| CodecError::InvalidInteger(text.to_string()))
}
