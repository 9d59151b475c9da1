//! Random row material for the write throughput operations.

use rand::Rng;

/// Upper bound (exclusive) of the digit that prefixes a random key.
pub const KEY_DIGIT_BOUND: u32 = 9;

/// Build a random key of the form `"<digit>-<millis>"`.
///
/// Two keys built within the same millisecond collide whenever they draw the
/// same digit. Such writes overwrite each other in the store.
pub fn random_key<R: Rng>(rng: &mut R, now_millis: i64) -> Vec<u8> {
    let digit = rng.gen_range(0..KEY_DIGIT_BOUND);
    format!("{digit}-{now_millis}").into_bytes()
}

/// Build a random key stamped with the current wall-clock time.
pub fn random_key_now<R: Rng>(rng: &mut R) -> Vec<u8> {
    random_key(rng, chrono::Utc::now().timestamp_millis())
}

/// Encode a random `f32` in `[0, 1)` as its big-endian IEEE-754 bits.
pub fn random_value<R: Rng>(rng: &mut R) -> [u8; 4] {
    rng.gen::<f32>().to_be_bytes()
}

/// Decode a value produced by [`random_value`].
pub fn decode_float(value: &[u8]) -> Option<f32> {
    let bytes: [u8; 4] = value.try_into().ok()?;
    Some(f32::from_be_bytes(bytes))
}
