//! Base64 padding repair.
//!
//! Tokens arrive from the wire with their `=` padding stripped; the
//! standard decoder wants it back. `pad_base64` restores the minimum
//! padding and `decode_padded_base64` is the pad-then-decode shorthand.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Append the minimum `=` padding needed to make the input's length a
/// multiple of 4.
///
/// Already-padded input (length divisible by 4) is returned unchanged.
/// A length of 1 mod 4 can never be valid base64 and cannot be repaired
/// by padding, so such input is also returned unchanged rather than
/// treated as an error; the subsequent decode will reject it.
pub fn pad_base64(input: &str) -> String {
    match input.len() % 4 {
        2 => format!("{input}=="),
        3 => format!("{input}="),
        _ => input.to_string(),
    }
}

/// Restore padding, then decode with the standard base64 alphabet.
pub fn decode_padded_base64(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(pad_base64(input))
}
