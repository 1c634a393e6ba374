//! Secure random generation for identifier and token minting.
//!
//! Both helpers draw from the operating system's entropy facility via
//! `rand::rngs::OsRng`. If that source cannot be read the call fails
//! with `EntropyError`; there is no fallback to a weaker source.

use rand::rngs::OsRng;
use rand::RngCore;

/// The fixed alphabet used by [`random_string`].
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

// Largest multiple of the alphabet size that fits in a byte. Bytes at or
// above this value are rejected to keep the character distribution uniform.
const REJECTION_BOUND: u8 = (u8::MAX / ALPHABET.len() as u8) * ALPHABET.len() as u8;

/// The OS entropy source could not be read.
#[derive(Debug, thiserror::Error)]
#[error("secure entropy source unavailable: {0}")]
pub struct EntropyError(#[from] rand::Error);

/// Generate `length` random characters from the alphanumeric alphabet
/// `A-Z a-z 0-9`, uniformly distributed.
pub fn random_string(length: usize) -> Result<String, EntropyError> {
    let mut out = String::with_capacity(length);
    let mut buf = [0u8; 64];

    while out.len() < length {
        OsRng.try_fill_bytes(&mut buf)?;
        for &byte in &buf {
            if out.len() == length {
                break;
            }
            // Rejection sampling: a plain modulo would skew toward the
            // start of the alphabet.
            if byte < REJECTION_BOUND {
                out.push(ALPHABET[byte as usize % ALPHABET.len()] as char);
            }
        }
    }

    Ok(out)
}

/// Generate exactly `length` bytes from the OS entropy source.
pub fn secure_random_bytes(length: usize) -> Result<Vec<u8>, EntropyError> {
    let mut bytes = vec![0u8; length];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}
