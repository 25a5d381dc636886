//! Content-derived short codes.
//!
//! A URL is reduced to a 64-bit fingerprint (the first 8 bytes of its SHA-1
//! digest, big-endian) and the fingerprint is base62-encoded. The hasher never
//! consults the store; collisions are the caller's concern.

use sha1::{Digest, Sha1};

use crate::utils::base62;

/// Number of digest bytes folded into the fingerprint.
const FINGERPRINT_BYTES: usize = 8;

/// Computes the 64-bit fingerprint of `input`'s UTF-8 bytes.
pub fn fingerprint(input: &str) -> u64 {
    let digest = Sha1::digest(input.as_bytes());

    let mut head = [0u8; FINGERPRINT_BYTES];
    head.copy_from_slice(&digest[..FINGERPRINT_BYTES]);

    u64::from_be_bytes(head)
}

/// Derives the hash-based short code for `input`.
///
/// Deterministic: the same input always yields the same code, between 1 and
/// 11 base62 symbols long.
pub fn short_hash(input: &str) -> String {
    base62::encode(fingerprint(input))
}
