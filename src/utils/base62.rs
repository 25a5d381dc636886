//! Base62 encoding for numeric fingerprints.

/// Symbol table: digits, then uppercase, then lowercase.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Longest possible encoding of a `u64` (62^11 > 2^64).
pub const MAX_ENCODED_LEN: usize = 11;

/// Encodes `n` as a minimal-length base62 string, most significant symbol first.
///
/// Zero encodes to `"0"`; no other value produces a leading zero symbol.
///
/// # Examples
///
/// ```
/// use slugshort::utils::base62::encode;
///
/// assert_eq!(encode(0), "0");
/// assert_eq!(encode(61), "z");
/// assert_eq!(encode(62), "10");
/// ```
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut symbols = Vec::with_capacity(MAX_ENCODED_LEN);
    while n > 0 {
        symbols.push(ALPHABET[(n % 62) as usize] as char);
        n /= 62;
    }

    symbols.iter().rev().collect()
}

/// Returns true if every character of `s` belongs to [`ALPHABET`].
pub fn is_base62(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric())
}
