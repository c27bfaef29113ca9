//! Helpers for `0x`-prefixed hex strings.

/// The prefix carried by every hex string this crate produces.
pub const HEX_PREFIX: &str = "0x";

/// Removes a single leading `0x`, if present.
pub(crate) fn without_prefix(value: &str) -> &str {
    value.strip_prefix(HEX_PREFIX).unwrap_or(value)
}

/// Returns true if `value` (optionally `0x`-prefixed) consists only of hex digits.
///
/// When `expected_len` is given it is a length in *bytes*, so the digit count must be exactly twice that. The empty
/// string is valid hex of zero bytes.
pub fn is_valid_hex(value: &str, expected_len: Option<usize>) -> bool {
    let digits = without_prefix(value);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return false;
    }
    match expected_len {
        Some(len) => len.checked_mul(2).is_some_and(|n| n == digits.len()),
        None => true,
    }
}

/// Ensures the value carries the `0x` prefix.
pub fn normalize_hex(value: &str) -> String {
    if value.starts_with(HEX_PREFIX) {
        value.to_string()
    } else {
        format!("{HEX_PREFIX}{value}")
    }
}

/// Strips every leading `0x` from the value, so that applying it twice is the same as applying it once.
pub fn strip_hex_prefix(value: &str) -> &str {
    value.trim_start_matches(HEX_PREFIX)
}

/// Hex-encodes `bytes` in lowercase with the `0x` prefix.
pub fn encode_prefixed<T: AsRef<[u8]>>(bytes: T) -> String {
    format!("{HEX_PREFIX}{}", hex::encode(bytes))
}
