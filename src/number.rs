//! Unsigned decimal integer parsing over byte ranges.

/// Parses `bytes` as an unsigned decimal integer.
///
/// Only ASCII digits are accepted: no sign, no whitespace, no radix prefix.
/// Returns `None` for empty input or when the value does not fit into a `u64`.
pub fn parse_unsigned(bytes: &[u8]) -> Option<u64> {
    if bytes.is_empty() {
        return None;
    }

    bytes.iter().try_fold(0u64, |acc, &b| {
        if !b.is_ascii_digit() {
            return None;
        }
        acc.checked_mul(10)?.checked_add(u64::from(b - b'0'))
    })
}
