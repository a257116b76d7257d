use crate::number::parse_unsigned;
use crate::{AddrError, PREFIX_MAX};

/// Parses a decimal prefix length in `0..=128`.
///
/// Leading zeros are accepted and read as decimal.
pub fn parse_prefix(text: &str) -> Result<u8, AddrError> {
    parse_prefix_bytes(text.as_bytes())
}

pub fn parse_prefix_bytes(bytes: &[u8]) -> Result<u8, AddrError> {
    let value = parse_unsigned(bytes).ok_or_else(|| {
        AddrError::invalid(format!(
            "prefix `{}` is not an unsigned decimal integer",
            String::from_utf8_lossy(bytes)
        ))
    })?;

    match u8::try_from(value) {
        Ok(prefix) if prefix <= PREFIX_MAX => Ok(prefix),
        _ => Err(AddrError::invalid(format!(
            "prefix {} is greater than {}",
            value, PREFIX_MAX
        ))),
    }
}
