use std::fmt::Write;
use std::net::Ipv6Addr;

use super::{Ipv6Address, TextCodec};
use crate::{AddrError, PRINT_MAX};

/// [`TextCodec`] backed by the standard library's [`Ipv6Addr`] parser and formatter.
///
/// Accepts RFC 4291 text including `::` and a trailing dotted IPv4 part, and
/// writes RFC 5952 canonical text.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdNetCodec;

impl TextCodec for StdNetCodec {
    fn text_to_addr(&self, text: &str) -> Result<Ipv6Address, AddrError> {
        text.parse::<Ipv6Addr>()
            .map(Ipv6Address::from)
            .map_err(|e| AddrError::InvalidFormat(format!("`{}`: {}", text, e)))
    }

    fn addr_to_text(&self, addr: &Ipv6Address) -> Result<String, AddrError> {
        let mut out = String::with_capacity(PRINT_MAX);
        write!(out, "{}", Ipv6Addr::from(*addr))
            .map_err(|e| AddrError::FormatError(e.to_string()))?;
        Ok(out)
    }
}
