mod std_net;
pub use std_net::StdNetCodec;

use std::fmt::{self, Display};
use std::net::Ipv6Addr;
use std::str::FromStr;

use log::trace;
#[cfg(test)]
use mockall::automock;

use crate::{AddrError, ADDR_LEN, PRINT_MAX};

/// A 16-byte IPv6 address in network byte order
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Ipv6Address([u8; ADDR_LEN]);

impl Ipv6Address {
    pub const UNSPECIFIED: Self = Ipv6Address([0; ADDR_LEN]);

    pub const fn new(octets: [u8; ADDR_LEN]) -> Self {
        Ipv6Address(octets)
    }

    pub const fn octets(&self) -> [u8; ADDR_LEN] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; ADDR_LEN] {
        &self.0
    }
}

impl From<[u8; ADDR_LEN]> for Ipv6Address {
    fn from(octets: [u8; ADDR_LEN]) -> Self {
        Ipv6Address(octets)
    }
}

impl From<Ipv6Address> for [u8; ADDR_LEN] {
    fn from(addr: Ipv6Address) -> Self {
        addr.0
    }
}

impl From<Ipv6Addr> for Ipv6Address {
    fn from(addr: Ipv6Addr) -> Self {
        Ipv6Address(addr.octets())
    }
}

impl From<Ipv6Address> for Ipv6Addr {
    fn from(addr: Ipv6Address) -> Self {
        Ipv6Addr::from(addr.0)
    }
}

impl TryFrom<&[u8]> for Ipv6Address {
    type Error = AddrError;

    /// Only slices of exactly [`ADDR_LEN`] bytes are accepted, nothing gets padded
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let octets: [u8; ADDR_LEN] = bytes.try_into().map_err(|_| {
            AddrError::invalid(format!(
                "address must be {} bytes long, got {}",
                ADDR_LEN,
                bytes.len()
            ))
        })?;
        Ok(Ipv6Address(octets))
    }
}

impl FromStr for Ipv6Address {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_addr(s)
    }
}

impl Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Ipv6Addr::from(self.0))
    }
}

/// Conversion between the textual and binary form of an address.
///
/// Implementations only deal with the grammar. Length limits are enforced by
/// [`parse_addr_with`] and [`format_addr_with`] before and after calling into the codec.
#[cfg_attr(test, automock)]
pub trait TextCodec {
    fn text_to_addr(&self, text: &str) -> Result<Ipv6Address, AddrError>;
    fn addr_to_text(&self, addr: &Ipv6Address) -> Result<String, AddrError>;
}

/// Parses a textual IPv6 address using [`StdNetCodec`]
pub fn parse_addr(text: &str) -> Result<Ipv6Address, AddrError> {
    parse_addr_with(&StdNetCodec, text)
}

/// Parses a textual IPv6 address given as a raw byte range
pub fn parse_addr_bytes(bytes: &[u8]) -> Result<Ipv6Address, AddrError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| AddrError::invalid("address is not valid UTF-8"))?;
    parse_addr(text)
}

pub fn parse_addr_with(codec: &dyn TextCodec, text: &str) -> Result<Ipv6Address, AddrError> {
    if text.len() > PRINT_MAX - 1 {
        return Err(AddrError::invalid(format!(
            "address text is {} characters long, at most {} are allowed",
            text.len(),
            PRINT_MAX - 1
        )));
    }
    let addr = codec.text_to_addr(text)?;
    trace!("Parsed {:?} into {:?}", text, addr.octets());
    Ok(addr)
}

/// Formats `addr` in its canonical shortest form using [`StdNetCodec`]
pub fn format_addr(addr: &Ipv6Address) -> Result<String, AddrError> {
    format_addr_with(&StdNetCodec, addr)
}

pub fn format_addr_with(codec: &dyn TextCodec, addr: &Ipv6Address) -> Result<String, AddrError> {
    let text = codec.addr_to_text(addr)?;
    if text.len() > PRINT_MAX - 1 {
        return Err(AddrError::FormatError(format!(
            "formatted address {:?} does not fit into {} bytes",
            text, PRINT_MAX
        )));
    }
    Ok(text)
}
