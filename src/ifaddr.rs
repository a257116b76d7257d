use std::fmt::{self, Display};
use std::str::FromStr;

use ipnet::{Ipv6Net, PrefixLenError};
use log::trace;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::addr::{parse_addr_with, StdNetCodec, TextCodec};
use crate::mask::{mask_from_prefix, network_addr, same_network};
use crate::number::parse_unsigned;
use crate::prefix::parse_prefix;
use crate::{AddrError, Ipv6Address, PREFIX_MAX};

// from /etc/iproute2/rt_scopes
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
enum ScopeName {
    Global,
    Site,
    Link,
    Host,
}

impl ScopeName {
    fn scope(self) -> Scope {
        match self {
            ScopeName::Global => Scope::GLOBAL,
            ScopeName::Site => Scope::SITE,
            ScopeName::Link => Scope::LINK,
            ScopeName::Host => Scope::HOST,
        }
    }
}

/// Routing scope of an address.
///
/// Carried as plain data, nothing in this crate assigns or validates it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Scope(pub u8);

impl Scope {
    pub const GLOBAL: Scope = Scope(0);
    pub const SITE: Scope = Scope(200);
    pub const LINK: Scope = Scope(253);
    pub const HOST: Scope = Scope(254);

    /// Name of the scope if it is one of the well-known ones
    pub fn name(&self) -> Option<&'static str> {
        ScopeName::iter()
            .find(|n| n.scope() == *self)
            .map(|n| n.into())
    }
}

impl FromStr for Scope {
    type Err = AddrError;

    /// Accepts `global`, `site`, `link`, `host` or a number up to 255
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(name) = ScopeName::from_str(s) {
            return Ok(name.scope());
        }
        parse_unsigned(s.as_bytes())
            .and_then(|v| u8::try_from(v).ok())
            .map(Scope)
            .ok_or_else(|| AddrError::invalid(format!("`{}` is not a valid scope", s)))
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// An address assigned to an interface together with its prefix length
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceAddress {
    address: Ipv6Address,
    prefix: u8,
    scope: Scope,
}

impl InterfaceAddress {
    /// Returns `InvalidFormat` if `prefix` is greater than 128
    pub fn new(address: Ipv6Address, prefix: u8) -> Result<Self, AddrError> {
        if prefix > PREFIX_MAX {
            return Err(AddrError::invalid(format!(
                "prefix {} is greater than {}",
                prefix, PREFIX_MAX
            )));
        }
        Ok(InterfaceAddress {
            address,
            prefix,
            scope: Scope::default(),
        })
    }

    pub fn with_scope(self, scope: Scope) -> Self {
        InterfaceAddress { scope, ..self }
    }

    pub fn address(&self) -> Ipv6Address {
        self.address
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn mask(&self) -> Ipv6Address {
        mask_from_prefix(self.prefix)
    }

    /// Address with all host bits cleared
    pub fn network(&self) -> Ipv6Address {
        network_addr(&self.address, self.prefix)
    }

    /// Whether `addr` lies within this address' network
    pub fn contains(&self, addr: &Ipv6Address) -> bool {
        same_network(&self.address, addr, self.prefix)
    }
}

/// Parses an `address/prefix` token such as `2001:db8::1/64`.
///
/// The token is split at the first `/`. The scope of the result is left at its default.
pub fn parse_ifaddr(text: &str) -> Result<InterfaceAddress, AddrError> {
    parse_ifaddr_with(&StdNetCodec, text)
}

pub fn parse_ifaddr_with(codec: &dyn TextCodec, text: &str) -> Result<InterfaceAddress, AddrError> {
    let Some((addr_s, prefix_s)) = text.split_once('/') else {
        return Err(AddrError::invalid(format!("no '/' found in `{}`", text)));
    };
    trace!("Splitting {:?} into {:?} and {:?}", text, addr_s, prefix_s);

    let address = parse_addr_with(codec, addr_s)?;
    let prefix = parse_prefix(prefix_s)?;
    Ok(InterfaceAddress {
        address,
        prefix,
        scope: Scope::default(),
    })
}

impl FromStr for InterfaceAddress {
    type Err = AddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ifaddr(s)
    }
}

impl Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix)
    }
}

impl From<Ipv6Net> for InterfaceAddress {
    fn from(net: Ipv6Net) -> Self {
        InterfaceAddress {
            address: net.addr().into(),
            prefix: net.prefix_len(),
            scope: Scope::default(),
        }
    }
}

impl TryFrom<InterfaceAddress> for Ipv6Net {
    type Error = PrefixLenError;

    fn try_from(ifaddr: InterfaceAddress) -> Result<Self, Self::Error> {
        Ipv6Net::new(ifaddr.address.into(), ifaddr.prefix)
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv6Addr;

    use super::*;

    #[test]
    fn parses_address_and_prefix() {
        let ifaddr = parse_ifaddr("2001:db8::1/64").unwrap();
        assert_eq!(
            Ipv6Addr::from(ifaddr.address()),
            Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)
        );
        assert_eq!(ifaddr.prefix(), 64);
        assert_eq!(ifaddr.scope(), Scope::GLOBAL);
    }

    #[test]
    fn parses_prefix_bounds() {
        assert_eq!(parse_ifaddr("::/0").unwrap().prefix(), 0);
        assert_eq!(parse_ifaddr("::1/128").unwrap().prefix(), 128);
        assert!(parse_ifaddr("::1/129").is_err());
    }

    #[test]
    fn rejects_malformed_tokens() {
        for text in [
            "2001:db8::1",
            "2001:db8::1/",
            "/64",
            "/",
            "",
            "2001:db8::1/64/64",
            "2001:db8::1//64",
            "2001:db8::1/-1",
            "2001:db8::g/64",
            "2001:db8::1 /64",
        ] {
            assert!(
                matches!(parse_ifaddr(text), Err(AddrError::InvalidFormat(_))),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn displays_canonical() {
        let ifaddr: InterfaceAddress = "2001:DB8:0:0::1/048".parse().unwrap();
        assert_eq!(ifaddr.to_string(), "2001:db8::1/48");
    }

    #[test]
    fn derives_mask_and_network() {
        let ifaddr = parse_ifaddr("2001:db8:abcd:12::1/56").unwrap();
        assert_eq!(ifaddr.mask().to_string(), "ffff:ffff:ffff:ff00::");
        assert_eq!(ifaddr.network().to_string(), "2001:db8:abcd::");
        assert!(ifaddr.contains(&"2001:db8:abcd:ff::".parse().unwrap()));
        assert!(!ifaddr.contains(&"2001:db8:abcd:100::".parse().unwrap()));
    }

    #[test]
    fn new_checks_prefix() {
        assert!(InterfaceAddress::new(Ipv6Address::UNSPECIFIED, 128).is_ok());
        assert!(InterfaceAddress::new(Ipv6Address::UNSPECIFIED, 129).is_err());
    }

    #[test]
    fn converts_to_and_from_ipnet() {
        let ifaddr = parse_ifaddr("fd42::5/64").unwrap().with_scope(Scope::LINK);
        let net = Ipv6Net::try_from(ifaddr).unwrap();
        assert_eq!(net, "fd42::5/64".parse::<Ipv6Net>().unwrap());
        let back = InterfaceAddress::from(net);
        assert_eq!(back.address(), ifaddr.address());
        assert_eq!(back.prefix(), 64);
        assert_eq!(back.scope(), Scope::GLOBAL);
    }

    #[test]
    fn scope_names() {
        assert_eq!("link".parse::<Scope>().unwrap(), Scope::LINK);
        assert_eq!("200".parse::<Scope>().unwrap(), Scope::SITE);
        assert_eq!("17".parse::<Scope>().unwrap(), Scope(17));
        assert!("256".parse::<Scope>().is_err());
        assert!("galaxy".parse::<Scope>().is_err());

        assert_eq!(Scope::HOST.to_string(), "host");
        assert_eq!(Scope::GLOBAL.to_string(), "global");
        assert_eq!(Scope(17).to_string(), "17");
        assert_eq!(Scope::SITE.name(), Some("site"));
    }
}
