/// Length of an IPv6 address in bytes
pub const ADDR_LEN: usize = 16;
/// Largest valid prefix length
pub const PREFIX_MAX: u8 = 128;
/// Size of a buffer holding the longest textual address, terminator included (`INET6_ADDRSTRLEN`)
pub const PRINT_MAX: usize = 46;

pub mod addr;
mod error;
pub mod ifaddr;
pub mod mask;
pub mod number;
pub mod prefix;

pub use addr::{format_addr, parse_addr, Ipv6Address, StdNetCodec, TextCodec};
pub use error::AddrError;
pub use ifaddr::{parse_ifaddr, InterfaceAddress, Scope};
pub use mask::{mask_from_prefix, network_addr, prefix_from_mask, same_network};
pub use prefix::parse_prefix;
