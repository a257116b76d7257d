//! Network masks and prefix membership.

use crate::{Ipv6Address, ADDR_LEN, PREFIX_MAX};

// Top `bits` bits of a byte, `bits` < 8
fn partial_byte_mask(bits: u8) -> u8 {
    debug_assert!(bits < 8);
    !(0xffu8 >> bits)
}

/// Builds the network mask with the leftmost `prefix` bits set.
///
/// # Panics
/// If `prefix` is greater than 128. Validate untrusted input with
/// [`parse_prefix`](crate::parse_prefix) first.
pub fn mask_from_prefix(prefix: u8) -> Ipv6Address {
    assert!(prefix <= PREFIX_MAX, "prefix {} out of range", prefix);

    let quot = usize::from(prefix / 8);
    let rem = prefix % 8;

    let mut mask = [0u8; ADDR_LEN];
    mask[..quot].fill(0xff);
    if rem != 0 {
        mask[quot] = partial_byte_mask(rem);
    }
    Ipv6Address::new(mask)
}

/// Returns whether `addr1` and `addr2` agree on their first `prefix` bits.
///
/// # Panics
/// If `prefix` is greater than 128.
pub fn same_network(addr1: &Ipv6Address, addr2: &Ipv6Address, prefix: u8) -> bool {
    assert!(prefix <= PREFIX_MAX, "prefix {} out of range", prefix);

    let (a, b) = (addr1.as_bytes(), addr2.as_bytes());

    let quot = usize::from(prefix / 8);
    if a[..quot] != b[..quot] {
        return false;
    }

    let rem = prefix % 8;
    if rem == 0 {
        return true;
    }

    let t = partial_byte_mask(rem);
    (a[quot] & t) == (b[quot] & t)
}

/// Clears every bit of `addr` past the first `prefix` bits.
///
/// # Panics
/// If `prefix` is greater than 128.
pub fn network_addr(addr: &Ipv6Address, prefix: u8) -> Ipv6Address {
    let mask = mask_from_prefix(prefix);
    let mut out = addr.octets();
    for (byte, m) in out.iter_mut().zip(mask.as_bytes()) {
        *byte &= m;
    }
    Ipv6Address::new(out)
}

/// Recovers the prefix length from a contiguous network mask, `None` if the set bits have gaps.
pub fn prefix_from_mask(mask: &Ipv6Address) -> Option<u8> {
    let mask = u128::from_be_bytes(mask.octets());
    let prefix = mask.leading_ones();
    if mask.checked_shl(prefix).unwrap_or(0) == 0 {
        Some(prefix as u8)
    } else {
        None
    }
}
