//! Public/private IPv4 classification.
//!
//! Classifies resolved addresses against the RFC 1918 private-use ranges.
//! Classification parses the address and checks CIDR containment rather than
//! matching textual prefixes, so unusual representations (leading zeros,
//! non-dotted forms) are surfaced as malformed instead of sliding through as
//! public.

use std::net::Ipv4Addr;

/// The private-use IPv4 ranges that are never surfaced in the inventory,
/// as `(network, prefix length)` pairs.
pub const PRIVATE_IPV4_RANGES: [(Ipv4Addr, u8); 3] = [
    (Ipv4Addr::new(10, 0, 0, 0), 8),
    (Ipv4Addr::new(172, 16, 0, 0), 12),
    (Ipv4Addr::new(192, 168, 0, 0), 16),
];

/// Classification verdict for a resolved address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpClass {
    /// Outside every private-use range
    Public,
    /// Inside one of the private-use ranges
    Private,
    /// Not parseable as a dotted-quad IPv4 address
    Malformed,
}

fn in_prefix(ip: Ipv4Addr, network: Ipv4Addr, prefix: u8) -> bool {
    let mask = if prefix == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(prefix))
    };
    (u32::from(ip) & mask) == (u32::from(network) & mask)
}

/// Returns `true` if the address falls outside every private-use range.
///
/// Pure function; the range table is the process-wide
/// [`PRIVATE_IPV4_RANGES`] constant.
pub fn is_public_ipv4(ip: Ipv4Addr) -> bool {
    !PRIVATE_IPV4_RANGES
        .iter()
        .any(|&(network, prefix)| in_prefix(ip, network, prefix))
}

/// Classifies an address string as public, private, or malformed.
///
/// How malformed verdicts are handled (emitted as public, or dropped with a
/// warning) is the caller's policy decision.
pub fn classify_address(addr: &str) -> IpClass {
    match addr.parse::<Ipv4Addr>() {
        Ok(ip) if is_public_ipv4(ip) => IpClass::Public,
        Ok(_) => IpClass::Private,
        Err(_) => IpClass::Malformed,
    }
}
