//! `address:port` column decoding.

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::num::ParseIntError;

use crate::error::FormatError;

/// Token length of an IPv4 `address:port` column.
const V4_TOKEN_LEN: usize = 13;

/// Token length of an IPv6 `address:port` column.
const V6_TOKEN_LEN: usize = 37;

/// Fixed-width `<hex-address>:<hex-port>` grammar.
static ADDR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<addr>[0-9A-Fa-f]{8}|[0-9A-Fa-f]{32}):(?P<port>[0-9A-Fa-f]{4})$").unwrap()
});

/// Decode an `address:port` token into an IP address and a port.
///
/// # Example
/// ```
/// use procnet::decode::parse_addr;
/// use std::net::{IpAddr, Ipv4Addr};
///
/// let (ip, port) = parse_addr("7F000001:1F90").unwrap();
/// assert_eq!(ip, IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)));
/// assert_eq!(port, 8080);
/// ```
pub fn parse_addr(token: &str) -> Result<(IpAddr, u16), FormatError> {
    if token.len() != V4_TOKEN_LEN && token.len() != V6_TOKEN_LEN {
        return Err(FormatError::InvalidAddressLength(token.len()));
    }

    let caps = ADDR_PATTERN
        .captures(token)
        .ok_or_else(|| FormatError::InvalidAddress(token.to_string()))?;
    let addr = &caps["addr"];
    let port = &caps["port"];

    let invalid = |_: ParseIntError| FormatError::InvalidAddress(token.to_string());

    let ip = if addr.len() == 8 {
        IpAddr::V4(Ipv4Addr::from(hex_octets::<4>(addr).map_err(invalid)?))
    } else {
        IpAddr::V6(Ipv6Addr::from(hex_octets::<16>(addr).map_err(invalid)?))
    };

    let port = u16::from_str_radix(port, 16).map_err(invalid)?;

    Ok((ip, port))
}

/// Decode `2 * N` hex digits into bytes, one byte per pair, in order.
///
/// `hex` comes from an `ADDR_PATTERN` capture of exactly `2 * N` ASCII digits.
fn hex_octets<const N: usize>(hex: &str) -> Result<[u8; N], ParseIntError> {
    let mut octets = [0u8; N];
    for (i, byte) in octets.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)?;
    }
    Ok(octets)
}
