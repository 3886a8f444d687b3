//! IPv4 network (CIDR) type and mask helpers.
//!
//! Provides [`Network`] for representing an IPv4 network with its prefix length,
//! along with utility functions for mask calculations.

use crate::error::{Error, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ip_lookup::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Some(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Some(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Convert a dotted-decimal netmask (e.g. 255.255.0.0) to a prefix length.
///
/// Returns `None` unless the mask is contiguous ones followed by zeros.
pub fn prefix_from_netmask(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let len = bits.leading_ones() as u8;
    (get_cidr_mask(len)? == bits).then_some(len)
}

/// IPv4 network in CIDR notation.
///
/// Always holds a base address, host bits beyond the prefix are zero.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Network {
    addr: Ipv4Addr,
    prefix_len: u8,
}

impl Network {
    /// Build a network, rejecting host bits set outside the prefix.
    pub fn new(addr: Ipv4Addr, prefix_len: u8) -> Result<Network> {
        let invalid = || Error::InvalidNetwork(format!("{addr}/{prefix_len}"));
        let base = cut_addr(addr, prefix_len).ok_or_else(invalid)?;
        if base != addr {
            return Err(invalid());
        }
        Ok(Network { addr, prefix_len })
    }

    /// Combine an address and a dotted-decimal netmask, as given on the command line.
    pub fn from_netmask(addr: &str, netmask: &str) -> Result<Network> {
        format!("{addr}/{netmask}").parse()
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// The next broader network: prefix length - 1, base address masked to it.
    ///
    /// `0.0.0.0/0` has no supernet.
    pub fn supernet(&self) -> Option<Network> {
        let prefix_len = self.prefix_len.checked_sub(1)?;
        let addr = cut_addr(self.addr, prefix_len)?;
        Some(Network { addr, prefix_len })
    }

    /// Does this network contain `ip`?
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        cut_addr(ip, self.prefix_len) == Some(self.addr)
    }
}

impl FromStr for Network {
    type Err = Error;

    /// Parse `a.b.c.d/nn` or `a.b.c.d/m.m.m.m`.
    fn from_str(s: &str) -> Result<Network> {
        let invalid = || Error::InvalidNetwork(s.to_string());
        let (addr, prefix) = s.split_once('/').ok_or_else(invalid)?;
        let addr: Ipv4Addr = addr.parse().map_err(|_| invalid())?;

        let prefix_len = if prefix.contains('.') {
            let mask: Ipv4Addr = prefix.parse().map_err(|_| invalid())?;
            prefix_from_netmask(mask).ok_or_else(invalid)?
        } else {
            if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            prefix.parse::<u8>().map_err(|_| invalid())?
        };

        Network::new(addr, prefix_len).map_err(|_| invalid())
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| de::Error::custom(format!("invalid CIDR format: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Network {
        s.parse().unwrap()
    }

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0), Some(0x00000000));
        assert_eq!(get_cidr_mask(8), Some(0xFF000000));
        assert_eq!(get_cidr_mask(16), Some(0xFFFF0000));
        assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
        assert_eq!(get_cidr_mask(32), Some(0xFFFFFFFF));
        assert_eq!(get_cidr_mask(33), None);
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24), Some(Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(cut_addr(ip, 16), Some(Ipv4Addr::new(192, 168, 0, 0)));
        assert_eq!(cut_addr(ip, 8), Some(Ipv4Addr::new(192, 0, 0, 0)));
        assert_eq!(cut_addr(ip, 32), Some(ip));
        assert_eq!(cut_addr(ip, 33), None);
    }

    #[test]
    fn test_prefix_from_netmask() {
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 0, 0)), Some(16));
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 255, 128)), Some(25));
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 255, 255, 255)), Some(32));
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(0, 0, 0, 0)), Some(0));
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(255, 0, 255, 0)), None);
        assert_eq!(prefix_from_netmask(Ipv4Addr::new(0, 0, 0, 255)), None);
    }

    #[test]
    fn test_parse_prefix_and_netmask_forms() {
        let by_len = net("192.168.0.0/16");
        assert_eq!(by_len.addr(), Ipv4Addr::new(192, 168, 0, 0));
        assert_eq!(by_len.prefix_len(), 16);
        assert_eq!(net("192.168.0.0/255.255.0.0"), by_len);
        assert_eq!(
            Network::from_netmask("192.168.0.0", "255.255.0.0").unwrap(),
            by_len
        );
    }

    #[test]
    fn test_parse_rejects_invalid() {
        for s in [
            "192.168.1.1/16",
            "192.168.0.0/33",
            "192.168.0.0/",
            "192.168.0.0/+16",
            "192.168.0.0/255.0.255.0",
            "192.168.0/16",
            "300.1.1.0/24",
            "10.0.0.0",
            "garbage",
            " 10.0.0.0/8",
            "10.0.0.0/8 ",
        ] {
            assert!(
                matches!(s.parse::<Network>(), Err(Error::InvalidNetwork(_))),
                "{s} should not parse"
            );
        }
    }

    #[test]
    fn test_supernet() {
        assert_eq!(net("10.1.1.0/24").supernet(), Some(net("10.1.0.0/23")));
        assert_eq!(net("10.1.0.0/23").supernet(), Some(net("10.1.0.0/22")));
        assert_eq!(net("10.1.3.0/24").supernet(), Some(net("10.1.2.0/23")));
        assert_eq!(net("192.168.1.128/25").supernet(), Some(net("192.168.1.0/24")));
        assert_eq!(net("128.0.0.0/1").supernet(), Some(net("0.0.0.0/0")));
        assert_eq!(net("0.0.0.0/0").supernet(), None);
    }

    #[test]
    fn test_contains() {
        let n = net("10.20.0.0/16");
        assert!(n.contains(Ipv4Addr::new(10, 20, 255, 1)));
        assert!(!n.contains(Ipv4Addr::new(10, 21, 0, 1)));
    }

    #[test]
    fn test_serde_as_cidr_string() {
        let n = net("172.16.0.0/12");
        assert_eq!(serde_json::to_string(&n).unwrap(), r#""172.16.0.0/12""#);
        let back: Network = serde_json::from_str(r#""172.16.0.0/12""#).unwrap();
        assert_eq!(back, n);
        assert!(serde_json::from_str::<Network>(r#""172.16.0.1/12""#).is_err());
    }
}
