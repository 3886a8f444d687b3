//! Domain models for IP lookups.
//!
//! - [`Network`] - IPv4 network with CIDR notation support
//! - [`IpRecord`] and [`LookupResult`] - records returned by Infoblox WAPI

mod ipv4;
mod record;

// Re-export public types
pub use ipv4::{cut_addr, get_cidr_mask, prefix_from_netmask, Network, MAX_LENGTH};
pub use record::{IpRecord, LookupResult};
