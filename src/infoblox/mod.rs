//! Infoblox WAPI interaction.
//!
//! - [`http`] - Transport seam and the reqwest implementation
//! - [`client`] - Address and network lookups

mod client;
mod http;

// Re-export public types and functions
pub use client::{NetworkLookup, WapiClient, MIN_PREFIX_LENGTH};
pub use http::{HttpTransport, Reply, Transport};
