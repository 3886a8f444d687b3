//! Infoblox WAPI lookups.
//!
//! Handles the `ipv4address` and `network` searches, including widening a
//! network search to its supernets when Infoblox has no exact match.

use super::http::{HttpTransport, Reply, Transport};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{LookupResult, Network};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::net::Ipv4Addr;

/// Widening never queries a prefix shorter than this.
pub const MIN_PREFIX_LENGTH: u8 = 8;

/// Outcome of a network search.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkLookup {
    /// Infoblox returned records for `network` (the requested one or a supernet).
    Found {
        network: Network,
        records: LookupResult,
    },
    /// Nothing found down to `widest`, the last network queried.
    NotFound { widest: Network },
}

pub struct WapiClient<T> {
    base_url: String,
    transport: T,
}

impl WapiClient<HttpTransport> {
    /// Client for the configured WAPI endpoint using reqwest.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(WapiClient::new(
            config.api_url.clone(),
            HttpTransport::new(config)?,
        ))
    }
}

impl<T: Transport> WapiClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        WapiClient {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn ipv4address_url(&self, ip: Ipv4Addr) -> String {
        format!("{}ipv4address?ip_address={ip}", self.base_url)
    }

    fn network_url(&self, network: Network) -> String {
        format!("{}network?network={network}", self.base_url)
    }

    /// Look up a single address, the full payload is returned on status 200.
    pub async fn ipv4address(&self, ip: Ipv4Addr) -> Result<Value> {
        let url = self.ipv4address_url(ip);
        let reply = self.transport.get(&url).await?;
        check_status(&reply, "IP lookup")?;
        parse_body(&url, &reply.body)
    }

    /// Look up a network, widening to supernets while Infoblox returns nothing.
    ///
    /// The requested network is always queried. Supernets are queried one prefix
    /// length at a time, down to [`MIN_PREFIX_LENGTH`].
    pub async fn network(&self, network: Network) -> Result<NetworkLookup> {
        let mut current = network;
        loop {
            let url = self.network_url(current);
            let reply = self.transport.get(&url).await?;
            check_status(&reply, "Network lookup")?;
            let records: LookupResult = parse_body(&url, &reply.body)?;

            if !records.is_empty() {
                log::info!("found {} record(s) for {current}", records.len());
                return Ok(NetworkLookup::Found {
                    network: current,
                    records,
                });
            }

            match current
                .supernet()
                .filter(|s| s.prefix_len() >= MIN_PREFIX_LENGTH)
            {
                Some(supernet) => {
                    log::info!("no records for {current}, trying supernet {supernet}");
                    current = supernet;
                }
                None => {
                    log::info!("no records for {current}, stopping at /{MIN_PREFIX_LENGTH}");
                    return Ok(NetworkLookup::NotFound { widest: current });
                }
            }
        }
    }

    /// Network recorded for `ip`, read from the first `ipv4address` record.
    pub async fn network_of_address(&self, ip: Ipv4Addr) -> Result<Network> {
        let url = self.ipv4address_url(ip);
        let reply = self.transport.get(&url).await?;
        check_status(&reply, &format!("Network lookup for IP {ip}"))?;
        let records: LookupResult = parse_body(&url, &reply.body)?;
        network_from_records(&url, ip, &records)
    }
}

/// Extract the `network` of the first record of an `ipv4address` result.
fn network_from_records(url: &str, ip: Ipv4Addr, records: &LookupResult) -> Result<Network> {
    let record = records
        .first_ip_record()
        .ok_or_else(|| Error::NoNetworkForAddress(ip.to_string()))?
        .map_err(|e| Error::InvalidResponse {
            url: url.to_string(),
            path: "[0].network".to_string(),
            reason: e.to_string(),
        })?;
    record
        .network
        .ok_or_else(|| Error::NoNetworkForAddress(ip.to_string()))
}

fn check_status(reply: &Reply, action: &str) -> Result<()> {
    if reply.is_ok() {
        Ok(())
    } else {
        log::warn!("{action} returned status {}", reply.status);
        Err(Error::HttpStatus {
            status: reply.status,
            action: action.to_string(),
        })
    }
}

fn parse_body<D: DeserializeOwned>(url: &str, body: &str) -> Result<D> {
    let mut deserializer = serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("BODY START:\n\n{}\n\nBODY END\n", body);
        Error::InvalidResponse {
            url: url.to_string(),
            path: e.path().to_string(),
            reason: e.inner().to_string(),
        }
    })
}
