//! Query Infoblox WAPI for information about an IPv4 address or network.

pub mod args;
pub mod config;
pub mod error;
pub mod infoblox;
pub mod models;
pub mod output;

use args::Target;
use infoblox::{NetworkLookup, Transport, WapiClient};
use models::Network;
use output::{print_error, print_section, IP_INFO_HEADER, NETWORK_INFO_HEADER};
use serde_json::Value;
use std::io::Write;

pub use error::{Error, Result};

/// Configure log4rs from `path`, logging stays off if the file cannot be loaded.
pub fn init_logging(path: &str) -> bool {
    log4rs::init_file(path, Default::default()).is_ok()
}

/// Report `err` to `out` and return the process exit status for it.
pub fn report_error<W: Write>(err: &Error, out: &mut W) -> u8 {
    log::warn!("{err}");
    if let Err(e) = print_error(out, err) {
        log::error!("cannot write error message: {e}");
    }
    err.exit_code()
}

/// Look up `target` and print the results to `out`.
///
/// An address prints its own record, then the network Infoblox records for it.
/// Stops at the first failed request.
pub async fn run<T: Transport, W: Write>(
    client: &WapiClient<T>,
    target: Target,
    out: &mut W,
) -> Result<()> {
    log::info!("#Start run({target:?})");
    match target {
        Target::Address(ip) => {
            let payload = client.ipv4address(ip).await?;
            print_section(out, IP_INFO_HEADER, &payload)?;

            let network = client.network_of_address(ip).await?;
            if !network.contains(ip) {
                log::warn!("network {network} recorded for {ip} does not contain it");
            }
            print_network(client, network, out).await
        }
        Target::Network(network) => print_network(client, network, out).await,
    }
}

async fn print_network<T: Transport, W: Write>(
    client: &WapiClient<T>,
    network: Network,
    out: &mut W,
) -> Result<()> {
    match client.network(network).await? {
        NetworkLookup::Found {
            network: found,
            records,
        } => {
            if found != network {
                log::info!("{network} not in Infoblox, showing supernet {found}");
            }
            print_section(out, NETWORK_INFO_HEADER, &Value::from(records))?;
        }
        NetworkLookup::NotFound { widest } => {
            log::info!("no network found for {network}, widest tried {widest}");
        }
    }
    Ok(())
}
