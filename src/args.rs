//! Command-line argument resolution.

use crate::error::{Error, Result};
use crate::models::Network;
use std::ffi::OsString;
use std::net::Ipv4Addr;

pub const USAGE_MSG: &str = "
 Usage:
    \t ip-lookup 192.168.1.1
    \t ip-lookup 192.168.0.0/16
    \t ip-lookup 192.168.0.0 255.255.0.0
    \t ip-lookup 192.168.0.0/255.255.0.0
    ";

/// What the user asked to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Address(Ipv4Addr),
    Network(Network),
}

impl Target {
    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            Target::Address(ip) => Some(*ip),
            Target::Network(_) => None,
        }
    }

    pub fn network(&self) -> Option<Network> {
        match self {
            Target::Address(_) => None,
            Target::Network(net) => Some(*net),
        }
    }
}

/// Resolve arguments (program name excluded) into a single [`Target`].
///
/// Accepted forms: `<ip>`, `<cidr>` and `<network-address> <netmask>` where the
/// netmask starts with `255.`.
pub fn resolve<S: AsRef<str>>(args: &[S]) -> Result<Target> {
    match args {
        [] => Err(Error::NoArguments),
        [one] => {
            let one = one.as_ref();
            if one.contains('/') {
                Ok(Target::Network(one.parse()?))
            } else {
                let ip = one
                    .parse()
                    .map_err(|_| Error::InvalidAddress(one.to_string()))?;
                Ok(Target::Address(ip))
            }
        }
        [addr, mask] if mask.as_ref().starts_with("255.") => Ok(Target::Network(
            Network::from_netmask(addr.as_ref(), mask.as_ref())?,
        )),
        _ => Err(Error::TooManyArguments),
    }
}

/// Resolve raw process arguments, e.g. from `std::env::args_os().skip(1)`.
///
/// Bytes that are not UTF-8 become U+FFFD, which no address or netmask accepts.
pub fn resolve_os<I>(args: I) -> Result<Target>
where
    I: IntoIterator<Item = OsString>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    resolve(&args)
}
