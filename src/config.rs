//! Connection settings read from the environment.

use crate::error::{Error, Result};
use std::time::Duration;

pub const API_URL_VAR: &str = "INFOBLOX_API_URL";
pub const API_USER_VAR: &str = "INFOBLOX_API_USER";
pub const API_PASSWORD_VAR: &str = "INFOBLOX_API_PASSWORD";
pub const API_TIMEOUT_VAR: &str = "INFOBLOX_API_TIMEOUT";

/// Request timeout when `INFOBLOX_API_TIMEOUT` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const CONFIG_MISSING_UNIX_MSG: &str = "
 ### Error ###
    \t Please set the required environment variables first.
    \t export INFOBLOX_API_URL=https://<URL>/wapi/v<version>/
    \t export INFOBLOX_API_USER=<api username>
    \t export INFOBLOX_API_PASSWORD=<api password>
    ";

pub const CONFIG_MISSING_WINDOWS_MSG: &str = "
 ### Error ###
    \t Please set the required environment variables first.
    \t set INFOBLOX_API_URL=https://<URL>/wapi/v<version>/
    \t set INFOBLOX_API_USER=<api username>
    \t set INFOBLOX_API_PASSWORD=<api password>
    ";

/// Instructions for setting the variables in the current platform's shell.
pub fn config_missing_message() -> &'static str {
    if cfg!(windows) {
        CONFIG_MISSING_WINDOWS_MSG
    } else {
        CONFIG_MISSING_UNIX_MSG
    }
}

#[derive(Clone)]
pub struct Config {
    /// WAPI base url including version path, always ends with `/`.
    pub api_url: String,
    pub user: String,
    pub password: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_url", &self.api_url)
            .field("user", &self.user)
            .field("password", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Config {
    /// Read the settings from the process environment.
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the settings from any variable source, empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_url = get(API_URL_VAR);
        let user = get(API_USER_VAR);
        let password = get(API_PASSWORD_VAR);

        let (api_url, user, password) = match (api_url, user, password) {
            (Some(u), Some(n), Some(p)) => (u, n, p),
            (u, n, p) => {
                let missing = [
                    (API_URL_VAR, u.is_none()),
                    (API_USER_VAR, n.is_none()),
                    (API_PASSWORD_VAR, p.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, is_missing)| is_missing.then_some(name))
                .collect();
                return Err(Error::ConfigMissing(missing));
            }
        };

        let timeout = match get(API_TIMEOUT_VAR) {
            Some(secs) => {
                let secs: u64 = secs.trim().parse().map_err(|e| Error::ConfigInvalid {
                    name: API_TIMEOUT_VAR,
                    reason: format!("{secs:?} is not a number of seconds: {e}"),
                })?;
                if secs == 0 {
                    return Err(Error::ConfigInvalid {
                        name: API_TIMEOUT_VAR,
                        reason: "timeout must be at least 1 second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let mut api_url = api_url.trim().to_string();
        if !api_url.ends_with('/') {
            log::warn!("{API_URL_VAR} has no trailing '/', appending one");
            api_url.push('/');
        }

        Ok(Config {
            api_url,
            user,
            password,
            timeout,
        })
    }
}
