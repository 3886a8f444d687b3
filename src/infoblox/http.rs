//! HTTP transport for WAPI requests.
//!
//! [`Transport`] is the seam between lookup logic and the network; [`HttpTransport`]
//! is the reqwest implementation used by the binary.

use crate::config::Config;
use crate::error::{Error, Result};
use colored::Colorize;
use reqwest::Client;
use std::time::Duration;

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Reply {
        Reply {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs one authenticated GET and waits for the complete reply.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<Reply>;
}

/// Basic-auth reqwest client with a request timeout.
pub struct HttpTransport {
    client: Client,
    user: String,
    password: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<HttpTransport> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("ip-lookup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport {
                url: config.api_url.clone(),
                reason: format!("cannot build http client: {e}"),
            })?;
        Ok(HttpTransport {
            client,
            user: config.user.clone(),
            password: config.password.clone(),
            timeout: config.timeout,
        })
    }

    fn map_error(&self, url: &str, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            Error::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Reply> {
        log::debug!("GET {url}", url = url.on_blue());
        let response = self
            .client
            .get(url)
            .basic_auth(&self.user, Some(&self.password))
            .send()
            .await
            .map_err(|e| {
                log::warn!("{failed} GET {url}: {e}", failed = "failed".on_red());
                self.map_error(url, e)
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(url, e))?;
        log::debug!("status={status} body.len()={}", body.len());
        Ok(Reply { status, body })
    }
}
