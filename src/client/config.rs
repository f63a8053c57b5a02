//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::{Error, Result};

/// Exa search endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.exa.ai/search";
pub const API_KEY_HEADER: &str = "x-api-key";

/// Transport settings. Nothing here is read from the environment.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Full URL requests are posted to.
    pub endpoint: Url,
    /// Whole-request timeout. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(Self {
            endpoint: parse_endpoint(endpoint)?,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: None,
        }
    }
}

pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", endpoint, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "invalid endpoint '{}': unsupported scheme '{}'",
            endpoint, other
        ))),
    }
}
