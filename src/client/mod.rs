//! HTTP client for the Exa search endpoint.
//!
//! One request per call: no retries, no caching, no fallback. Every failure
//! surfaces to the caller as an [`Error`].

pub mod config;

pub use config::{API_KEY_HEADER, ClientConfig, DEFAULT_ENDPOINT};

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;

use crate::auth::{self, Credential, CredentialProvider, ExplicitProvider};
use crate::search::SearchPayload;
use crate::types::SearchResponse;
use crate::{Error, Result};

pub const MISSING_CREDENTIAL: &str =
    "EXA_API_KEY is required. Set it in environment variables or pass it in config.";

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
    credential: Option<Credential>,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Post `payload` and return the response body as parsed JSON.
    pub async fn search(&self, payload: &SearchPayload) -> Result<SearchResponse> {
        let credential = self
            .credential
            .as_ref()
            .ok_or_else(|| Error::Config(MISSING_CREDENTIAL.into()))?;

        tracing::debug!(
            endpoint = %self.config.endpoint,
            search_type = ?payload.search_type,
            num_results = payload.num_results,
            "Sending search request"
        );

        let response = self
            .http
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, credential.expose())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Search request rejected");
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(SearchResponse::new(value))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .field("has_credential", &self.has_credential())
            .finish()
    }
}

#[derive(Default)]
pub struct ClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
    credential_provider: Option<Box<dyn CredentialProvider>>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Override the search URL, e.g. to point at a proxy or a mock server.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.credential_provider(ExplicitProvider::api_key(key))
    }

    pub fn credential(self, credential: Credential) -> Self {
        self.credential_provider(ExplicitProvider::new(credential))
    }

    /// Replace the default explicit-then-environment lookup.
    pub fn credential_provider(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.credential_provider = Some(Box::new(provider));
        self
    }

    /// Use a preconfigured HTTP client. `timeout` is ignored in that case.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Resolve the credential and assemble the client.
    ///
    /// A missing credential is not an error here; it is reported by
    /// [`Client::search`] before any request is attempted.
    pub fn build(self) -> Result<Client> {
        let mut config = match self.endpoint.as_deref() {
            Some(endpoint) => ClientConfig::new(endpoint)?,
            None => ClientConfig::default(),
        };
        config.timeout = self.timeout;

        let provider = self
            .credential_provider
            .unwrap_or_else(|| Box::new(auth::default_chain(None)));
        let credential = match provider.resolve() {
            Ok(credential) => Some(credential),
            Err(e) => {
                tracing::debug!(provider = provider.name(), error = %e, "No credential resolved");
                None
            }
        };

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = config.timeout {
                    builder = builder.timeout(timeout);
                }
                build_http(builder)?
            }
        };

        Ok(Client {
            http,
            config,
            credential,
        })
    }
}

/// Setup failures of the HTTP stack are configuration errors, not transport.
fn build_http(builder: reqwest::ClientBuilder) -> Result<reqwest::Client> {
    builder
        .build()
        .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))
}
