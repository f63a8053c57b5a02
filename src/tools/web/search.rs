//! WebSearch tool - Exa web search for agents.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::auth;
use crate::client::Client;
use crate::search::{SearchConfiguration, SearchPayload};
use crate::tools::SchemaTool;
use crate::types::{SearchResponse, ToolResult};
use crate::{Error, Result};

pub const MAX_QUERY_CHARS: usize = 500;

/// Input for the webSearch tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WebSearchInput {
    /// The web search query - be specific and clear about what you're looking for
    #[schemars(length(min = 1, max = 500))]
    pub query: String,
}

/// Exa-backed web search exposed through [`SchemaTool`].
///
/// The configuration is fixed at construction; each call only supplies a
/// query. The response JSON is returned exactly as the API sent it.
#[derive(Debug, Clone)]
pub struct WebSearchTool {
    config: SearchConfiguration,
    client: Client,
}

impl WebSearchTool {
    /// Build a tool for the default endpoint.
    ///
    /// The key is resolved now: `config.api_key` if set, otherwise
    /// `EXA_API_KEY`. A missing key only fails when a search is attempted.
    pub fn new(config: SearchConfiguration) -> Result<Self> {
        let client = Client::builder()
            .credential_provider(auth::default_chain(config.api_key.as_ref()))
            .build()?;
        Ok(Self::with_client(config, client))
    }

    /// Use an already configured client. `config.api_key` is ignored.
    pub fn with_client(config: SearchConfiguration, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &SearchConfiguration {
        &self.config
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn payload(&self, query: &str) -> SearchPayload {
        SearchPayload::build(&self.config, query)
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        validate_query(query)?;
        self.client.search(&self.payload(query)).await
    }
}

fn validate_query(query: &str) -> Result<()> {
    let len = query.chars().count();
    if len == 0 {
        return Err(Error::InvalidInput("query must not be empty".into()));
    }
    if len > MAX_QUERY_CHARS {
        return Err(Error::InvalidInput(format!(
            "query must be at most {} characters, got {}",
            MAX_QUERY_CHARS, len
        )));
    }
    Ok(())
}

#[async_trait]
impl SchemaTool for WebSearchTool {
    type Input = WebSearchInput;

    const NAME: &'static str = "webSearch";
    const DESCRIPTION: &'static str = "Search the web for code docs, current information, news, articles, and content. Use this when you need up-to-date information or facts from the internet. Performs real-time web searches and can scrape content from specific URLs.";

    async fn handle(&self, input: WebSearchInput) -> ToolResult {
        match self.search(&input.query).await {
            Ok(response) => ToolResult::Success(response.into_value()),
            Err(e) => {
                tracing::warn!(error = %e, "webSearch failed");
                ToolResult::error(e)
            }
        }
    }
}

/// Create the webSearch tool, resolving the key from `config` or the
/// environment.
pub fn web_search(config: SearchConfiguration) -> Result<WebSearchTool> {
    WebSearchTool::new(config)
}
