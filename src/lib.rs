//! # exa-search-tool
//!
//! Exa web search exposed as a tool for AI agents.
//!
//! The crate turns a [`SearchConfiguration`] and a query into the exact JSON
//! body the Exa `/search` endpoint expects, sends it, and hands the response
//! back untouched. Nothing is cached, retried, or post-processed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> Result<(), exa_search_tool::Error> {
//!     // Reads EXA_API_KEY.
//!     let response = exa_search_tool::search("latest Rust release notes").await?;
//!     println!("{} results", response.result_count());
//!     Ok(())
//! }
//! ```
//!
//! ## As an agent tool
//!
//! ```rust,no_run
//! use exa_search_tool::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let tool = web_search(
//!         SearchConfiguration::new()
//!             .with_num_results(5)
//!             .with_contents(ContentSpecification::new().with_summary(true)),
//!     )?;
//!
//!     let definition = tool.definition();
//!     println!("{}", definition.input_schema);
//!
//!     let result = tool
//!         .execute(serde_json::json!({"query": "what happened in SF last week"}))
//!         .await;
//!     println!("{}", result.text());
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod auth;
pub mod client;
pub mod prelude;
pub mod search;
pub mod tools;
pub mod types;

// Re-exports for convenience
pub use auth::{ChainProvider, Credential, CredentialProvider, EnvironmentProvider, ExplicitProvider};
pub use client::{Client, ClientBuilder, ClientConfig, DEFAULT_ENDPOINT};
pub use search::{
    Category, ContentSpecification, LiveCrawl, SearchConfiguration, SearchPayload, SearchType,
    build_payload,
};
pub use tools::{SchemaTool, Tool, WebSearchInput, WebSearchTool, web_search};
pub use types::{ApiResponse, SearchResponse, SearchResult, ToolDefinition, ToolError, ToolResult};

/// Error type for exa-search-tool operations.
///
/// Every failure of a search invocation maps to exactly one variant; none is
/// retried inside the crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Missing credential or invalid client settings. Raised before any
    /// network activity.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool input outside the accepted schema.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Network connectivity or request failed.
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Exa returned a non-success status.
    #[error("Exa API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// Response body was not valid JSON.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Credential or client setup problems
    Configuration,
    /// Rejected tool input
    Input,
    /// Could not reach the endpoint
    Transport,
    /// Endpoint answered with an error status
    Remote,
    /// Endpoint answered with something other than JSON
    Decode,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) => ErrorCategory::Configuration,
            Error::InvalidInput(_) => ErrorCategory::Input,
            Error::Network(_) => ErrorCategory::Transport,
            Error::Api { .. } => ErrorCategory::Remote,
            Error::Decode(_) => ErrorCategory::Decode,
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// Whether a caller-side retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) => true,
            Error::Api { status, .. } => *status == 429 || (500..=599).contains(status),
            _ => false,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// One-shot search with default options and the key from `EXA_API_KEY`.
pub async fn search(query: &str) -> Result<SearchResponse> {
    WebSearchTool::new(SearchConfiguration::default())?
        .search(query)
        .await
}
