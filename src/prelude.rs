//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use exa_search_tool::prelude::*;
//! ```

// Core types
pub use crate::Error;
pub use crate::Result;

// Authentication
pub use crate::auth::Credential;

// Client
pub use crate::Client;
pub use crate::ClientBuilder;

// Search configuration
pub use crate::search::{
    Category, ContentSpecification, LiveCrawl, SearchConfiguration, SearchPayload, SearchType,
    TextOptions,
};

// Tools
pub use crate::tools::{SchemaTool, Tool, WebSearchTool, web_search};
pub use crate::types::{SearchResponse, ToolError, ToolResult};
