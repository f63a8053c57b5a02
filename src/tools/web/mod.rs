//! Web tools.

mod search;

pub use search::{MAX_QUERY_CHARS, WebSearchInput, WebSearchTool, web_search};
