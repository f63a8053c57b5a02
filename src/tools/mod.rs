//! Tool surface for agent frameworks.

mod traits;
pub mod web;

pub use traits::{SchemaTool, Tool};
pub use web::{MAX_QUERY_CHARS, WebSearchInput, WebSearchTool, web_search};
