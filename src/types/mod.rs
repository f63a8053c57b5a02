//! Core types shared by the client and the tool surface.

mod response;
mod tool;

pub use response::{ApiResponse, ResultExtras, SearchResponse, SearchResult};
pub use tool::{ToolDefinition, ToolError, ToolResult};
