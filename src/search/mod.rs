//! Search configuration and request construction.

pub mod config;
pub mod contents;
pub mod request;

pub use config::{Category, SearchConfiguration, SearchType};
pub use contents::{
    ContentSpecification, DEFAULT_MAX_CHARACTERS, ExtrasOptions, HighlightsContents,
    HighlightsOptions, LiveCrawl, SubpageTarget, SummaryContents, SummaryOptions, TextContents,
    TextOptions,
};
pub use request::{ContentsPayload, DEFAULT_NUM_RESULTS, SearchPayload, build_payload};
