//! Outbound request payload for the search endpoint.

use serde::Serialize;

use super::config::{Category, SearchConfiguration, SearchType};
use super::contents::{
    ContentSpecification, ExtrasOptions, HighlightsContents, LiveCrawl, SubpageTarget,
    SummaryContents, TextContents,
};

pub const DEFAULT_NUM_RESULTS: u32 = 10;

/// The exact JSON body sent to the search endpoint.
///
/// Defaults are already resolved; unset options are absent from the
/// serialized object rather than `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub query: String,
    #[serde(rename = "type")]
    pub search_type: SearchType,
    pub num_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_crawl_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_crawl_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_published_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_text: Option<Vec<String>>,
    pub contents: ContentsPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentsPayload {
    pub text: TextContents,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlights: Option<HighlightsContents>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryContents>,
    pub livecrawl: LiveCrawl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livecrawl_timeout: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subpages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subpage_target: Option<SubpageTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<ExtrasOptions>,
}

impl SearchPayload {
    /// Resolve `config` against the defaults for a single `query`.
    ///
    /// Total over its input: query length is enforced by the tool schema,
    /// not here.
    pub fn build(config: &SearchConfiguration, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_type: config.search_type.unwrap_or_default(),
            num_results: config.num_results.unwrap_or(DEFAULT_NUM_RESULTS),
            category: config.category,
            user_location: config.user_location.clone(),
            include_domains: non_empty(&config.include_domains),
            exclude_domains: non_empty(&config.exclude_domains),
            start_crawl_date: config.start_crawl_date.clone(),
            end_crawl_date: config.end_crawl_date.clone(),
            start_published_date: config.start_published_date.clone(),
            end_published_date: config.end_published_date.clone(),
            include_text: non_empty(&config.include_text),
            exclude_text: non_empty(&config.exclude_text),
            contents: config
                .contents
                .as_ref()
                .map(ContentsPayload::build)
                .unwrap_or_default(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl ContentsPayload {
    pub fn build(spec: &ContentSpecification) -> Self {
        Self {
            text: spec.text.clone().unwrap_or_default(),
            highlights: spec.highlights.clone(),
            summary: spec.summary.clone(),
            livecrawl: spec.livecrawl.unwrap_or_default(),
            livecrawl_timeout: spec.livecrawl_timeout,
            subpages: spec.subpages,
            subpage_target: spec.subpage_target.clone(),
            extras: spec.extras.clone(),
        }
    }
}

impl Default for ContentsPayload {
    fn default() -> Self {
        Self::build(&ContentSpecification::default())
    }
}

/// Shorthand for [`SearchPayload::build`].
pub fn build_payload(config: &SearchConfiguration, query: impl Into<String>) -> SearchPayload {
    SearchPayload::build(config, query)
}

fn non_empty(values: &Option<Vec<String>>) -> Option<Vec<String>> {
    values.as_ref().filter(|v| !v.is_empty()).cloned()
}
