//! Per-result content options: what the API should return for each hit.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_CHARACTERS: u32 = 3000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiveCrawl {
    Never,
    /// Serve cached content, crawl live only when the cache misses.
    #[default]
    Fallback,
    Always,
    Preferred,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_html_tags: Option<bool>,
}

impl TextOptions {
    pub fn max_characters(max: u32) -> Self {
        Self {
            max_characters: Some(max),
            include_html_tags: None,
        }
    }

    pub fn with_html_tags(mut self, include: bool) -> Self {
        self.include_html_tags = Some(include);
        self
    }
}

/// Page text retrieval: a plain switch or explicit options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextContents {
    Enabled(bool),
    Options(TextOptions),
}

impl Default for TextContents {
    fn default() -> Self {
        Self::Options(TextOptions::max_characters(DEFAULT_MAX_CHARACTERS))
    }
}

impl From<bool> for TextContents {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<TextOptions> for TextContents {
    fn from(options: TextOptions) -> Self {
        Self::Options(options)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightsOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_sentences: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights_per_url: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HighlightsContents {
    Enabled(bool),
    Options(HighlightsOptions),
}

impl From<bool> for HighlightsContents {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<HighlightsOptions> for HighlightsContents {
    fn from(options: HighlightsOptions) -> Self {
        Self::Options(options)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Custom prompt steering the generated summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SummaryContents {
    Enabled(bool),
    Options(SummaryOptions),
}

impl SummaryContents {
    pub fn query(query: impl Into<String>) -> Self {
        Self::Options(SummaryOptions {
            query: Some(query.into()),
        })
    }
}

impl From<bool> for SummaryContents {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

/// Keyword(s) used to pick which subpages get crawled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubpageTarget {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for SubpageTarget {
    fn from(target: &str) -> Self {
        Self::One(target.to_string())
    }
}

impl From<String> for SubpageTarget {
    fn from(target: String) -> Self {
        Self::One(target)
    }
}

impl From<Vec<String>> for SubpageTarget {
    fn from(targets: Vec<String>) -> Self {
        Self::Many(targets)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrasOptions {
    /// Links to return from each page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_links: Option<u32>,
}

/// What to retrieve for every result. Every field is optional; only `text`
/// and `livecrawl` have defaults when the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSpecification {
    #[serde(default)]
    pub text: Option<TextContents>,
    #[serde(default)]
    pub highlights: Option<HighlightsContents>,
    #[serde(default)]
    pub summary: Option<SummaryContents>,
    #[serde(default)]
    pub livecrawl: Option<LiveCrawl>,
    /// Milliseconds.
    #[serde(default)]
    pub livecrawl_timeout: Option<u64>,
    #[serde(default)]
    pub subpages: Option<u32>,
    #[serde(default)]
    pub subpage_target: Option<SubpageTarget>,
    #[serde(default)]
    pub extras: Option<ExtrasOptions>,
}

impl ContentSpecification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<TextContents>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_highlights(mut self, highlights: impl Into<HighlightsContents>) -> Self {
        self.highlights = Some(highlights.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<SummaryContents>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_livecrawl(mut self, mode: LiveCrawl) -> Self {
        self.livecrawl = Some(mode);
        self
    }

    pub fn with_livecrawl_timeout(mut self, timeout_ms: u64) -> Self {
        self.livecrawl_timeout = Some(timeout_ms);
        self
    }

    pub fn with_subpages(mut self, subpages: u32) -> Self {
        self.subpages = Some(subpages);
        self
    }

    pub fn with_subpage_target(mut self, target: impl Into<SubpageTarget>) -> Self {
        self.subpage_target = Some(target.into());
        self
    }

    pub fn with_extras(mut self, extras: ExtrasOptions) -> Self {
        self.extras = Some(extras);
        self
    }
}
