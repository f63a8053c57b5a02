//! Search configuration: how to search, independent of any single query.

use chrono::{DateTime, SecondsFormat, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use super::contents::ContentSpecification;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Lets the API combine keyword and neural retrieval.
    #[default]
    Auto,
    Keyword,
    Neural,
    Fast,
    Deep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "company")]
    Company,
    #[serde(rename = "research paper")]
    ResearchPaper,
    #[serde(rename = "news")]
    News,
    #[serde(rename = "pdf")]
    Pdf,
    #[serde(rename = "github")]
    Github,
    #[serde(rename = "personal site")]
    PersonalSite,
    #[serde(rename = "linkedin profile")]
    LinkedinProfile,
    #[serde(rename = "financial report")]
    FinancialReport,
}

/// Options describing how to search. Every field is optional.
///
/// Deserializes from the camelCase JSON shape the Exa API documents, so a
/// tool configuration can live next to the rest of an agent's settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfiguration {
    /// Falls back to `EXA_API_KEY` when unset.
    #[serde(default)]
    pub api_key: Option<SecretString>,
    #[serde(default, rename = "type")]
    pub search_type: Option<SearchType>,
    #[serde(default)]
    pub category: Option<Category>,
    /// Two-letter ISO country code, e.g. `"US"`.
    #[serde(default)]
    pub user_location: Option<String>,
    #[serde(default)]
    pub num_results: Option<u32>,
    #[serde(default)]
    pub include_domains: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_domains: Option<Vec<String>>,
    #[serde(default)]
    pub start_crawl_date: Option<String>,
    #[serde(default)]
    pub end_crawl_date: Option<String>,
    #[serde(default)]
    pub start_published_date: Option<String>,
    #[serde(default)]
    pub end_published_date: Option<String>,
    #[serde(default)]
    pub include_text: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_text: Option<Vec<String>>,
    #[serde(default)]
    pub contents: Option<ContentSpecification>,
}

impl SearchConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    pub fn with_search_type(mut self, search_type: SearchType) -> Self {
        self.search_type = Some(search_type);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_user_location(mut self, country: impl Into<String>) -> Self {
        self.user_location = Some(country.into());
        self
    }

    pub fn with_num_results(mut self, num_results: u32) -> Self {
        self.num_results = Some(num_results);
        self
    }

    pub fn with_include_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_exclude_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_domains = Some(domains.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_include_text(mut self, text: impl Into<String>) -> Self {
        self.include_text = Some(vec![text.into()]);
        self
    }

    pub fn with_exclude_text(mut self, text: impl Into<String>) -> Self {
        self.exclude_text = Some(vec![text.into()]);
        self
    }

    pub fn with_start_crawl_date(mut self, date: impl Into<String>) -> Self {
        self.start_crawl_date = Some(date.into());
        self
    }

    pub fn with_end_crawl_date(mut self, date: impl Into<String>) -> Self {
        self.end_crawl_date = Some(date.into());
        self
    }

    pub fn with_start_published_date(mut self, date: impl Into<String>) -> Self {
        self.start_published_date = Some(date.into());
        self
    }

    pub fn with_end_published_date(mut self, date: impl Into<String>) -> Self {
        self.end_published_date = Some(date.into());
        self
    }

    pub fn published_after(self, at: DateTime<Utc>) -> Self {
        self.with_start_published_date(iso8601(at))
    }

    pub fn published_before(self, at: DateTime<Utc>) -> Self {
        self.with_end_published_date(iso8601(at))
    }

    pub fn crawled_after(self, at: DateTime<Utc>) -> Self {
        self.with_start_crawl_date(iso8601(at))
    }

    pub fn crawled_before(self, at: DateTime<Utc>) -> Self {
        self.with_end_crawl_date(iso8601(at))
    }

    pub fn with_contents(mut self, contents: ContentSpecification) -> Self {
        self.contents = Some(contents);
        self
    }
}

fn iso8601(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use secrecy::ExposeSecret;
    use serde_json::json;

    #[test]
    fn test_from_camel_case_json() {
        let config: SearchConfiguration = serde_json::from_value(json!({
            "apiKey": "exa-test",
            "type": "neural",
            "category": "research paper",
            "numResults": 5,
            "includeDomains": ["arxiv.org"],
            "startPublishedDate": "2024-01-01T00:00:00.000Z",
            "contents": {"text": true}
        }))
        .unwrap();

        assert_eq!(
            config.api_key.as_ref().map(|k| k.expose_secret()),
            Some("exa-test")
        );
        assert_eq!(config.search_type, Some(SearchType::Neural));
        assert_eq!(config.category, Some(Category::ResearchPaper));
        assert_eq!(config.num_results, Some(5));
        assert_eq!(config.include_domains, Some(vec!["arxiv.org".to_string()]));
        assert!(config.contents.is_some());
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let config = SearchConfiguration::new().with_api_key("super-secret");
        assert!(!format!("{:?}", config).contains("super-secret"));
    }

    #[test]
    fn test_date_helpers_render_iso8601() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let config = SearchConfiguration::new()
            .published_after(at)
            .crawled_before(at);

        assert_eq!(
            config.start_published_date.as_deref(),
            Some("2025-03-01T12:00:00.000Z")
        );
        assert_eq!(
            config.end_crawl_date.as_deref(),
            Some("2025-03-01T12:00:00.000Z")
        );
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_value(Category::FinancialReport).unwrap(),
            "financial report"
        );
        assert_eq!(serde_json::to_value(SearchType::Deep).unwrap(), "deep");
    }
}
