//! End-to-end tests against a mock Exa endpoint.
//!
//! Run: cargo test --test web_search_tests

use exa_search_tool::auth::EnvironmentProvider;
use exa_search_tool::prelude::*;
use exa_search_tool::search::{ExtrasOptions, SubpageTarget};
use exa_search_tool::build_payload;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_KEY: &str = "exa-test-key";

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .endpoint(format!("{}/search", server.uri()))
        .api_key(TEST_KEY)
        .build()
        .unwrap()
}

fn tool_for(server: &MockServer, config: SearchConfiguration) -> WebSearchTool {
    WebSearchTool::with_client(config, client_for(server))
}

fn sample_response() -> serde_json::Value {
    json!({
        "requestId": "b5947044c4b78efa9552a7c89b306d95",
        "resolvedSearchType": "neural",
        "results": [
            {
                "id": "https://www.rust-lang.org/",
                "title": "Rust Programming Language",
                "url": "https://www.rust-lang.org/",
                "publishedDate": null,
                "author": null,
                "text": "A language empowering everyone to build reliable and efficient software.",
                "futureField": {"nested": [1, 2, 3]}
            }
        ],
        "costDollars": {"total": 0.005}
    })
}

// =============================================================================
// Request construction on the wire
// =============================================================================

#[tokio::test]
async fn test_default_payload_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("x-api-key", TEST_KEY))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "query": "hello",
            "type": "auto",
            "numResults": 10,
            "contents": {
                "text": {"maxCharacters": 3000},
                "livecrawl": "fallback"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&server)
        .await;

    let tool = tool_for(&server, SearchConfiguration::default());
    let response = tool.search("hello").await.unwrap();
    assert_eq!(response.result_count(), 1);
}

#[tokio::test]
async fn test_configured_payload_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({
            "query": "transformer architectures",
            "type": "neural",
            "numResults": 3,
            "category": "research paper",
            "includeDomains": ["arxiv.org"],
            "startPublishedDate": "2023-01-01T00:00:00.000Z",
            "contents": {
                "text": true,
                "summary": true,
                "livecrawl": "never",
                "subpages": 1,
                "subpageTarget": ["pdf"],
                "extras": {"links": 2, "imageLinks": 1}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = SearchConfiguration::new()
        .with_search_type(SearchType::Neural)
        .with_category(Category::ResearchPaper)
        .with_num_results(3)
        .with_include_domains(["arxiv.org"])
        .with_exclude_domains(Vec::<String>::new())
        .with_start_published_date("2023-01-01T00:00:00.000Z")
        .with_contents(
            ContentSpecification::new()
                .with_text(true)
                .with_summary(true)
                .with_livecrawl(LiveCrawl::Never)
                .with_subpages(1)
                .with_subpage_target(SubpageTarget::Many(vec!["pdf".to_string()]))
                .with_extras(ExtrasOptions {
                    links: Some(2),
                    image_links: Some(1),
                }),
        );

    let tool = tool_for(&server, config);
    let response = tool.search("transformer architectures").await.unwrap();
    assert_eq!(response.result_count(), 0);
}

// =============================================================================
// Response relay
// =============================================================================

#[tokio::test]
async fn test_response_returned_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .mount(&server)
        .await;

    let tool = tool_for(&server, SearchConfiguration::default());

    let response = tool.search("rust").await.unwrap();
    assert_eq!(response.as_value(), &sample_response());

    let parsed = response.parse().unwrap();
    assert_eq!(parsed.results[0].url, "https://www.rust-lang.org/");
    assert!(parsed.results[0].extra.contains_key("futureField"));

    let result = tool.execute(json!({"query": "rust"})).await;
    assert_eq!(result.as_value(), Some(&sample_response()));
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_missing_credential_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::builder()
        .endpoint(format!("{}/search", server.uri()))
        .credential_provider(EnvironmentProvider::from_var("EXA_INTEGRATION_NO_KEY"))
        .build()
        .unwrap();
    let tool = WebSearchTool::with_client(SearchConfiguration::default(), client);

    let err = tool.search("hello").await.unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.is_configuration_error());

    let result = tool.execute(json!({"query": "hello"})).await;
    assert!(matches!(
        result,
        ToolResult::Error(ToolError::Configuration { .. })
    ));

    let received = server.received_requests().await.unwrap_or_default();
    assert!(received.is_empty());
}

#[tokio::test]
async fn test_server_error_surfaces_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .expect(1)
        .mount(&server)
        .await;

    let tool = tool_for(&server, SearchConfiguration::default());
    let err = tool.search("q").await.unwrap_err();

    match &err {
        Error::Api { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "server error");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("server error"));
}

#[tokio::test]
async fn test_unauthorized_through_tool() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&server)
        .await;

    let tool = tool_for(&server, SearchConfiguration::default());
    let result = tool.execute(json!({"query": "q"})).await;

    match result {
        ToolResult::Error(ToolError::Remote { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("Expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let tool = tool_for(&server, SearchConfiguration::default());
    let err = tool.search("q").await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let client = Client::builder()
        .endpoint("http://127.0.0.1:1/search")
        .api_key(TEST_KEY)
        .build()
        .unwrap();

    let err = client
        .search(&build_payload(&SearchConfiguration::default(), "q"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Network(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_out_of_range_query_never_sent() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(0)
        .mount(&server)
        .await;

    let tool = tool_for(&server, SearchConfiguration::default());

    let result = tool.execute(json!({"query": ""})).await;
    assert!(matches!(
        result,
        ToolResult::Error(ToolError::InvalidInput { .. })
    ));

    let result = tool.execute(json!({"query": "q".repeat(501)})).await;
    assert!(matches!(
        result,
        ToolResult::Error(ToolError::InvalidInput { .. })
    ));
}
