//! Simple search example.
//!
//! Run: EXA_API_KEY=... cargo run --example simple_search -- "rust async runtimes"

use exa_search_tool::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "What happened in San Francisco last week?".to_string());

    let tool = web_search(
        SearchConfiguration::new()
            .with_num_results(5)
            .with_contents(
                ContentSpecification::new()
                    .with_text(TextOptions::max_characters(500))
                    .with_summary(true),
            ),
    )?;

    println!("Tool: {}", tool.name());
    println!("Payload: {}", tool.payload(&query).to_json()?);

    let response = tool.search(&query).await?;
    let parsed = response.parse()?;
    for result in &parsed.results {
        println!(
            "- {} <{}>",
            result.title.as_deref().unwrap_or("(untitled)"),
            result.url
        );
    }

    Ok(())
}
