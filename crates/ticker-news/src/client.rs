//! Tavily search client

use crate::config::NewsConfig;
use crate::error::NewsError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

/// Domains the news search is restricted to
pub const INCLUDED_DOMAINS: [&str; 2] = ["https://arstechnica.com", "https://techcrunch.com"];

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Search request payload
///
/// Everything except `query` is a constant of the system; the provider
/// contract depends on these exact field names and values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub topic: String,
    pub search_depth: String,
    pub chunks_per_source: u32,
    pub max_results: u32,
    pub days: u32,
    pub include_answer: bool,
    pub include_raw_content: bool,
    pub include_images: bool,
    pub include_image_descriptions: bool,
    pub include_domains: Vec<String>,
}

impl SearchRequest {
    /// Build the news request for a query
    pub fn news(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            topic: "news".to_string(),
            search_depth: "advanced".to_string(),
            chunks_per_source: 3,
            max_results: 3,
            days: 7,
            include_answer: true,
            include_raw_content: false,
            include_images: false,
            include_image_descriptions: false,
            include_domains: INCLUDED_DOMAINS.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Tavily API client
///
/// Performs exactly one attempt per call with a fresh HTTP client, so no
/// connection outlives the invocation. Retries would change the timeout
/// behavior callers observe, so there are none.
pub struct NewsClient {
    config: NewsConfig,
}

impl NewsClient {
    /// Create a new client over a validated configuration
    pub fn new(config: NewsConfig) -> Self {
        Self { config }
    }

    /// Search for news articles, returning the raw response body
    ///
    /// Failures before a response arrives map to
    /// [`NewsError::Transport`]; non-2xx statuses map to
    /// [`NewsError::Http`] with the status and body.
    pub async fn search(&self, query: &str) -> Result<String, NewsError> {
        let request = SearchRequest::news(query);
        let client = reqwest::Client::new();

        let response = client
            .post(self.config.api_url.clone())
            .bearer_auth(&self.config.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&request)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| NewsError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::Http {
                status: status.as_u16(),
                body,
            });
        }

        info!("Status code: {}", status.as_u16());
        response
            .text()
            .await
            .map_err(|e| NewsError::Transport(e.to_string()))
    }
}
