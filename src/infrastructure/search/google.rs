// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::search::{BROWSER_USER_AGENT, RESULT_PAGE_SIZE};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

// UK storefront, matching the market the tool reports on
const DEFAULT_BASE_URL: &str = "https://www.google.co.uk";

/// Google search engine client.
///
/// Same single-GET contract as the Bing client; only the URL shape
/// differs (`num` instead of `count` for the page size).
pub struct GoogleClient {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleClient {
    pub fn new(request_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(request_timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL; used by tests to point at a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the Google results-listing URL with the query percent-encoded
    pub fn build_search_url(&self, query: &str) -> String {
        let params = vec![
            ("num", RESULT_PAGE_SIZE.to_string()),
            ("q", query.to_string()),
        ];
        format!(
            "{}/search?{}",
            self.base_url,
            serde_urlencoded::to_string(params).unwrap_or_default()
        )
    }
}

#[async_trait]
impl SearchEngine for GoogleClient {
    async fn fetch_results_page(&self, query: &str) -> Result<String, SearchError> {
        let url = self.build_search_url(query);
        debug!(url, "fetching google results page");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout
            } else {
                SearchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(SearchError::RateLimited);
        }
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "google"
    }
}
