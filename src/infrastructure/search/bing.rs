// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::infrastructure::search::{BROWSER_USER_AGENT, RESULT_PAGE_SIZE};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://www.bing.com";

/// Bing search engine client.
///
/// Issues a single GET per query against the public results page,
/// requesting a large page size so ranking analysis covers the first
/// hundred organic positions. Transport failures propagate unchanged;
/// retry policy belongs to the caller.
pub struct BingClient {
    client: reqwest::Client,
    base_url: String,
}

impl BingClient {
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

    /// Build the Bing results-listing URL with the query percent-encoded
    pub fn build_search_url(&self, query: &str) -> String {
        let params = vec![
            ("q", query.to_string()),
            ("count", RESULT_PAGE_SIZE.to_string()),
        ];
        format!(
            "{}/search?{}",
            self.base_url,
            serde_urlencoded::to_string(params).unwrap_or_default()
        )
    }
}

#[async_trait]
impl SearchEngine for BingClient {
    async fn fetch_results_page(&self, query: &str) -> Result<String, SearchError> {
        let url = self.build_search_url(query);
        debug!(url, "fetching bing results page");

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
        "bing"
    }
}
