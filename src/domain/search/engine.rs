// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SearchError {
    #[error("Search engine returned status {0}")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Rate limit exceeded")]
    RateLimited,
    #[error("Timeout")]
    Timeout,
}

impl SearchError {
    /// 临时性错误可以重试；其余4xx类错误立即上抛
    pub fn is_transient(&self) -> bool {
        match self {
            SearchError::Network(_) | SearchError::RateLimited | SearchError::Timeout => true,
            SearchError::Status(code) => *code >= 500,
        }
    }
}

#[async_trait]
pub trait SearchEngine: Send + Sync {
    /// Fetch the raw results-page markup for a query
    ///
    /// One outbound GET per invocation; transport failures propagate
    /// unchanged and retry policy is left to the caller.
    async fn fetch_results_page(&self, query: &str) -> Result<String, SearchError>;

    /// Get the name of the search engine
    fn name(&self) -> &'static str;
}
