// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::search_request::{SearchHistoryItemDto, SearchResponseDto};
use crate::domain::models::search_record::SearchRecord;
use crate::domain::repositories::search_record_repository::{
    RepositoryError, SearchRecordRepository,
};
use crate::domain::search::engine::{SearchEngine, SearchError};
use crate::domain::search::registry::{EngineRegistry, EngineSelectionError};
use crate::domain::services::rank_extractor::{ExtractionError, RankExtractor};
use crate::utils::retry_policy::RetryPolicy;
use crate::utils::validators;
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum SearchServiceError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Search engine error: {0}")]
    Engine(#[from] SearchError),
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<EngineSelectionError> for SearchServiceError {
    fn from(err: EngineSelectionError) -> Self {
        match err {
            EngineSelectionError::EmptyEngineName => {
                SearchServiceError::Validation(err.to_string())
            }
            EngineSelectionError::MissingDefault(_) => {
                // 启动期装配缺陷，对调用方而言等同内部错误
                SearchServiceError::Engine(SearchError::Network(err.to_string()))
            }
        }
    }
}

/// 搜索编排服务
///
/// 按 校验 → 选择引擎 → 抓取 → 提取 → 持久化 → 响应 的线性流程处理
/// 单次排名查询。任一步骤失败立即短路，不产生部分结果。
pub struct SearchService<R> {
    repo: Arc<R>,
    registry: Arc<EngineRegistry>,
    extractor: RankExtractor,
    retry_policy: RetryPolicy,
}

impl<R> SearchService<R>
where
    R: SearchRecordRepository + 'static,
{
    pub fn new(repo: Arc<R>, registry: Arc<EngineRegistry>, retry_policy: RetryPolicy) -> Self {
        Self {
            repo,
            registry,
            extractor: RankExtractor::new(),
            retry_policy,
        }
    }

    /// 执行一次排名查询
    ///
    /// 响应中回显调用方提交的原始引擎名，而非回退后的实际引擎名。
    pub async fn run_search(
        &self,
        query: &str,
        target_url: &str,
        engine_name: &str,
    ) -> Result<SearchResponseDto, SearchServiceError> {
        // 1. Validate before any network or storage work
        Self::require_non_blank(query, "Query")?;
        Self::require_non_blank(target_url, "Target URL")?;
        Self::require_non_blank(engine_name, "Search engine")?;
        validators::validate_target_url(target_url)
            .map_err(|e| SearchServiceError::Validation(e.to_string()))?;

        // 2. Select engine (unknown names resolve to the documented default)
        let engine = self.registry.resolve_or_default(engine_name)?;

        // 3. Fetch with bounded retry on transient failures
        let markup = self.fetch_with_retry(engine.as_ref(), query).await?;

        // 4. Extract rankings
        let outcome = self.extractor.extract(&markup, target_url).map_err(|e| {
            error!(query, target_url, engine = engine.name(), %e, "rank extraction failed");
            e
        })?;
        let rankings = outcome.into_rankings();

        // 5. Persist with the caller-supplied engine name and a UTC timestamp
        let record = SearchRecord::new(
            query.to_string(),
            target_url.to_string(),
            engine_name.to_string(),
            rankings.clone(),
            Utc::now(),
        );
        self.repo.save(record).await.map_err(|e| {
            error!(query, target_url, engine = engine_name, %e, "failed to persist search record");
            e
        })?;

        // 6. Respond echoing the original inputs
        Ok(SearchResponseDto {
            rankings,
            query: query.to_string(),
            target_url: target_url.to_string(),
            search_engine: engine_name.to_string(),
        })
    }

    /// 返回全部历史记录，最新在前
    pub async fn history(&self) -> Result<Vec<SearchHistoryItemDto>, SearchServiceError> {
        let records = self.repo.list_all().await.map_err(|e| {
            error!(%e, "failed to load search history");
            e
        })?;

        Ok(records
            .into_iter()
            .map(|r| SearchHistoryItemDto {
                query: r.query,
                target_url: r.target_url,
                search_engine: r.search_engine,
                rankings: r.rankings,
                search_date: r.search_date,
            })
            .collect())
    }

    async fn fetch_with_retry(
        &self,
        engine: &dyn SearchEngine,
        query: &str,
    ) -> Result<String, SearchServiceError> {
        let mut attempt = 1u32;
        loop {
            match engine.fetch_results_page(query).await {
                Ok(markup) => return Ok(markup),
                Err(e) if e.is_transient() && self.retry_policy.should_retry(attempt) => {
                    let backoff = self.retry_policy.calculate_backoff(attempt);
                    warn!(
                        query,
                        engine = engine.name(),
                        attempt,
                        backoff_ms = backoff.as_millis() as u64,
                        %e,
                        "transient fetch failure, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!(query, engine = engine.name(), attempt, %e, "fetch failed");
                    return Err(e.into());
                }
            }
        }
    }

    fn require_non_blank(value: &str, field: &str) -> Result<(), SearchServiceError> {
        if value.trim().is_empty() {
            Err(SearchServiceError::Validation(format!(
                "{} cannot be empty",
                field
            )))
        } else {
            Ok(())
        }
    }
}
