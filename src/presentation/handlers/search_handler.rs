// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::search_request::SearchRequestDto,
    domain::{
        repositories::search_record_repository::SearchRecordRepository,
        services::rank_extractor::ExtractionError,
        services::search_service::{SearchService, SearchServiceError},
    },
};

/// 内部错误对外只返回通用消息，细节仅写入日志
const GENERIC_SEARCH_ERROR: &str = "An unexpected error occurred while processing your request.";
const GENERIC_HISTORY_ERROR: &str =
    "An unexpected error occurred while retrieving search history.";

/// 处理排名查询请求
///
/// # 参数
///
/// * `service` - 搜索编排服务实例
/// * `params` - 查询参数（query、targetUrl、engine）
///
/// # 返回值
///
/// 返回实现了 `IntoResponse` 的响应，包含排名结果或错误信息
///
/// # 错误
///
/// 可能在以下情况下返回错误响应：
/// - 查询参数缺失、为空或目标URL格式无效（400）
/// - 引擎抓取、解析或持久化失败（500，通用消息）
pub async fn search<R>(
    Extension(service): Extension<Arc<SearchService<R>>>,
    Query(params): Query<SearchRequestDto>,
) -> impl IntoResponse
where
    R: SearchRecordRepository + 'static,
{
    if let Err(e) = params.validate() {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() })))
            .into_response();
    }

    let query = params.query.unwrap_or_default();
    let target_url = params.target_url.unwrap_or_default();
    let engine = params.engine.unwrap_or_default();

    match service.run_search(&query, &target_url, &engine).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            let (status, msg) = status_for(&e, GENERIC_SEARCH_ERROR);
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

/// 返回全部历史查询记录，最新在前
pub async fn search_history<R>(
    Extension(service): Extension<Arc<SearchService<R>>>,
) -> impl IntoResponse
where
    R: SearchRecordRepository + 'static,
{
    match service.history().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => {
            let (status, msg) = status_for(&e, GENERIC_HISTORY_ERROR);
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

fn status_for(err: &SearchServiceError, generic: &str) -> (StatusCode, String) {
    match err {
        SearchServiceError::Validation(details) => (StatusCode::BAD_REQUEST, details.clone()),
        SearchServiceError::Extraction(ExtractionError::InvalidArgument(_)) => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, generic.to_string()),
    }
}
