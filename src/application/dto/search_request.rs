// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// `GET /api/search` 的查询参数
///
/// 字段为可选以便缺失参数也能进入统一的校验路径，而不是落在
/// 框架默认的拒绝响应上。
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequestDto {
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: Option<String>,
    #[validate(length(min = 1, message = "Target URL cannot be empty"))]
    pub target_url: Option<String>,
    #[validate(length(min = 1, message = "Search engine cannot be empty"))]
    pub engine: Option<String>, // e.g., "google", "bing"
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseDto {
    pub rankings: Vec<u32>,
    pub query: String,
    pub target_url: String,
    pub search_engine: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryItemDto {
    pub query: String,
    pub target_url: String,
    pub search_engine: String,
    pub rankings: Vec<u32>,
    pub search_date: DateTime<Utc>,
}
