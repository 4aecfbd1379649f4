// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一次排名查询的持久化记录
///
/// 记录创建后不可变，仅追加不更新。`rankings` 中的哨兵值 `[0]` 表示
/// 目标URL未出现在任何结果中。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchRecord {
    pub id: i32,
    pub query: String,
    pub target_url: String,
    pub search_engine: String,
    pub rankings: Vec<u32>,
    pub search_date: DateTime<Utc>,
}

impl SearchRecord {
    pub fn new(
        query: String,
        target_url: String,
        search_engine: String,
        rankings: Vec<u32>,
        search_date: DateTime<Utc>,
    ) -> Self {
        Self {
            // Assigned by the store on insert
            id: 0,
            query,
            target_url,
            search_engine,
            rankings,
            search_date,
        }
    }
}

/// 将排名序列化为存储形式，例如 `[1, 5]` -> `"1, 5"`
pub fn serialize_rankings(rankings: &[u32]) -> String {
    rankings
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// 解析存储形式的排名字符串
///
/// 空白片段与无法解析的片段被丢弃；负数和超出 `u32` 范围的值
/// 解析失败，同样被丢弃，不会截断成别的排名。
pub fn parse_rankings(raw: &str) -> Vec<u32> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<u32>().ok())
        .collect()
}
