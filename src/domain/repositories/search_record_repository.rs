// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_record::SearchRecord;
use async_trait::async_trait;
use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("数据库错误: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// 查询记录仓库特质
///
/// 定义排名查询历史的数据访问接口。记录只追加，不更新不删除。
#[async_trait]
pub trait SearchRecordRepository: Send + Sync {
    /// 保存一条查询记录，`id` 由存储层分配
    async fn save(&self, record: SearchRecord) -> Result<(), RepositoryError>;
    /// 按 `search_date` 降序返回全部历史记录；空历史返回空列表
    async fn list_all(&self) -> Result<Vec<SearchRecord>, RepositoryError>;
}
