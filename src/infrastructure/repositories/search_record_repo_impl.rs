// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_record::{
    parse_rankings, serialize_rankings, SearchRecord,
};
use crate::domain::repositories::search_record_repository::{
    RepositoryError, SearchRecordRepository,
};
use crate::infrastructure::database::entities::search_record as search_record_entity;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 查询记录仓库实现
pub struct SearchRecordRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl SearchRecordRepositoryImpl {
    /// 创建新的查询记录仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的查询记录仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SearchRecordRepository for SearchRecordRepositoryImpl {
    async fn save(&self, record: SearchRecord) -> Result<(), RepositoryError> {
        let active_model = search_record_entity::ActiveModel {
            id: NotSet,
            query: Set(record.query),
            target_url: Set(record.target_url),
            search_engine: Set(record.search_engine),
            rankings: Set(serialize_rankings(&record.rankings)),
            search_date: Set(record.search_date.into()),
        };

        search_record_entity::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<SearchRecord>, RepositoryError> {
        let models = search_record_entity::Entity::find()
            .order_by_desc(search_record_entity::Column::SearchDate)
            .all(self.db.as_ref())
            .await?;

        Ok(models
            .into_iter()
            .map(|m| SearchRecord {
                id: m.id,
                query: m.query,
                target_url: m.target_url,
                search_engine: m.search_engine,
                rankings: parse_rankings(&m.rankings),
                search_date: m.search_date.into(),
            })
            .collect())
    }
}
