// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Duration, Utc};
use migration::{Migrator, MigratorTrait};
use rankrs::domain::models::search_record::SearchRecord;
use rankrs::domain::repositories::search_record_repository::{
    RepositoryError, SearchRecordRepository,
};
use sea_orm::ConnectionTrait;
use rankrs::infrastructure::repositories::search_record_repo_impl::SearchRecordRepositoryImpl;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

/// 内存sqlite必须限制为单连接，否则每个连接各自持有一个空库
async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

fn record(query: &str, offset_secs: i64) -> SearchRecord {
    SearchRecord::new(
        query.to_string(),
        "infotrack.co.uk".to_string(),
        "bing".to_string(),
        vec![1, 5],
        Utc::now() + Duration::seconds(offset_secs),
    )
}

#[tokio::test]
async fn test_list_all_on_empty_store_returns_empty() {
    let repo = SearchRecordRepositoryImpl::new(Arc::new(test_db().await));

    let records = repo.list_all().await.unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_save_then_list_round_trips_rankings() {
    let repo = SearchRecordRepositoryImpl::new(Arc::new(test_db().await));

    repo.save(record("conveyancing", 0)).await.unwrap();
    let records = repo.list_all().await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].query, "conveyancing");
    assert_eq!(records[0].target_url, "infotrack.co.uk");
    assert_eq!(records[0].search_engine, "bing");
    assert_eq!(records[0].rankings, vec![1, 5]);
    // id由存储层分配
    assert!(records[0].id > 0);
}

#[tokio::test]
async fn test_sentinel_rankings_round_trip() {
    let repo = SearchRecordRepositoryImpl::new(Arc::new(test_db().await));

    let mut r = record("no hits", 0);
    r.rankings = vec![0];
    repo.save(r).await.unwrap();

    assert_eq!(repo.list_all().await.unwrap()[0].rankings, vec![0]);
}

#[tokio::test]
async fn test_list_all_orders_newest_first() {
    let repo = SearchRecordRepositoryImpl::new(Arc::new(test_db().await));

    repo.save(record("oldest", -60)).await.unwrap();
    repo.save(record("newest", 60)).await.unwrap();
    repo.save(record("middle", 0)).await.unwrap();

    let records = repo.list_all().await.unwrap();

    let queries: Vec<_> = records.iter().map(|r| r.query.as_str()).collect();
    assert_eq!(queries, vec!["newest", "middle", "oldest"]);
}

#[tokio::test]
async fn test_storage_fault_surfaces_as_repository_error() {
    let db = Arc::new(test_db().await);
    // 模拟存储层故障：表消失后的读写都应报数据库错误而非panic
    db.execute_unprepared("DROP TABLE search_records")
        .await
        .unwrap();
    let repo = SearchRecordRepositoryImpl::new(db);

    assert!(matches!(
        repo.list_all().await,
        Err(RepositoryError::Database(_))
    ));
    assert!(matches!(
        repo.save(record("q", 0)).await,
        Err(RepositoryError::Database(_))
    ));
}

#[tokio::test]
async fn test_concurrent_saves_do_not_corrupt_history() {
    let repo = Arc::new(SearchRecordRepositoryImpl::new(Arc::new(test_db().await)));

    let mut handles = Vec::new();
    for i in 0..50i64 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.save(record(&format!("query-{}", i), i)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let records = repo.list_all().await.unwrap();

    assert_eq!(records.len(), 50);
    // 按时间降序，无相邻乱序
    assert!(records
        .windows(2)
        .all(|w| w[0].search_date >= w[1].search_date));
    // 50条记录id各不相同
    let mut ids: Vec<_> = records.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
}
