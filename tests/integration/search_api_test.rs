// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use axum_test::TestServer;
use migration::{Migrator, MigratorTrait};
use rankrs::domain::search::engine::SearchEngine;
use rankrs::domain::search::registry::EngineRegistry;
use rankrs::domain::services::search_service::SearchService;
use rankrs::infrastructure::repositories::search_record_repo_impl::SearchRecordRepositoryImpl;
use rankrs::infrastructure::search::bing::BingClient;
use rankrs::presentation::routes;
use rankrs::utils::retry_policy::RetryPolicy;
use sea_orm::{ConnectOptions, ConnectionTrait, Database};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESULTS_PAGE: &str = "<html><body><ol id=\"b_results\">\
    <li class=\"b_algo\"><h2><a href=\"https://example.com\">one</a></h2></li>\
    <li class=\"b_algo\"><h2><a href=\"https://infotrack.co.uk/page\">two</a></h2></li>\
    <li class=\"b_algo\"><h2><a href=\"https://other.com\">three</a></h2></li>\
    </ol></body></html>";

async fn test_db() -> sea_orm::DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

/// 以wiremock伪装bing、内存sqlite作存储，搭建完整应用
async fn test_app(engine_server: &MockServer) -> TestServer {
    let db = test_db().await;
    app_with_db(engine_server, db)
}

fn app_with_db(engine_server: &MockServer, db: sea_orm::DatabaseConnection) -> TestServer {
    let repo = Arc::new(SearchRecordRepositoryImpl::new(Arc::new(db)));
    let bing =
        BingClient::new(Duration::from_secs(5)).with_base_url(engine_server.uri());
    let registry = Arc::new(EngineRegistry::new(vec![
        Arc::new(bing) as Arc<dyn SearchEngine>
    ]));
    let policy = RetryPolicy {
        max_attempts: 2,
        initial_backoff: Duration::from_millis(1),
        enable_jitter: false,
        ..RetryPolicy::standard()
    };
    let service = Arc::new(SearchService::new(repo, registry, policy));

    let app = routes::routes().layer(Extension(service));
    TestServer::new(app).expect("build test server")
}

async fn mount_results_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RESULTS_PAGE))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_search_returns_rankings_and_echoes_inputs() {
    let engine_server = MockServer::start().await;
    mount_results_page(&engine_server).await;
    let server = test_app(&engine_server).await;

    let response = server
        .get("/api/search")
        .add_query_param("query", "conveyancing software")
        .add_query_param("targetUrl", "infotrack.co.uk")
        .add_query_param("engine", "bing")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["rankings"], serde_json::json!([2]));
    assert_eq!(body["query"], "conveyancing software");
    assert_eq!(body["targetUrl"], "infotrack.co.uk");
    assert_eq!(body["searchEngine"], "bing");
}

#[tokio::test]
async fn test_search_not_found_returns_sentinel() {
    let engine_server = MockServer::start().await;
    mount_results_page(&engine_server).await;
    let server = test_app(&engine_server).await;

    let response = server
        .get("/api/search")
        .add_query_param("query", "anything")
        .add_query_param("targetUrl", "nomatch.example")
        .add_query_param("engine", "bing")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["rankings"], serde_json::json!([0]));
}

#[tokio::test]
async fn test_unknown_engine_falls_back_to_default() {
    let engine_server = MockServer::start().await;
    mount_results_page(&engine_server).await;
    let server = test_app(&engine_server).await;

    let response = server
        .get("/api/search")
        .add_query_param("query", "q")
        .add_query_param("targetUrl", "infotrack.co.uk")
        .add_query_param("engine", "yahoo")
        .await;

    // 未知引擎名回退到bing，但响应回显原始引擎名
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["rankings"], serde_json::json!([2]));
    assert_eq!(body["searchEngine"], "yahoo");
}

#[tokio::test]
async fn test_missing_parameters_return_bad_request() {
    let engine_server = MockServer::start().await;
    let server = test_app(&engine_server).await;

    let response = server.get("/api/search").await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].is_string());
    // 参数校验失败不应触发任何引擎请求
    assert!(engine_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_target_url_returns_bad_request_before_fetch() {
    let engine_server = MockServer::start().await;
    let server = test_app(&engine_server).await;

    let response = server
        .get("/api/search")
        .add_query_param("query", "x")
        .add_query_param("targetUrl", "not a url")
        .add_query_param("engine", "bing")
        .await;

    response.assert_status_bad_request();
    assert!(engine_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_engine_failure_returns_generic_error() {
    let engine_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&engine_server)
        .await;
    let server = test_app(&engine_server).await;

    let response = server
        .get("/api/search")
        .add_query_param("query", "q")
        .add_query_param("targetUrl", "infotrack.co.uk")
        .add_query_param("engine", "bing")
        .await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    // 对外只有通用错误消息，不回显引擎状态码等内部细节
    assert_eq!(
        body["error"],
        "An unexpected error occurred while processing your request."
    );
    // 临时性失败按策略重试（max_attempts = 2）
    assert_eq!(engine_server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_history_lists_searches_newest_first() {
    let engine_server = MockServer::start().await;
    mount_results_page(&engine_server).await;
    let server = test_app(&engine_server).await;

    for query in ["first", "second"] {
        server
            .get("/api/search")
            .add_query_param("query", query)
            .add_query_param("targetUrl", "infotrack.co.uk")
            .add_query_param("engine", "bing")
            .await
            .assert_status_ok();
    }

    let response = server.get("/api/search/history").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let items = body.as_array().expect("history is an array");
    assert_eq!(items.len(), 2);
    for item in items {
        assert_eq!(item["targetUrl"], "infotrack.co.uk");
        assert_eq!(item["searchEngine"], "bing");
        assert_eq!(item["rankings"], serde_json::json!([2]));
        assert!(item["searchDate"].is_string());
    }
    // 最新的查询排在最前
    let dates: Vec<_> = items
        .iter()
        .map(|i| {
            chrono::DateTime::parse_from_rfc3339(i["searchDate"].as_str().unwrap())
                .expect("valid RFC3339 timestamp")
        })
        .collect();
    assert!(dates[0] >= dates[1]);
}

#[tokio::test]
async fn test_history_storage_failure_returns_generic_error() {
    let engine_server = MockServer::start().await;
    let db = test_db().await;
    // 模拟存储层故障
    db.execute_unprepared("DROP TABLE search_records")
        .await
        .unwrap();
    let server = app_with_db(&engine_server, db);

    let response = server.get("/api/search/history").await;

    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "An unexpected error occurred while retrieving search history."
    );
}

#[tokio::test]
async fn test_search_persistence_failure_returns_generic_error() {
    let engine_server = MockServer::start().await;
    mount_results_page(&engine_server).await;
    let db = test_db().await;
    db.execute_unprepared("DROP TABLE search_records")
        .await
        .unwrap();
    let server = app_with_db(&engine_server, db);

    let response = server
        .get("/api/search")
        .add_query_param("query", "q")
        .add_query_param("targetUrl", "infotrack.co.uk")
        .add_query_param("engine", "bing")
        .await;

    // 持久化失败发生在抓取之后，响应仍是通用消息，不含数据库细节
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "An unexpected error occurred while processing your request."
    );
    assert_eq!(engine_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_history_on_fresh_store_is_empty_array() {
    let engine_server = MockServer::start().await;
    let server = test_app(&engine_server).await;

    let response = server.get("/api/search/history").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body, serde_json::json!([]));
}
