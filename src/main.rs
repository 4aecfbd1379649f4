// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use migration::{Migrator, MigratorTrait};
use rankrs::config::settings::Settings;
use rankrs::domain::services::search_service::SearchService;
use rankrs::infrastructure::database::connection;
use rankrs::infrastructure::repositories::search_record_repo_impl::SearchRecordRepositoryImpl;
use rankrs::infrastructure::search::create_default_registry;
use rankrs::presentation::routes;
use rankrs::utils::retry_policy::RetryPolicy;
use rankrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting rankrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let repo = Arc::new(SearchRecordRepositoryImpl::new(db.clone()));
    let registry = Arc::new(create_default_registry(&settings.search));
    let retry_policy = RetryPolicy::with_max_attempts(settings.search.max_attempts);
    let service = Arc::new(SearchService::new(repo, registry, retry_policy));

    // 5. Start HTTP server
    let app = routes::routes()
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
