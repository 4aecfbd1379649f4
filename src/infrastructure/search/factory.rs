// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SearchSettings;
use crate::domain::search::engine::SearchEngine;
use crate::domain::search::registry::EngineRegistry;
use crate::infrastructure::search::bing::BingClient;
use crate::infrastructure::search::google::GoogleClient;
use std::sync::Arc;
use std::time::Duration;

/// 创建默认引擎注册表
///
/// 在启动时装配全部已知引擎客户端（bing、google），后续的引擎名解析
/// 只在这张表上查找。
///
/// # 参数
///
/// * `settings` - 搜索引擎抓取配置
///
/// # 返回值
///
/// 返回装配好的引擎注册表
pub fn create_default_registry(settings: &SearchSettings) -> EngineRegistry {
    let timeout = Duration::from_secs(settings.request_timeout);

    let clients: Vec<Arc<dyn SearchEngine>> = vec![
        Arc::new(BingClient::new(timeout)),
        Arc::new(GoogleClient::new(timeout)),
    ];

    EngineRegistry::new(clients)
}
