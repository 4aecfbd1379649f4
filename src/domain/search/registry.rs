// Copyright (c) 2026 rankrs contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::engine::SearchEngine;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// 默认引擎名：未知引擎名一律回退到该引擎
pub const DEFAULT_ENGINE: &str = "bing";

#[derive(Debug, Error)]
pub enum EngineSelectionError {
    #[error("Engine name cannot be empty")]
    EmptyEngineName,
    #[error("Default engine '{0}' is not registered")]
    MissingDefault(String),
}

/// 引擎注册表
///
/// 启动时构建的显式 名称→客户端 映射表，查找不区分大小写。
/// 未知名称回退到默认引擎是既定策略而非兜底占位，调用方可依赖该行为。
pub struct EngineRegistry {
    engines: HashMap<String, Arc<dyn SearchEngine>>,
}

impl EngineRegistry {
    pub fn new(clients: Vec<Arc<dyn SearchEngine>>) -> Self {
        let engines = clients
            .into_iter()
            .map(|c| (c.name().to_lowercase(), c))
            .collect();
        Self { engines }
    }

    /// 解析引擎名，未知名称显式回退到默认引擎
    ///
    /// # 参数
    ///
    /// * `engine_name` - 用户提交的引擎名，不区分大小写
    ///
    /// # 返回值
    ///
    /// * `Ok(client)` - 匹配的引擎客户端，或默认引擎客户端
    /// * `Err(EngineSelectionError)` - 引擎名为空白
    pub fn resolve_or_default(
        &self,
        engine_name: &str,
    ) -> Result<Arc<dyn SearchEngine>, EngineSelectionError> {
        if engine_name.trim().is_empty() {
            return Err(EngineSelectionError::EmptyEngineName);
        }

        if let Some(client) = self.engines.get(&engine_name.to_lowercase()) {
            return Ok(client.clone());
        }

        debug!(engine_name, fallback = DEFAULT_ENGINE, "unknown engine name, using default");
        self.engines
            .get(DEFAULT_ENGINE)
            .cloned()
            .ok_or_else(|| EngineSelectionError::MissingDefault(DEFAULT_ENGINE.to_string()))
    }
}
